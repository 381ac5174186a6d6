//! Cancellable draining of cursor-like sources.
//!
//! - `source` - the pull-based [`SequenceSource`] contract
//! - `cancel` - cancellation signals polled between pulls
//! - `drain` - the [`drain`] operation itself

pub mod cancel;
pub mod drain;
pub mod source;

pub use cancel::*;
pub use drain::*;
pub use source::*;
