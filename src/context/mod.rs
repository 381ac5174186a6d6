//! Request-scoped propagation.
//!
//! An immutable layered [`Context`] threaded through a call chain, and the
//! request ID convention stored in it.

pub mod propagation;
pub mod request;

pub use propagation::*;
pub use request::*;
