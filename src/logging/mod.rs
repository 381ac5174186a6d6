//! Structured logging with trace correlation.
//!
//! Provides a leveled [`Logger`] facade whose records carry a `traceID`
//! field for correlating activity across components, plus the sinks that
//! deliver those records.

pub mod config;
pub mod fields;
pub mod interpolate;
pub mod level;
pub mod logger;
pub mod sink;

pub use config::*;
pub use fields::{Fields, UNKNOWN_KEY};
pub use interpolate::interpolate;
pub use level::*;
pub use logger::*;
pub use sink::*;
