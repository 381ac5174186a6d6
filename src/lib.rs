//! Store Common - shared logging and cursor draining
//!
//! Cross-cutting infrastructure used by the storage components. The crate
//! itself holds no storage logic.
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `logging` - Leveled structured logger with trace correlation and sinks
//! - `context` - Immutable propagation context and request IDs
//! - `iteration` - Cancellable draining of cursor-like sources
//! - `errors` - Shared sentinel errors
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use store_common::context::{new_request_id, with_request_id, Context};
//! use store_common::iteration::{drain_with_logger, CancellationFlag, IterSource};
//! use store_common::logging::{Level, Logger, LoggerConfig, MemorySink};
//!
//! let sink = Arc::new(MemorySink::new());
//! let config = LoggerConfig::new().with_level(Level::Info).with_sink(sink.clone());
//! let ctx = with_request_id(&Context::background(), new_request_id());
//! let logger = Logger::with_config("scan", &config).for_context(&ctx);
//!
//! let mut rows = IterSource::new(vec![Ok::<_, std::io::Error>("a"), Ok("b")].into_iter());
//! let drained = drain_with_logger(&mut rows, &CancellationFlag::new(), &logger).unwrap();
//! store_common::store_info!(logger, "SCAN_COMPLETE", rows = drained.records.len());
//!
//! assert_eq!(drained.records, vec!["a", "b"]);
//! assert_eq!(sink.len(), 1);
//! ```

pub mod context;
pub mod errors;
pub mod iteration;
pub mod logging;

pub use context::{new_request_id, request_id, with_request_id, Context};
pub use errors::{StoreError, StoreResult};
pub use iteration::{drain, drain_with_logger, CancelSignal, Drained, DrainError, SequenceSource};
pub use logging::{Fields, Level, Logger, LoggerConfig, Sink};
