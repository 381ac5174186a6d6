//! Drain a sequence source into memory.
//!
//! The loop checks the cancellation signal before every pull, stops on the
//! first source error without retrying, and always releases the source.
//! Records keep the order the source produced them in; on cancellation or
//! error the caller gets whatever was collected up to that point.

use std::fmt;

use thiserror::Error;

use crate::logging::Logger;

use super::cancel::CancelSignal;
use super::source::{CloseGuard, SequenceSource};

/// Name of the logger used by [`drain`].
pub const DRAIN_LOGGER: &str = "drain";

/// Records collected by a drain that ended without a source error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drained<T> {
    pub records: Vec<T>,
    /// True when the drain stopped because the signal fired rather than
    /// because the source was exhausted.
    pub cancelled: bool,
}

impl<T> Drained<T> {
    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

/// A source error together with the records collected before it.
#[derive(Error)]
#[error("sequence source failed after {} records: {source}", .partial.len())]
pub struct DrainError<T, E> {
    partial: Vec<T>,
    #[source]
    source: E,
}

impl<T, E> DrainError<T, E> {
    /// Records collected before the failure.
    pub fn partial(&self) -> &[T] {
        &self.partial
    }

    /// The error reported by the source.
    pub fn source_error(&self) -> &E {
        &self.source
    }

    pub fn into_parts(self) -> (Vec<T>, E) {
        (self.partial, self.source)
    }
}

impl<T, E: fmt::Debug> fmt::Debug for DrainError<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrainError")
            .field("collected", &self.partial.len())
            .field("source", &self.source)
            .finish()
    }
}

/// Drain `source` until it is exhausted, fails, or `cancel` fires.
///
/// Logs through a logger named [`DRAIN_LOGGER`] built from the process
/// default configuration.
pub fn drain<S, C>(
    source: &mut S,
    cancel: &C,
) -> Result<Drained<S::Item>, DrainError<S::Item, S::Error>>
where
    S: SequenceSource + ?Sized,
    S::Error: fmt::Display,
    C: CancelSignal + ?Sized,
{
    drain_with_logger(source, cancel, &Logger::new(DRAIN_LOGGER))
}

/// [`drain`] with an explicit logger.
pub fn drain_with_logger<S, C>(
    source: &mut S,
    cancel: &C,
    logger: &Logger,
) -> Result<Drained<S::Item>, DrainError<S::Item, S::Error>>
where
    S: SequenceSource + ?Sized,
    S::Error: fmt::Display,
    C: CancelSignal + ?Sized,
{
    let mut guard = CloseGuard::new(source);
    let mut records = Vec::new();

    crate::store_debug!(logger, "DRAIN_START");

    loop {
        if cancel.is_cancelled() {
            crate::store_info!(logger, "DRAIN_CANCELLED", collected = records.len());
            return Ok(Drained {
                records,
                cancelled: true,
            });
        }

        match guard.source().next() {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {
                crate::store_debug!(logger, "DRAIN_COMPLETE", collected = records.len());
                return Ok(Drained {
                    records,
                    cancelled: false,
                });
            }
            Err(err) => {
                crate::store_error!(
                    logger,
                    "DRAIN_SOURCE_FAILED",
                    collected = records.len(),
                    err = err.to_string()
                );
                return Err(DrainError {
                    partial: records,
                    source: err,
                });
            }
        }
    }
}
