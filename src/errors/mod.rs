//! Shared error values.
//!
//! Sentinel errors returned by storage components and passed through
//! unexamined by this crate.

use thiserror::Error;

/// Sentinel storage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum StoreError {
    #[error("record key was not generated")]
    KeyInvalid,
    #[error("does not exist")]
    NotFound,
    #[error("not all rows were deleted")]
    PartialDeleteFailure,
    #[error("duplicate primary key exists")]
    DuplicateKey,
    #[error("not implemented yet")]
    NotImplemented,
    #[error("eof")]
    EndOfData,
}

pub type StoreResult<T> = Result<T, StoreError>;
