//! Error type for the data service boundary.

use thiserror::Error;

/// Errors a backend can report through the [`MenuApi`](crate::service::MenuApi)
/// contract.
///
/// The in-memory mock only ever produces `NotFound`; `Transport` is reserved
/// for the plumbing around a real backend (and for a closed service channel).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// No record with the given id exists.
    #[error("Item not found: {0}")]
    NotFound(u64),

    /// The request never reached the service, or the reply was lost.
    #[error("transport failure: {0}")]
    Transport(String),
}
