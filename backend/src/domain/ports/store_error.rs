//! Failure signal shared by every record-store port.
//!
//! The record store is a single collaborator, so all repositories report the
//! same three failure categories. Services convert them to domain errors via
//! the [`From`] impl and `?`.

use super::define_port_error;
use crate::domain::error::Error;

define_port_error! {
    /// Errors raised by record-store adapters.
    pub enum StoreError {
        /// The store cannot be reached right now.
        Unavailable { message: String } =>
            "record store unavailable: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } =>
            "record store query failed: {message}",
        /// A uniqueness guard rejected the write.
        Conflict { message: String } =>
            "record store conflict: {message}",
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable { .. } => {
                tracing::warn!(error = %err, "record store unavailable");
                Error::service_unavailable("record store unavailable")
            }
            StoreError::Query { .. } => {
                tracing::error!(error = %err, "record store query failed");
                Error::internal(err.to_string())
            }
            StoreError::Conflict { message } => Error::invalid_request(message),
        }
    }
}
