//! Error types for provisioning operations.

use std::io;
use thiserror::Error;

/// Result type for provisioning operations.
pub type ProvisioningResult<T> = Result<T, ProvisioningError>;

/// Errors a provider reports when it cannot allocate a volume.
#[derive(Debug, Error)]
pub enum ProvisioningError {
    /// The backend has no room for another volume.
    #[error("capacity exhausted: backend holds at most {capacity} volumes")]
    CapacityExhausted {
        /// Maximum number of volumes the backend can hold.
        capacity: usize,
    },

    /// An I/O error occurred in the backend.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backend could not be reached.
    #[error("backend unavailable: {message}")]
    Unavailable {
        /// Description of the failure.
        message: String,
    },

    /// Any other backend-specific failure.
    #[error("backend error: {message}")]
    Backend {
        /// Description of the failure.
        message: String,
    },
}

impl ProvisioningError {
    /// Creates a backend unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a generic backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}
