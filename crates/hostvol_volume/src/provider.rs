//! Provider trait definition.

use crate::error::ProvisioningResult;
use crate::volume::VolumeRef;
use std::sync::Arc;

/// A shared handle to a provider.
///
/// The same provider may be registered under several names and may outlive
/// any manager it is registered with.
pub type ProviderRef = Arc<dyn Provider>;

/// A pluggable backend that allocates volumes.
///
/// Providers are **opaque allocators**. The only capability the volume layer
/// relies on is [`Provider::new_volume`]; everything else a backend can do
/// (mounting, attaching, resizing) stays behind its own API.
///
/// # Invariants
///
/// - `new_volume` assigns the identity, callers never choose it
/// - A provider never returns two volumes with the same identity during its
///   lifetime
/// - A failed `new_volume` leaves no volume behind
/// - Providers must be `Send + Sync` for concurrent access
///
/// # Implementors
///
/// - [`super::InMemoryProvider`] - For testing
pub trait Provider: Send + Sync {
    /// Allocates a new volume with a freshly assigned identity.
    ///
    /// The call may block on backend I/O.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The backend has no capacity left
    /// - An I/O error occurs
    /// - The backend is unreachable
    fn new_volume(&self) -> ProvisioningResult<VolumeRef>;

    /// Short label for the backend kind, used in log fields.
    fn kind(&self) -> &str {
        "unknown"
    }
}
