//! In-memory provider for testing.

use crate::error::{ProvisioningError, ProvisioningResult};
use crate::provider::Provider;
use crate::volume::{Volume, VolumeId, VolumeRef};
use parking_lot::Mutex;
use std::sync::Arc;

/// A volume allocated by [`InMemoryProvider`].
///
/// It holds no storage; only the identity is tracked.
#[derive(Debug)]
pub struct InMemoryVolume {
    id: VolumeId,
}

impl InMemoryVolume {
    /// Creates a volume handle with the given identity.
    #[must_use]
    pub fn new(id: VolumeId) -> Self {
        Self { id }
    }
}

impl Volume for InMemoryVolume {
    fn id(&self) -> &VolumeId {
        &self.id
    }
}

/// An in-memory provider.
///
/// This provider allocates identity-only volumes and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Daemons running without a storage backend configured
///
/// # Thread Safety
///
/// This provider is thread-safe and can be shared across threads.
///
/// # Example
///
/// ```rust
/// use hostvol_volume::{InMemoryProvider, Provider};
///
/// let provider = InMemoryProvider::with_capacity(1);
/// assert!(provider.new_volume().is_ok());
/// assert!(provider.new_volume().is_err());
/// assert_eq!(provider.allocated(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    capacity: Option<usize>,
    allocated: Mutex<usize>,
}

impl InMemoryProvider {
    /// Creates a new provider with unlimited capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider that fails once `capacity` volumes exist.
    ///
    /// Useful for testing capacity exhaustion.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            allocated: Mutex::new(0),
        }
    }

    /// Returns the number of volumes allocated so far.
    #[must_use]
    pub fn allocated(&self) -> usize {
        *self.allocated.lock()
    }

    /// Returns the configured capacity, if any.
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

impl Provider for InMemoryProvider {
    fn new_volume(&self) -> ProvisioningResult<VolumeRef> {
        let mut allocated = self.allocated.lock();

        if let Some(capacity) = self.capacity {
            if *allocated >= capacity {
                return Err(ProvisioningError::CapacityExhausted { capacity });
            }
        }

        *allocated += 1;
        Ok(Arc::new(InMemoryVolume::new(VolumeId::generate())))
    }

    fn kind(&self) -> &str {
        "memory"
    }
}
