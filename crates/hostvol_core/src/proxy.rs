//! Registering provider proxy.

use crate::error::{CoreError, CoreResult};
use crate::registry::VolumeRegistry;
use hostvol_volume::{ProviderRef, VolumeRef};
use std::sync::Arc;
use tracing::{debug, warn};

/// Wraps a provider so that every volume it creates lands in the registry.
///
/// A successful creation is followed by an insert-if-absent into the
/// registry before the volume is handed back. A failed creation never
/// touches the registry and its error is returned as is.
pub(crate) struct RegisteringProvider<'a> {
    name: &'a str,
    provider: ProviderRef,
    registry: &'a VolumeRegistry,
}

impl<'a> RegisteringProvider<'a> {
    /// Wraps `provider`, addressed as `name`, over `registry`.
    pub(crate) fn new(name: &'a str, provider: ProviderRef, registry: &'a VolumeRegistry) -> Self {
        Self {
            name,
            provider,
            registry,
        }
    }

    /// Creates a volume through the wrapped provider and registers it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The provider fails (its error is carried unchanged)
    /// - The provider returns an identity that is already registered
    pub(crate) fn new_volume(&self) -> CoreResult<VolumeRef> {
        let volume = match self.provider.new_volume() {
            Ok(volume) => volume,
            Err(err) => {
                debug!(
                    provider = self.name,
                    kind = self.provider.kind(),
                    error = %err,
                    "volume provisioning failed"
                );
                return Err(err.into());
            }
        };

        if !self.registry.insert_new(Arc::clone(&volume)) {
            warn!(
                provider = self.name,
                kind = self.provider.kind(),
                volume_id = %volume.id(),
                "provider returned an already registered volume id"
            );
            return Err(CoreError::registry_conflict(volume.id().clone(), self.name));
        }

        debug!(provider = self.name, volume_id = %volume.id(), "volume registered");
        Ok(volume)
    }
}
