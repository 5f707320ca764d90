//! Volume registry.

use hostvol_volume::{VolumeId, VolumeRef};
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Maps volume identity to the registered volume.
///
/// All access goes through one registry-wide lock. The presence check and
/// the insert in [`VolumeRegistry::insert_new`] share a single critical
/// section, so two inserts under the same identity cannot both succeed.
#[derive(Debug, Default)]
pub(crate) struct VolumeRegistry {
    volumes: RwLock<HashMap<VolumeId, VolumeRef>>,
}

impl VolumeRegistry {
    /// Creates an empty registry with room for `capacity` volumes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            volumes: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Inserts the volume under its identity if that identity is free.
    ///
    /// Returns `false` and leaves the existing entry untouched when the
    /// identity is already registered.
    pub(crate) fn insert_new(&self, volume: VolumeRef) -> bool {
        let mut volumes = self.volumes.write();
        match volumes.entry(volume.id().clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(volume);
                true
            }
        }
    }

    /// Returns the volume registered under `id`.
    pub(crate) fn get(&self, id: &str) -> Option<VolumeRef> {
        self.volumes.read().get(id).cloned()
    }

    /// Returns the number of registered volumes.
    pub(crate) fn len(&self) -> usize {
        self.volumes.read().len()
    }

    /// Returns all registered identities in sorted order.
    pub(crate) fn ids(&self) -> Vec<VolumeId> {
        let mut ids: Vec<VolumeId> = self.volumes.read().keys().cloned().collect();
        ids.sort();
        ids
    }
}
