//! Volume manager.

use crate::config::ManagerConfig;
use crate::error::{CoreError, CoreResult};
use crate::providers::ProviderSet;
use crate::proxy::RegisteringProvider;
use crate::registry::VolumeRegistry;
use hostvol_volume::{ProviderRef, VolumeId, VolumeRef};
use std::fmt;
use tracing::info;

/// Name the default provider is always registered under.
pub const DEFAULT_PROVIDER: &str = "default";

/// Routes volume creation to providers and tracks every created volume.
///
/// The manager provides:
/// - Creation through the default provider, or a named one
/// - Lookup of any created volume by identity
/// - Registration of additional named providers
///
/// ## Registry Guarantees
///
/// Every creation path goes through the same registering proxy, so:
/// - A volume returned by [`Manager::new_volume`] is already visible to
///   [`Manager::get_volume`]
/// - A failed creation registers nothing
/// - Two volumes never share an identity; a provider that repeats one gets
///   [`CoreError::RegistryConflict`]
///
/// The manager is `Send + Sync`. A daemon builds one at startup and shares it
/// with its handlers; nothing enforces a single instance per process.
pub struct Manager {
    /// Providers addressable by name.
    providers: ProviderSet,
    /// Volume identity to volume.
    volumes: VolumeRegistry,
}

impl Manager {
    /// Creates a manager whose only provider is `default_provider`.
    ///
    /// The provider is registered under [`DEFAULT_PROVIDER`] and the
    /// registry starts empty.
    #[must_use]
    pub fn new(default_provider: ProviderRef) -> Self {
        Self::with_config(default_provider, ManagerConfig::default())
    }

    /// Creates a manager with the given configuration.
    #[must_use]
    pub fn with_config(default_provider: ProviderRef, config: ManagerConfig) -> Self {
        Self {
            providers: ProviderSet::new(default_provider, config.provider_capacity),
            volumes: VolumeRegistry::with_capacity(config.initial_capacity),
        }
    }

    /// Creates a volume through the default provider.
    ///
    /// The manager does not retry and never falls back to another provider.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The provider fails, as [`CoreError::Provisioning`] holding the
    ///   provider's error
    /// - The provider returns an identity that is already registered
    pub fn new_volume(&self) -> CoreResult<VolumeRef> {
        RegisteringProvider::new(
            DEFAULT_PROVIDER,
            self.providers.default_provider(),
            &self.volumes,
        )
        .new_volume()
    }

    /// Creates a volume through the provider registered as `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ProviderNotFound`] for an unknown name, otherwise
    /// the same errors as [`Manager::new_volume`].
    pub fn new_volume_from(&self, name: &str) -> CoreResult<VolumeRef> {
        let provider = self
            .providers
            .get(name)
            .ok_or_else(|| CoreError::provider_not_found(name))?;

        RegisteringProvider::new(name, provider, &self.volumes).new_volume()
    }

    /// Returns the volume registered under `id`, or `None` if there is none.
    #[must_use]
    pub fn get_volume(&self, id: &str) -> Option<VolumeRef> {
        self.volumes.get(id)
    }

    /// Registers an additional provider under `name`.
    ///
    /// The same provider may be registered under several names.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, reserved, or already taken.
    pub fn register_provider(&self, name: &str, provider: ProviderRef) -> CoreResult<()> {
        let kind = provider.kind().to_string();
        self.providers.register(name, provider)?;
        info!(provider = name, kind = %kind, "volume provider registered");
        Ok(())
    }

    /// Returns the provider registered under `name`.
    #[must_use]
    pub fn provider(&self, name: &str) -> Option<ProviderRef> {
        self.providers.get(name)
    }

    /// Returns the default provider.
    #[must_use]
    pub fn default_provider(&self) -> ProviderRef {
        self.providers.default_provider()
    }

    /// Returns all provider names in sorted order.
    #[must_use]
    pub fn provider_names(&self) -> Vec<String> {
        self.providers.names()
    }

    /// Returns the number of registered volumes.
    #[must_use]
    pub fn volume_count(&self) -> usize {
        self.volumes.len()
    }

    /// Returns the identities of all registered volumes in sorted order.
    #[must_use]
    pub fn volume_ids(&self) -> Vec<VolumeId> {
        self.volumes.ids()
    }
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("providers", &self.providers.len())
            .field("volumes", &self.volumes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostvol_volume::{
        InMemoryProvider, InMemoryVolume, Provider, ProvisioningError, ProvisioningResult,
    };
    use parking_lot::Mutex;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    /// Hands out ids from a fixed list, then fails.
    struct ListProvider {
        ids: Mutex<Vec<&'static str>>,
    }

    impl ListProvider {
        fn new(ids: &[&'static str]) -> Self {
            let mut ids = ids.to_vec();
            ids.reverse();
            Self {
                ids: Mutex::new(ids),
            }
        }
    }

    impl Provider for ListProvider {
        fn new_volume(&self) -> ProvisioningResult<VolumeRef> {
            let id = self
                .ids
                .lock()
                .pop()
                .ok_or(ProvisioningError::CapacityExhausted { capacity: 0 })?;
            Ok(Arc::new(InMemoryVolume::new(VolumeId::from(id))))
        }
    }

    #[derive(Default)]
    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl Provider for CountingProvider {
        fn new_volume(&self) -> ProvisioningResult<VolumeRef> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            let id = VolumeId::new(format!("c-{n}"));
            Ok(Arc::new(InMemoryVolume::new(id)))
        }
    }

    #[test]
    fn manager_new_is_empty() {
        let manager = Manager::new(Arc::new(InMemoryProvider::new()));

        assert_eq!(manager.volume_count(), 0);
        assert!(manager.volume_ids().is_empty());
        assert_eq!(manager.provider_names(), vec![DEFAULT_PROVIDER.to_string()]);
    }

    #[test]
    fn manager_default_is_registered_by_name() {
        let default: ProviderRef = Arc::new(InMemoryProvider::new());
        let manager = Manager::new(Arc::clone(&default));

        let named = manager.provider(DEFAULT_PROVIDER).unwrap();
        assert!(Arc::ptr_eq(&named, &default));
        assert!(Arc::ptr_eq(&manager.default_provider(), &default));
    }

    #[test]
    fn manager_scripted_ids() {
        let manager = Manager::new(Arc::new(ListProvider::new(&["v1", "v2", "v3"])));

        let _v1 = manager.new_volume().unwrap();
        let v2 = manager.new_volume().unwrap();
        let _v3 = manager.new_volume().unwrap();

        let found = manager.get_volume("v2").unwrap();
        assert!(Arc::ptr_eq(&found, &v2));
        assert!(manager.get_volume("v9").is_none());
        assert_eq!(manager.volume_count(), 3);
    }

    #[test]
    fn manager_failure_is_propagated() {
        let manager = Manager::new(Arc::new(InMemoryProvider::with_capacity(0)));

        let err = manager.new_volume().unwrap_err();

        assert!(matches!(
            err,
            CoreError::Provisioning(ProvisioningError::CapacityExhausted { capacity: 0 })
        ));
        assert_eq!(manager.volume_count(), 0);
    }

    #[test]
    fn manager_routes_to_default_only() {
        let default = Arc::new(CountingProvider::default());
        let other = Arc::new(CountingProvider::default());
        let manager = Manager::new(default.clone());
        manager.register_provider("other", other.clone()).unwrap();

        for _ in 0..5 {
            manager.new_volume().unwrap();
        }

        assert_eq!(default.calls.load(Ordering::SeqCst), 5);
        assert_eq!(other.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn manager_new_volume_from_named_provider() {
        let default = Arc::new(CountingProvider::default());
        let fast = Arc::new(ListProvider::new(&["fast-1"]));
        let manager = Manager::new(default.clone());
        manager.register_provider("fast-ssd", fast).unwrap();

        let volume = manager.new_volume_from("fast-ssd").unwrap();

        assert_eq!(volume.id().as_str(), "fast-1");
        assert!(manager.get_volume("fast-1").is_some());
        assert_eq!(default.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn manager_new_volume_from_default_name() {
        let manager = Manager::new(Arc::new(ListProvider::new(&["d1"])));

        let volume = manager.new_volume_from(DEFAULT_PROVIDER).unwrap();
        assert_eq!(volume.id().as_str(), "d1");
    }

    #[test]
    fn manager_new_volume_from_unknown_provider() {
        let manager = Manager::new(Arc::new(InMemoryProvider::new()));

        let err = manager.new_volume_from("missing").unwrap_err();
        assert!(matches!(err, CoreError::ProviderNotFound { ref name } if name == "missing"));
        assert_eq!(manager.volume_count(), 0);
    }

    #[test]
    fn manager_conflict_across_providers() {
        let manager = Manager::new(Arc::new(ListProvider::new(&["same"])));
        manager
            .register_provider("second", Arc::new(ListProvider::new(&["same"])))
            .unwrap();

        let first = manager.new_volume().unwrap();
        let err = manager.new_volume_from("second").unwrap_err();

        match err {
            CoreError::RegistryConflict { provider, .. } => assert_eq!(provider, "second"),
            other => panic!("expected registry conflict, got {other:?}"),
        }
        assert!(Arc::ptr_eq(&manager.get_volume("same").unwrap(), &first));
    }

    #[test]
    fn manager_register_reserved_name_fails() {
        let manager = Manager::new(Arc::new(InMemoryProvider::new()));

        let other: ProviderRef = Arc::new(InMemoryProvider::new());
        let result = manager.register_provider(DEFAULT_PROVIDER, other);
        assert!(matches!(
            result,
            Err(CoreError::ReservedProviderName { .. })
        ));
    }

    #[test]
    fn manager_concurrent_creates() {
        let manager = Arc::new(Manager::new(Arc::new(CountingProvider::default())));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let manager = Arc::clone(&manager);
                thread::spawn(move || {
                    (0..50)
                        .map(|_| manager.new_volume().unwrap().id().clone())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<VolumeId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(ids.len(), 400);
        assert_eq!(manager.volume_count(), 400);
        for id in &ids {
            assert!(manager.get_volume(id.as_str()).is_some());
        }
    }

    #[test]
    fn manager_debug_shows_counts() {
        let manager = Manager::new(Arc::new(InMemoryProvider::new()));
        manager.new_volume().unwrap();

        assert_eq!(
            format!("{manager:?}"),
            "Manager { providers: 1, volumes: 1 }"
        );
    }
}
