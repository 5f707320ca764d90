//! Named provider set.

use crate::error::{CoreError, CoreResult};
use crate::manager::DEFAULT_PROVIDER;
use hostvol_volume::ProviderRef;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// The providers a manager can route creation requests to.
///
/// The default provider is fixed at construction and is also registered
/// under [`DEFAULT_PROVIDER`]. Names are unique; the same provider may sit
/// behind several names.
pub(crate) struct ProviderSet {
    default: ProviderRef,
    named: RwLock<HashMap<String, ProviderRef>>,
}

impl ProviderSet {
    /// Creates a set holding only the default provider.
    pub(crate) fn new(default: ProviderRef, capacity: usize) -> Self {
        let mut named = HashMap::with_capacity(capacity.max(1));
        named.insert(DEFAULT_PROVIDER.to_string(), Arc::clone(&default));
        Self {
            default,
            named: RwLock::new(named),
        }
    }

    /// Returns the default provider.
    pub(crate) fn default_provider(&self) -> ProviderRef {
        Arc::clone(&self.default)
    }

    /// Returns the provider registered under `name`.
    pub(crate) fn get(&self, name: &str) -> Option<ProviderRef> {
        self.named.read().get(name).cloned()
    }

    /// Registers `provider` under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `name` is empty or padded with whitespace
    /// - `name` is the reserved default name
    /// - `name` is already taken
    pub(crate) fn register(&self, name: &str, provider: ProviderRef) -> CoreResult<()> {
        if name.is_empty() || name.trim() != name {
            return Err(CoreError::invalid_provider_name(name));
        }
        if name == DEFAULT_PROVIDER {
            return Err(CoreError::reserved_provider_name(name));
        }

        let mut named = self.named.write();
        if named.contains_key(name) {
            return Err(CoreError::provider_exists(name));
        }
        named.insert(name.to_string(), provider);
        Ok(())
    }

    /// Returns all registered names in sorted order.
    pub(crate) fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.named.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of registered names.
    pub(crate) fn len(&self) -> usize {
        self.named.read().len()
    }
}
