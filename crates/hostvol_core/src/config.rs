//! Manager configuration.

/// Configuration for building a [`crate::Manager`].
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    /// Number of volumes the registry reserves room for up front.
    pub initial_capacity: usize,

    /// Number of named providers the provider set reserves room for.
    pub provider_capacity: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            provider_capacity: 4,
        }
    }
}

impl ManagerConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial registry capacity.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the provider set capacity.
    #[must_use]
    pub fn with_provider_capacity(mut self, capacity: usize) -> Self {
        self.provider_capacity = capacity;
        self
    }
}
