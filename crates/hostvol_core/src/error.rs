//! Error types for hostvol core.

use hostvol_volume::{ProvisioningError, VolumeId};
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in manager operations.
///
/// Looking up an unknown volume is not an error; see
/// [`crate::Manager::get_volume`].
#[derive(Debug, Error)]
pub enum CoreError {
    /// The provider could not allocate a volume.
    ///
    /// The provider's error is carried unchanged.
    #[error(transparent)]
    Provisioning(#[from] ProvisioningError),

    /// A provider returned an identity that is already registered.
    ///
    /// This is a provider defect. The new volume was rejected and the
    /// registered one is left in place.
    #[error("registry conflict: volume {id} from provider {provider:?} is already registered")]
    RegistryConflict {
        /// The colliding identity.
        id: VolumeId,
        /// Name the provider was addressed by.
        provider: String,
    },

    /// No provider is registered under the name.
    #[error("provider not found: {name}")]
    ProviderNotFound {
        /// Name that was looked up.
        name: String,
    },

    /// A provider is already registered under the name.
    #[error("provider already registered: {name}")]
    ProviderExists {
        /// Name that was taken.
        name: String,
    },

    /// The name is reserved for the default provider.
    #[error("provider name is reserved: {name}")]
    ReservedProviderName {
        /// The reserved name.
        name: String,
    },

    /// The provider name is not usable.
    #[error("invalid provider name: {name:?}")]
    InvalidProviderName {
        /// The rejected name.
        name: String,
    },
}

impl CoreError {
    /// Creates a registry conflict error.
    pub fn registry_conflict(id: VolumeId, provider: impl Into<String>) -> Self {
        Self::RegistryConflict {
            id,
            provider: provider.into(),
        }
    }

    /// Creates a provider not found error.
    pub fn provider_not_found(name: impl Into<String>) -> Self {
        Self::ProviderNotFound { name: name.into() }
    }

    /// Creates a provider exists error.
    pub fn provider_exists(name: impl Into<String>) -> Self {
        Self::ProviderExists { name: name.into() }
    }

    /// Creates a reserved provider name error.
    pub fn reserved_provider_name(name: impl Into<String>) -> Self {
        Self::ReservedProviderName { name: name.into() }
    }

    /// Creates an invalid provider name error.
    pub fn invalid_provider_name(name: impl Into<String>) -> Self {
        Self::InvalidProviderName { name: name.into() }
    }

    /// Returns true if the error came from the provider.
    #[must_use]
    pub fn is_provisioning(&self) -> bool {
        matches!(self, Self::Provisioning(_))
    }

    /// Returns the provider's error, if this is one.
    #[must_use]
    pub fn provisioning_error(&self) -> Option<&ProvisioningError> {
        match self {
            Self::Provisioning(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provisioning_is_transparent() {
        let err: CoreError = ProvisioningError::unavailable("no route").into();
        assert_eq!(err.to_string(), "backend unavailable: no route");
        assert!(err.is_provisioning());
        assert!(matches!(
            err.provisioning_error(),
            Some(ProvisioningError::Unavailable { .. })
        ));
    }

    #[test]
    fn conflict_message() {
        let err = CoreError::registry_conflict(VolumeId::from("v1"), "default");
        assert_eq!(
            err.to_string(),
            "registry conflict: volume v1 from provider \"default\" is already registered"
        );
        assert!(!err.is_provisioning());
        assert!(err.provisioning_error().is_none());
    }

    #[test]
    fn provider_name_errors() {
        assert_eq!(
            CoreError::provider_not_found("ssd").to_string(),
            "provider not found: ssd"
        );
        assert_eq!(
            CoreError::provider_exists("ssd").to_string(),
            "provider already registered: ssd"
        );
        assert_eq!(
            CoreError::reserved_provider_name("default").to_string(),
            "provider name is reserved: default"
        );
        assert_eq!(
            CoreError::invalid_provider_name("").to_string(),
            "invalid provider name: \"\""
        );
    }
}
