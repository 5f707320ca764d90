//! Volume identifier and handle contract.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// A shared handle to a volume.
///
/// The registry and the caller hold the same instance, so identity of the
/// handle can be checked with [`Arc::ptr_eq`].
pub type VolumeRef = Arc<dyn Volume>;

/// An identity-bearing handle to one provisioned storage resource.
///
/// The underlying resource belongs to the provider that created it. This
/// trait only exposes the identity; backend operations live on the concrete
/// type.
pub trait Volume: Send + Sync + fmt::Debug {
    /// Returns the identity assigned at creation.
    fn id(&self) -> &VolumeId;
}

/// Unique identifier for a volume.
///
/// Volume IDs are:
/// - Assigned by the provider at creation time
/// - Immutable once assigned
/// - Unique within a manager's lifetime
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VolumeId(String);

impl VolumeId {
    /// Creates a volume ID from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a new random volume ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for VolumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VolumeId({})", self.0)
    }
}

impl fmt::Display for VolumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VolumeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for VolumeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<Uuid> for VolumeId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }
}

impl AsRef<str> for VolumeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets registries keyed by `VolumeId` be probed with a plain `&str`.
impl Borrow<str> for VolumeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
