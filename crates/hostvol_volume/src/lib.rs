//! # hostvol Volume
//!
//! Volume and provider contracts for hostvol.
//!
//! This crate provides the lowest-level abstraction of the volume layer.
//! Providers are **opaque allocators** - they hand out identity-bearing
//! volume handles and know nothing about the registry that tracks them.
//!
//! ## Design Principles
//!
//! - A provider has one capability: allocate a new volume
//! - The provider, not the caller, assigns the volume identity
//! - Providers and volumes must be `Send + Sync` for concurrent access
//! - Mount, attach and sizing belong to concrete backends, not to this crate
//!
//! ## Available Providers
//!
//! - [`InMemoryProvider`] - For testing and ephemeral volumes
//!
//! ## Example
//!
//! ```rust
//! use hostvol_volume::{InMemoryProvider, Provider};
//!
//! let provider = InMemoryProvider::new();
//! let volume = provider.new_volume().unwrap();
//! assert!(!volume.id().as_str().is_empty());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod memory;
mod provider;
mod volume;

pub use error::{ProvisioningError, ProvisioningResult};
pub use memory::{InMemoryProvider, InMemoryVolume};
pub use provider::{Provider, ProviderRef};
pub use volume::{Volume, VolumeId, VolumeRef};
