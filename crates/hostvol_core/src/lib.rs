//! # hostvol Core
//!
//! Volume manager for a host daemon.
//!
//! This crate provides:
//! - [`Manager`], the routing authority that owns the named providers
//! - A registry mapping volume identity to volume, safe under concurrent access
//! - Registration of every provider-created volume before it reaches the caller
//!
//! A daemon builds one manager at startup and shares it with its request
//! handlers, typically as an `Arc<Manager>`.
//!
//! ## Example
//!
//! ```rust
//! use hostvol_core::Manager;
//! use hostvol_volume::InMemoryProvider;
//! use std::sync::Arc;
//!
//! let manager = Manager::new(Arc::new(InMemoryProvider::new()));
//! let volume = manager.new_volume().unwrap();
//!
//! let found = manager.get_volume(volume.id().as_str()).unwrap();
//! assert!(Arc::ptr_eq(&found, &volume));
//! assert!(manager.get_volume("missing").is_none());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod manager;
mod providers;
mod proxy;
mod registry;

pub use config::ManagerConfig;
pub use error::{CoreError, CoreResult};
pub use manager::{Manager, DEFAULT_PROVIDER};

pub use hostvol_volume::{
    InMemoryProvider, Provider, ProviderRef, ProvisioningError, ProvisioningResult, Volume,
    VolumeId, VolumeRef,
};
