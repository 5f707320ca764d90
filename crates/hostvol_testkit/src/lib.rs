//! # hostvol Testkit
//!
//! Test utilities for hostvol.
//!
//! This crate provides:
//! - Fake providers with scripted, failing, counting and duplicating behavior
//! - Property-based test generators using proptest
//! - Concurrent creation stress helpers
//!
//! ## Usage
//!
//! ```rust
//! use hostvol_testkit::prelude::*;
//! use std::sync::Arc;
//!
//! let manager = Manager::new(Arc::new(ScriptedProvider::new(["v1", "v2"])));
//! let v1 = manager.new_volume().unwrap();
//! assert_eq!(v1.id().as_str(), "v1");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod stress;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::stress::*;
    pub use hostvol_core::{CoreError, Manager, ManagerConfig, DEFAULT_PROVIDER};
    pub use hostvol_volume::{Provider, ProvisioningError, Volume, VolumeId, VolumeRef};
}

pub use fixtures::*;
pub use generators::*;
pub use stress::*;
