//! Fake providers for manager tests.
//!
//! Each fixture records how many times it was asked for a volume, so tests
//! can check which provider a request was routed to.

use hostvol_volume::{
    InMemoryVolume, Provider, ProvisioningError, ProvisioningResult, VolumeId, VolumeRef,
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn volume(id: VolumeId) -> VolumeRef {
    Arc::new(InMemoryVolume::new(id))
}

/// Returns a fixed sequence of identities, then fails.
///
/// Once the script runs out every call fails with
/// [`ProvisioningError::CapacityExhausted`].
#[derive(Debug)]
pub struct ScriptedProvider {
    script: Mutex<VecDeque<VolumeId>>,
    capacity: usize,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    /// Creates a provider that hands out `ids` in order.
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<VolumeId>,
    {
        let script: VecDeque<VolumeId> = ids.into_iter().map(Into::into).collect();
        Self {
            capacity: script.len(),
            script: Mutex::new(script),
            calls: AtomicUsize::new(0),
        }
    }

    /// Returns how many times `new_volume` was called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Returns how many scripted identities are left.
    pub fn remaining(&self) -> usize {
        self.script.lock().len()
    }
}

impl Provider for ScriptedProvider {
    fn new_volume(&self) -> ProvisioningResult<VolumeRef> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let id = self
            .script
            .lock()
            .pop_front()
            .ok_or(ProvisioningError::CapacityExhausted {
                capacity: self.capacity,
            })?;
        Ok(volume(id))
    }

    fn kind(&self) -> &str {
        "scripted"
    }
}

/// How a [`FailingProvider`] fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureMode {
    /// Fail with [`ProvisioningError::CapacityExhausted`].
    CapacityExhausted(usize),
    /// Fail with [`ProvisioningError::Unavailable`].
    Unavailable(String),
    /// Fail with [`ProvisioningError::Io`] of the given kind.
    Io(io::ErrorKind),
}

/// Fails every request.
#[derive(Debug)]
pub struct FailingProvider {
    mode: FailureMode,
    calls: AtomicUsize,
}

impl FailingProvider {
    /// Creates a provider that fails in the given way.
    pub fn new(mode: FailureMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
        }
    }

    /// Creates a provider that reports an unreachable backend.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(FailureMode::Unavailable(message.into()))
    }

    /// Returns how many times `new_volume` was called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Provider for FailingProvider {
    fn new_volume(&self) -> ProvisioningResult<VolumeRef> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(match &self.mode {
            FailureMode::CapacityExhausted(capacity) => ProvisioningError::CapacityExhausted {
                capacity: *capacity,
            },
            FailureMode::Unavailable(message) => ProvisioningError::unavailable(message.clone()),
            FailureMode::Io(kind) => io::Error::new(*kind, "injected failure").into(),
        })
    }

    fn kind(&self) -> &str {
        "failing"
    }
}

/// Hands out `prefix-0`, `prefix-1`, ... without end.
///
/// Safe to share across threads; identities stay distinct under contention.
#[derive(Debug)]
pub struct SequentialProvider {
    prefix: String,
    next: AtomicUsize,
}

impl SequentialProvider {
    /// Creates a provider using `prefix` for its identities.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicUsize::new(0),
        }
    }

    /// Returns how many times `new_volume` was called.
    pub fn calls(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }
}

impl Provider for SequentialProvider {
    fn new_volume(&self) -> ProvisioningResult<VolumeRef> {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        Ok(volume(VolumeId::new(format!("{}-{n}", self.prefix))))
    }

    fn kind(&self) -> &str {
        "sequential"
    }
}

/// Returns a new volume with the same identity every time.
///
/// Models a provider with broken identity generation.
#[derive(Debug)]
pub struct DuplicatingProvider {
    id: VolumeId,
    calls: AtomicUsize,
}

impl DuplicatingProvider {
    /// Creates a provider that always reports `id`.
    pub fn new(id: impl Into<VolumeId>) -> Self {
        Self {
            id: id.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Returns how many times `new_volume` was called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Provider for DuplicatingProvider {
    fn new_volume(&self) -> ProvisioningResult<VolumeRef> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(volume(self.id.clone()))
    }

    fn kind(&self) -> &str {
        "duplicating"
    }
}
