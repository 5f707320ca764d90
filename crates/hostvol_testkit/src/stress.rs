//! Stress helpers for the manager.
//!
//! These helpers drive volume creation from many threads at once.

use hostvol_core::Manager;
use hostvol_volume::VolumeId;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Result of a stress run.
#[derive(Debug, Clone)]
pub struct StressResult {
    /// Volumes created successfully.
    pub created: usize,
    /// Creation calls that returned an error.
    pub failed: usize,
    /// Identities of every created volume.
    pub ids: HashSet<VolumeId>,
    /// Total duration.
    pub duration: Duration,
}

impl StressResult {
    /// Returns the total number of creation calls.
    pub fn total(&self) -> usize {
        self.created + self.failed
    }

    /// Returns creation calls per second.
    pub fn ops_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.total() as f64 / secs
        } else {
            0.0
        }
    }
}

/// Configuration for stress runs.
#[derive(Debug, Clone)]
pub struct StressConfig {
    /// Number of concurrent threads.
    pub threads: usize,
    /// Creation calls per thread.
    pub per_thread: usize,
    /// Provider to create through; `None` means the default provider.
    pub provider: Option<String>,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            threads: 8,
            per_thread: 250,
            provider: None,
        }
    }
}

/// Calls `new_volume` concurrently from `config.threads` threads.
///
/// Each thread also looks up every volume it created right after creation,
/// and counts a missing lookup as a failure.
pub fn stress_concurrent_creates(manager: &Arc<Manager>, config: &StressConfig) -> StressResult {
    let start = Instant::now();

    let handles: Vec<_> = (0..config.threads)
        .map(|_| {
            let manager = Arc::clone(manager);
            let per_thread = config.per_thread;
            let provider = config.provider.clone();
            thread::spawn(move || {
                let mut ids = Vec::with_capacity(per_thread);
                let mut failed = 0usize;
                for _ in 0..per_thread {
                    let result = match &provider {
                        Some(name) => manager.new_volume_from(name),
                        None => manager.new_volume(),
                    };
                    match result {
                        Ok(volume) if manager.get_volume(volume.id().as_str()).is_some() => {
                            ids.push(volume.id().clone());
                        }
                        _ => failed += 1,
                    }
                }
                (ids, failed)
            })
        })
        .collect();

    let mut ids = HashSet::new();
    let mut created = 0usize;
    let mut failed = 0usize;
    for handle in handles {
        match handle.join() {
            Ok((thread_ids, thread_failed)) => {
                created += thread_ids.len();
                failed += thread_failed;
                ids.extend(thread_ids);
            }
            Err(_) => failed += config.per_thread,
        }
    }

    StressResult {
        created,
        failed,
        ids,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{FailingProvider, SequentialProvider};

    #[test]
    fn stress_sequential_provider() {
        let manager = Arc::new(Manager::new(Arc::new(SequentialProvider::new("s"))));
        let config = StressConfig {
            threads: 4,
            per_thread: 100,
            provider: None,
        };

        let result = stress_concurrent_creates(&manager, &config);

        assert_eq!(result.created, 400);
        assert_eq!(result.failed, 0);
        assert_eq!(result.ids.len(), 400);
        assert_eq!(manager.volume_count(), 400);
    }

    #[test]
    fn stress_failing_provider() {
        let manager = Arc::new(Manager::new(Arc::new(FailingProvider::unavailable("down"))));
        let config = StressConfig {
            threads: 2,
            per_thread: 10,
            provider: None,
        };

        let result = stress_concurrent_creates(&manager, &config);

        assert_eq!(result.created, 0);
        assert_eq!(result.failed, 20);
        assert_eq!(result.total(), 20);
        assert_eq!(manager.volume_count(), 0);
    }
}
