//! # Runtime
//!
//! Runtime profiles for the [Tokio](https://tokio.rs) scheduler that hosts application startup.
//!
//! ## Profiles
//! * **Event loop**: a single-threaded cooperative scheduler. Startup phases interleave at
//!   their `.await` points exactly like a UI event loop; nothing runs in parallel.
//! * **Balanced**: a small multi-threaded scheduler for shells that keep heavier work
//!   (decoding, file I/O) off the UI thread.
//!
//! ## Example
//!
//! ```rust,ignore
//! #[ignite_runtime::main(balanced, threads = 2)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use ignite_derive::main;

use anyhow::anyhow;
use std::{sync::OnceLock, thread::available_parallelism, time::Duration};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// Upper bound for the balanced profile; startup work is I/O bound.
const MAX_BALANCED_THREADS: usize = 4;
const DEFAULT_WORKER_THREADS: usize = 2;
/// The default stack size for threads (2 `MiB`).
const DEFAULT_STACK_SIZE: usize = 2 * 1024 * 1024;
const MIN_STACK_SIZE: usize = 1024 * 1024;
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;
const THREAD_KEEP_ALIVE: Duration = Duration::from_secs(30);

static WORKER_THREADS: OnceLock<usize> = OnceLock::new();

fn detect_worker_threads() -> usize {
    *WORKER_THREADS.get_or_init(|| {
        std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0 && n <= 1024)
            .unwrap_or_else(|| {
                available_parallelism()
                    .map(std::num::NonZero::get)
                    .unwrap_or(DEFAULT_WORKER_THREADS)
                    .min(MAX_BALANCED_THREADS)
            })
    })
}

/// Scheduler flavor backing a [`RuntimeConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// One thread drives every task (cooperative event loop).
    EventLoop,
    /// Work-stealing scheduler with `worker_threads` threads.
    MultiThread,
}

/// Configuration for the Tokio runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub flavor: Flavor,
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::event_loop()
    }
}

impl RuntimeConfig {
    /// Single-threaded profile mirroring a UI event loop.
    #[must_use = "Use this configuration to run startup on a single event loop"]
    pub fn event_loop() -> Self {
        Self {
            flavor: Flavor::EventLoop,
            worker_threads: 1,
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: "ignite-loop".to_owned(),
            thread_keep_alive: THREAD_KEEP_ALIVE,
        }
    }

    /// Multi-threaded profile for shells that offload heavy preloading.
    #[must_use = "Use this configuration for multi-threaded client shells"]
    pub fn balanced() -> Self {
        Self {
            flavor: Flavor::MultiThread,
            worker_threads: detect_worker_threads(),
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: "ignite-worker".to_owned(),
            thread_keep_alive: THREAD_KEEP_ALIVE,
        }
    }

    #[must_use = "Customize the number of worker threads for the runtime"]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads.clamp(1, 1024);
        self
    }

    #[must_use = "Customize the stack size for worker threads"]
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE);
        self
    }

    #[must_use = "Customize the thread name"]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.thread_name = name;
        }
        self
    }

    fn normalized(&self) -> Self {
        let mut config = self.clone();
        config.stack_size = config.stack_size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE);
        config.worker_threads = match config.flavor {
            Flavor::EventLoop => 1,
            Flavor::MultiThread => config.worker_threads.clamp(1, 1024),
        };
        config
    }
}

/// Creates a new Tokio runtime from a [`RuntimeConfig`].
///
/// The event-loop flavor ignores `worker_threads` and `thread_keep_alive`; the
/// multi-thread flavor honours them. The timer driver is always enabled,
/// since startup phases race against a timer.
///
/// # Errors
///
/// Returns an [`anyhow::Error`] if the Tokio runtime cannot be created, typically
/// due to OS-level limits on thread creation.
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    let config = config.normalized();
    debug!(config = ?config, "Building tokio runtime");

    let mut builder = match config.flavor {
        Flavor::EventLoop => Builder::new_current_thread(),
        Flavor::MultiThread => {
            let mut builder = Builder::new_multi_thread();
            builder
                .worker_threads(config.worker_threads)
                .thread_keep_alive(config.thread_keep_alive);
            builder
        },
    };

    builder.thread_name(&config.thread_name).thread_stack_size(config.stack_size).enable_all();

    builder.build().map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_loop_is_single_threaded() {
        let config = RuntimeConfig::event_loop().with_worker_threads(8).normalized();
        assert_eq!(config.flavor, Flavor::EventLoop);
        assert_eq!(config.worker_threads, 1);
    }

    #[test]
    fn test_worker_threads_validation() {
        let config = RuntimeConfig::balanced().with_worker_threads(0);
        assert_eq!(config.worker_threads, 1);

        let config = RuntimeConfig::balanced().with_worker_threads(2000);
        assert_eq!(config.worker_threads, 1024);
    }

    #[test]
    fn test_stack_size_validation() {
        let config = RuntimeConfig::default().with_stack_size(100);
        assert_eq!(config.stack_size, MIN_STACK_SIZE);

        let config = RuntimeConfig::default().with_stack_size(100 * 1024 * 1024);
        assert_eq!(config.stack_size, MAX_STACK_SIZE);
    }

    #[test]
    fn test_blank_thread_name_is_ignored() {
        let config = RuntimeConfig::event_loop().with_thread_name("   ");
        assert_eq!(config.thread_name, "ignite-loop");
    }

    #[test]
    fn test_event_loop_runtime_runs_timers() -> Result<()> {
        let rt = build_runtime_with_config(&RuntimeConfig::event_loop())?;
        let value = rt.block_on(async {
            tokio::time::sleep(Duration::from_millis(1)).await;
            7
        });
        assert_eq!(value, 7);
        Ok(())
    }

    #[test]
    fn test_balanced_runtime_runs_spawned_work() -> Result<()> {
        let rt = build_runtime_with_config(&RuntimeConfig::balanced().with_worker_threads(2))?;
        let joined = rt.block_on(async { tokio::spawn(async { 40 + 2 }).await })?;
        assert_eq!(joined, 42);
        Ok(())
    }
}
