// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Callback scheduling that follows the resolved settings
//!
//! Both helpers need a tokio runtime; a current-thread runtime is enough.

use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

use crate::policy::OptimalSettings;

/// Trailing delay used when none is configured
pub const DEFAULT_THROTTLE_DELAY: Duration = Duration::from_millis(16);

/// Trailing-edge debounce that is a pass-through when throttling is off
#[derive(Debug)]
pub struct Throttle {
    enabled: bool,
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Throttle {
    pub fn new(settings: &OptimalSettings, delay: Duration) -> Self {
        Self {
            enabled: settings.throttle_animations,
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn with_default_delay(settings: &OptimalSettings) -> Self {
        Self::new(settings, DEFAULT_THROTTLE_DELAY)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `f` now, or after `delay` once calls stop arriving.
    ///
    /// A call made while an earlier one is still waiting cancels it.
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if !self.enabled {
            f();
            return;
        }

        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            f();
        });

        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = pending.replace(handle) {
            trace!("Superseding pending throttled call");
            previous.abort();
        }
    }

    /// Drop the pending call, if any.
    pub fn cancel(&self) {
        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}

impl Drop for Throttle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run `f` when the runtime is otherwise idle, or on the next timer tick
/// when idle callbacks are disabled.
pub fn defer_idle<F, T>(settings: &OptimalSettings, f: F) -> JoinHandle<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    if settings.use_request_idle_callback {
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            f()
        })
    } else {
        tokio::spawn(async move {
            tokio::time::sleep(Duration::ZERO).await;
            f()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::DeviceCapabilities;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn settings(is_low_end: bool, is_mobile: bool) -> OptimalSettings {
        OptimalSettings::resolve(&DeviceCapabilities {
            is_low_end,
            is_mobile,
            has_good_gpu: true,
            reduced_motion: false,
        })
    }

    #[tokio::test]
    async fn test_unthrottled_runs_immediately() {
        let throttle = Throttle::with_default_delay(&settings(false, false));
        assert!(!throttle.is_enabled());

        let count = Arc::new(AtomicUsize::new(0));
        for _ in 0..3 {
            let count = Arc::clone(&count);
            throttle.call(move || {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttled_keeps_only_last_call() {
        let throttle = Throttle::new(&settings(false, true), Duration::from_millis(50));
        assert!(throttle.is_enabled());

        let last = Arc::new(AtomicUsize::new(0));
        let runs = Arc::new(AtomicUsize::new(0));
        for value in 1..=5 {
            let last = Arc::clone(&last);
            let runs = Arc::clone(&runs);
            throttle.call(move || {
                last.store(value, Ordering::SeqCst);
                runs.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(last.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_call() {
        let throttle = Throttle::new(&settings(true, false), Duration::from_millis(20));
        let runs = Arc::new(AtomicUsize::new(0));
        {
            let runs = Arc::clone(&runs);
            throttle.call(move || {
                runs.fetch_add(1, Ordering::SeqCst);
            });
        }
        throttle.cancel();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_defer_idle_runs_with_idle_callbacks() {
        let value = defer_idle(&settings(false, false), || 7).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_defer_idle_runs_without_idle_callbacks() {
        let low_end = settings(true, false);
        assert!(!low_end.use_request_idle_callback);
        let value = defer_idle(&low_end, || "done").await.unwrap();
        assert_eq!(value, "done");
    }

    #[tokio::test]
    async fn test_defer_idle_does_not_run_inline() {
        let ran = Arc::new(AtomicUsize::new(0));
        let handle = {
            let ran = Arc::clone(&ran);
            defer_idle(&settings(false, false), move || {
                ran.fetch_add(1, Ordering::SeqCst);
            })
        };
        assert_eq!(ran.load(Ordering::SeqCst), 0);
        handle.await.unwrap();
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }
}
