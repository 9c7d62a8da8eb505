//! Trailing-edge debounce keyed by a generation counter.
//!
//! Each `schedule` call bumps the generation and starts a timer; when a timer
//! fires it only runs its callback if no newer call has been made since. A
//! burst of keystrokes therefore produces exactly one callback, `delay_ms`
//! after the last one.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Generation counter shared between a debouncer and its pending timers.
#[derive(Clone, Debug, Default)]
pub struct DebounceGate {
    generation: Arc<AtomicU64>,
}

impl DebounceGate {
    /// Supersede every earlier ticket and return a fresh one.
    pub fn arm(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether `ticket` is still the most recent one.
    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::Relaxed) == ticket
    }
}

/// Debouncer for UI callbacks.
#[derive(Clone, Debug)]
pub struct Debouncer {
    gate: DebounceGate,
    delay_ms: u32,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay_ms: u32) -> Self {
        Self { gate: DebounceGate::default(), delay_ms }
    }

    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Run `f` after the delay unless another call supersedes it first.
    ///
    /// Outside the browser there is no timer and `f` runs immediately.
    pub fn schedule<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        let ticket = self.gate.arm();
        #[cfg(feature = "hydrate")]
        {
            let gate = self.gate.clone();
            let delay_ms = self.delay_ms;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                if gate.is_current(ticket) {
                    f();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            if self.gate.is_current(ticket) {
                f();
            }
        }
    }

    /// Drop any pending callback without scheduling a new one.
    pub fn cancel(&self) {
        self.gate.arm();
    }
}
