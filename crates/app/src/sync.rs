//! Polling sync for dashboard views.
//!
//! A view owns one [`Poller`]. Its timer bumps a tick signal at a fixed
//! interval; every slice registered with [`use_polled`] re-fetches on each
//! tick and replaces its value wholesale. Each fetch takes a sequence number
//! when it starts, so a slow response can never overwrite a newer one.
//! Unmounting the view releases the poller and nothing is written after that.

use dioxus::prelude::*;
use shared_types::AppError;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Platform timer.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Cleared when the owning view unmounts.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Monotonic counter shared by every fetch of one view. Starts at 1.
#[derive(Debug, Clone, Default)]
pub struct RequestSeq(Arc<AtomicU64>);

impl RequestSeq {
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// What [`Slot::apply`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Replaced,
    /// Older than the value already shown; dropped.
    Stale,
    /// The fetch failed; the previous value stays.
    Failed,
}

/// Latest snapshot of one polled resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<T> {
    value: Option<T>,
    applied_seq: u64,
    last_error: Option<AppError>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            value: None,
            applied_seq: 0,
            last_error: None,
        }
    }
}

impl<T> Slot<T> {
    pub fn apply(&mut self, seq: u64, result: Result<T, AppError>) -> Applied {
        if seq <= self.applied_seq {
            return Applied::Stale;
        }
        match result {
            Ok(value) => {
                self.value = Some(value);
                self.applied_seq = seq;
                self.last_error = None;
                Applied::Replaced
            }
            Err(e) => {
                self.last_error = Some(e);
                Applied::Failed
            }
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Whether a fetch has ever succeeded.
    pub fn is_loaded(&self) -> bool {
        self.value.is_some()
    }

    pub fn last_error(&self) -> Option<&AppError> {
        self.last_error.as_ref()
    }
}

impl<T: Clone + Default> Slot<T> {
    /// Current value, or the empty value before the first success.
    pub fn snapshot(&self) -> T {
        self.value.clone().unwrap_or_default()
    }
}

/// Call `on_tick` every `interval` until `liveness` is released. The initial
/// fetch is the caller's; the first tick comes one interval later.
pub async fn run_poll_loop(interval: Duration, liveness: Liveness, mut on_tick: impl FnMut()) {
    loop {
        sleep(interval).await;
        if !liveness.is_alive() {
            break;
        }
        on_tick();
    }
}

/// Handle shared by a view's polled slices.
#[derive(Clone)]
pub struct Poller {
    tick: Signal<u64>,
    seq: RequestSeq,
    liveness: Liveness,
}

impl Poller {
    /// Subscribe the calling scope to ticks.
    pub fn tick(&self) -> u64 {
        *self.tick.read()
    }

    /// Re-fetch every slice now, outside the timer.
    pub fn refresh(&self) {
        if !self.liveness.is_alive() {
            return;
        }
        let mut tick = self.tick;
        *tick.write() += 1;
    }

    pub fn next_seq(&self) -> u64 {
        self.seq.next()
    }

    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }
}

/// Start a poller that ticks every `interval` while the calling component is
/// mounted.
pub fn use_poller(interval: Duration) -> Poller {
    let tick = use_signal(|| 0u64);
    let poller = use_hook(|| Poller {
        tick,
        seq: RequestSeq::default(),
        liveness: Liveness::new(),
    });

    let timer = poller.clone();
    use_future(move || {
        let timer = timer.clone();
        async move {
            let liveness = timer.liveness();
            run_poll_loop(interval, liveness, move || timer.refresh()).await;
        }
    });

    let on_drop = poller.clone();
    use_drop(move || {
        on_drop.liveness.release();
        tracing::debug!("poller released");
    });

    poller
}

/// One polled slice. `fetch` runs on mount and again on every tick, and also
/// whenever a signal it reads changes. Signals must be read before the
/// returned future is built for that to work.
pub fn use_polled<T, F, Fut>(poller: &Poller, name: &'static str, mut fetch: F) -> Signal<Slot<T>>
where
    T: 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let mut slot = use_signal(Slot::<T>::default);
    let poller = poller.clone();
    use_effect(move || {
        poller.tick();
        let seq = poller.next_seq();
        let liveness = poller.liveness();
        let pending = fetch();
        spawn(async move {
            let result = pending.await;
            if !liveness.is_alive() {
                return;
            }
            let applied = slot.write().apply(seq, result);
            match applied {
                Applied::Failed => {
                    if let Some(e) = slot.peek().last_error() {
                        tracing::warn!(slice = name, error = %e, "poll failed, keeping last snapshot");
                    }
                }
                Applied::Stale => tracing::debug!(slice = name, seq, "dropped stale response"),
                Applied::Replaced => {}
            }
        });
    });
    slot
}
