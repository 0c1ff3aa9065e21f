use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, trace, warn};

use crate::config::ToastConfig;

use super::id::generate_toast_id;
use super::model::{Toast, ToastId, ToastRequest};
use super::timer::DismissTimer;

struct Inner {
    config: ToastConfig,
    active: watch::Sender<Vec<Toast>>,
    timers: Mutex<HashMap<ToastId, DismissTimer>>,
    closed: AtomicBool,
}

impl Inner {
    fn timers(&self) -> MutexGuard<'_, HashMap<ToastId, DismissTimer>> {
        self.timers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns whether a toast was actually removed.
    fn remove(&self, id: &ToastId) -> bool {
        self.active.send_if_modified(|toasts| {
            let before = toasts.len();
            toasts.retain(|toast| &toast.id != id);
            toasts.len() != before
        })
    }
}

/// Holds the active toasts for one UI session and evicts them when their
/// duration elapses.
///
/// Clones share the same state. Pending timers only keep a weak reference
/// to it, so once every clone is dropped no callback can touch it.
#[derive(Clone)]
pub struct ToastCenter {
    inner: Arc<Inner>,
}

impl ToastCenter {
    pub fn new(config: ToastConfig) -> Self {
        let (active, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(Inner {
                config,
                active,
                timers: Mutex::new(HashMap::new()),
                closed: AtomicBool::new(false),
            }),
        }
    }

    /// Appends a toast and, for a non-zero duration, schedules its removal.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime with a non-zero duration,
    /// since the auto-dismiss timer is spawned on the current runtime.
    pub fn show_toast(&self, request: impl Into<ToastRequest>) {
        // The timers lock is held for the whole call so that `shutdown`
        // cannot drain the map between the closed check and registration.
        let mut timers = self.inner.timers();
        if self.inner.closed.load(Ordering::Acquire) {
            warn!("show_toast called after the toast center was shut down");
            return;
        }

        let request = request.into();
        let duration = request
            .duration_ms
            .unwrap_or(self.inner.config.default_duration_ms);
        let id = generate_toast_id(self.inner.config.id_strategy);

        let toast = Toast {
            id: id.clone(),
            title: request.title,
            description: request.description,
            variant: request.variant,
            duration,
        };
        debug!("showing toast {} ({:?}, {}ms)", id, toast.variant, duration);
        self.inner.active.send_modify(|toasts| toasts.push(toast));

        if duration == 0 {
            return;
        }

        let weak = Arc::downgrade(&self.inner);
        let timer_id = id.clone();
        let timer = DismissTimer::schedule(Duration::from_millis(duration), move || {
            if let Some(inner) = weak.upgrade() {
                inner.timers().remove(&timer_id);
                if inner.remove(&timer_id) {
                    trace!("auto-dismissed toast {}", timer_id);
                }
            }
        });
        timers.insert(id, timer);
    }

    /// Removes the toast if present and cancels its pending timer. Unknown
    /// ids are ignored.
    pub fn dismiss(&self, id: &ToastId) {
        if let Some(timer) = self.inner.timers().remove(id) {
            timer.cancel();
        }
        if self.inner.remove(id) {
            debug!("dismissed toast {}", id);
        }
    }

    /// Snapshot of the active toasts, oldest first.
    pub fn active(&self) -> Vec<Toast> {
        self.inner.active.borrow().clone()
    }

    /// Change feed for the component that renders the toasts.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.inner.active.subscribe()
    }

    pub fn pending_timers(&self) -> usize {
        self.inner.timers().len()
    }

    /// Cancels every pending timer and refuses new toasts.
    pub fn shutdown(&self) {
        let timers: Vec<DismissTimer> = {
            let mut pending = self.inner.timers();
            self.inner.closed.store(true, Ordering::Release);
            pending.drain().map(|(_, t)| t).collect()
        };
        if !timers.is_empty() {
            debug!("cancelling {} pending toast timers", timers.len());
        }
        for timer in timers {
            timer.cancel();
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }
}
