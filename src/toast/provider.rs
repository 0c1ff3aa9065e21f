use std::future::Future;

use tracing::debug;

use crate::config::ToastConfig;

use super::center::ToastCenter;
use super::model::ToastRequest;

tokio::task_local! {
    static TOAST_CONTEXT: ToastCenter;
}

/// Owns the toast state for one UI session.
///
/// Mounting starts from an empty list. Unmounting, or dropping the provider,
/// cancels every pending auto-dismiss timer.
pub struct ToastProvider {
    center: ToastCenter,
}

impl ToastProvider {
    pub fn mount(config: ToastConfig) -> Self {
        debug!("mounting toast provider");
        Self {
            center: ToastCenter::new(config),
        }
    }

    /// Full access for the renderer: the change feed and `dismiss`.
    pub fn center(&self) -> &ToastCenter {
        &self.center
    }

    /// Runs `fut` with this provider available to [`use_toast`].
    pub async fn scope<F: Future>(&self, fut: F) -> F::Output {
        TOAST_CONTEXT.scope(self.center.clone(), fut).await
    }

    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for ToastProvider {
    fn drop(&mut self) {
        debug!("unmounting toast provider");
        self.center.shutdown();
    }
}

/// What UI code gets from [`use_toast`]: showing toasts, nothing else.
#[derive(Clone)]
pub struct ToastHandle {
    center: ToastCenter,
}

impl ToastHandle {
    /// See [`ToastCenter::show_toast`], including its panics.
    pub fn show_toast(&self, request: impl Into<ToastRequest>) {
        self.center.show_toast(request);
    }
}

/// Looks up the enclosing provider.
///
/// # Panics
///
/// Panics when called outside [`ToastProvider::scope`]; that is an
/// integration bug, not a runtime condition.
pub fn use_toast() -> ToastHandle {
    match try_use_toast() {
        Some(handle) => handle,
        None => panic!("use_toast must be used within a ToastProvider"),
    }
}

pub fn try_use_toast() -> Option<ToastHandle> {
    TOAST_CONTEXT
        .try_with(|center| ToastHandle {
            center: center.clone(),
        })
        .ok()
}
