use std::time::Duration;

use tokio::task::JoinHandle;

/// One-shot timer running on the tokio runtime.
///
/// The callback runs once after `delay` unless the timer is cancelled
/// first. Dropping the handle cancels the timer too.
#[derive(Debug)]
pub struct DismissTimer {
    handle: JoinHandle<()>,
}

impl DismissTimer {
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(delay: Duration, on_fire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire();
        });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
