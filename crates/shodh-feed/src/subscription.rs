//! The feed abstraction: path subscriptions and their cancellation.

use serde_json::Value;

/// Callback invoked with the latest value at a subscribed path.
///
/// `None` means the path holds no data (absent or null upstream).
pub type SnapshotFn = Box<dyn FnMut(Option<&Value>) + Send>;

/// A live feed of JSON snapshots addressed by `/`-separated paths.
///
/// Implementations must deliver the last-known value immediately on
/// subscribe, then the full new value on every subsequent change.
pub trait RoomFeed {
    fn subscribe(&self, path: &str, callback: SnapshotFn) -> Subscription;
}

/// Handle for one live subscription. Dropping it detaches the callback;
/// [`Subscription::detach`] does the same explicitly.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stop delivery. No callback runs after this returns.
    pub fn detach(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
