// ── Toast notification queue ──
//
// FIFO queue of transient notifications. Each toast owns its lifetime:
// enqueuing spawns a timer task that dismisses the toast when its ttl
// elapses, and manual dismissal is idempotent against it. Consumers
// subscribe to a watch channel and re-render on every change.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Default time a toast stays on screen.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

/// How loudly a toast renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Queue-unique handle for dismissing one toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

/// One queued notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub severity: Severity,
    pub title: String,
    /// Optional detail line under the title.
    pub body: Option<String>,
    pub ttl: Duration,
}

struct Inner {
    toasts: Mutex<Vec<Toast>>,
    next_id: AtomicU64,
    changed: watch::Sender<Arc<Vec<Toast>>>,
    shutdown: CancellationToken,
}

/// Shared toast queue. Cloning is cheap; all clones feed one queue.
#[derive(Clone)]
pub struct ToastQueue {
    inner: Arc<Inner>,
}

impl ToastQueue {
    pub fn new() -> Self {
        let (changed, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            inner: Arc::new(Inner {
                toasts: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                changed,
                shutdown: CancellationToken::new(),
            }),
        }
    }

    /// Enqueue a toast and arm its expiry timer.
    ///
    /// Requires a running tokio runtime. The timer task dies with the
    /// queue's shutdown token, so dropping the app doesn't leak sleepers.
    pub fn enqueue(
        &self,
        severity: Severity,
        title: impl Into<String>,
        body: Option<String>,
        ttl: Duration,
    ) -> ToastId {
        let id = ToastId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let toast = Toast {
            id,
            severity,
            title: title.into(),
            body,
            ttl,
        };
        {
            let mut toasts = self.inner.toasts.lock().expect("toast lock poisoned");
            toasts.push(toast);
            self.publish(&toasts);
        }

        let queue = self.clone();
        let shutdown = self.inner.shutdown.clone();
        tokio::spawn(async move {
            tokio::select! {
                () = tokio::time::sleep(ttl) => {
                    queue.dismiss(id);
                }
                () = shutdown.cancelled() => {}
            }
        });
        id
    }

    pub fn info(&self, title: impl Into<String>) -> ToastId {
        self.enqueue(Severity::Info, title, None, DEFAULT_TTL)
    }

    pub fn success(&self, title: impl Into<String>) -> ToastId {
        self.enqueue(Severity::Success, title, None, DEFAULT_TTL)
    }

    pub fn warning(&self, title: impl Into<String>) -> ToastId {
        self.enqueue(Severity::Warning, title, None, DEFAULT_TTL)
    }

    pub fn error(&self, title: impl Into<String>) -> ToastId {
        self.enqueue(Severity::Error, title, None, DEFAULT_TTL)
    }

    /// Remove one toast. Idempotent: dismissing an already-expired id
    /// is a no-op, so the manual close button and the ttl timer can
    /// race safely.
    pub fn dismiss(&self, id: ToastId) {
        let mut toasts = self.inner.toasts.lock().expect("toast lock poisoned");
        let before = toasts.len();
        toasts.retain(|t| t.id != id);
        if toasts.len() != before {
            self.publish(&toasts);
        }
    }

    pub fn clear_all(&self) {
        let mut toasts = self.inner.toasts.lock().expect("toast lock poisoned");
        if !toasts.is_empty() {
            toasts.clear();
            self.publish(&toasts);
        }
    }

    /// Current toasts in enqueue order.
    pub fn snapshot(&self) -> Vec<Toast> {
        self.inner
            .toasts
            .lock()
            .expect("toast lock poisoned")
            .clone()
    }

    /// Watch channel that yields the full queue on every change.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<Toast>>> {
        self.inner.changed.subscribe()
    }

    pub fn len(&self) -> usize {
        self.inner.toasts.lock().expect("toast lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cancel all pending expiry timers.
    pub fn close(&self) {
        self.inner.shutdown.cancel();
    }

    fn publish(&self, toasts: &[Toast]) {
        let _ = self.inner.changed.send(Arc::new(toasts.to_vec()));
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn toast_expires_after_ttl() {
        let queue = ToastQueue::new();
        queue.enqueue(Severity::Info, "saved", None, Duration::from_millis(100));
        assert_eq!(queue.len(), 1);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(queue.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn toasts_keep_enqueue_order() {
        let queue = ToastQueue::new();
        queue.info("first");
        queue.error("second");
        let snapshot = queue.snapshot();
        assert_eq!(snapshot[0].title, "first");
        assert_eq!(snapshot[1].title, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn manual_dismiss_races_safely_with_timer() {
        let queue = ToastQueue::new();
        let id = queue.enqueue(Severity::Success, "done", None, Duration::from_millis(100));
        queue.dismiss(id);
        assert!(queue.is_empty());

        // The timer fires later against an already-dismissed id.
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(queue.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_removes_only_the_target() {
        let queue = ToastQueue::new();
        let first = queue.info("a");
        queue.info("b");
        queue.dismiss(first);
        let snapshot = queue.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].title, "b");
    }

    #[tokio::test(start_paused = true)]
    async fn clear_all_empties_the_queue() {
        let queue = ToastQueue::new();
        let kept = queue.info("a");
        queue.warning("b");
        queue.error("c");

        queue.clear_all();
        assert!(queue.is_empty());

        // Dismissing a cleared id later stays a no-op, and new toasts
        // keep getting fresh ids.
        queue.dismiss(kept);
        let next = queue.info("d");
        assert_ne!(next, kept);
        assert_eq!(queue.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_changes() {
        let queue = ToastQueue::new();
        let mut rx = queue.subscribe();

        queue.warning("heads up");
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().len(), 1);

        tokio::time::sleep(DEFAULT_TTL + Duration::from_millis(10)).await;
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn close_cancels_pending_timers() {
        let queue = ToastQueue::new();
        queue.enqueue(Severity::Info, "sticky", None, Duration::from_millis(100));
        queue.close();
        tokio::time::sleep(Duration::from_millis(200)).await;
        // Timer was cancelled; the toast stays until dismissed by hand.
        assert_eq!(queue.len(), 1);
    }
}
