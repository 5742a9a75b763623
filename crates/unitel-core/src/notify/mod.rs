//! Transient toast notifications.
//!
//! Each toast owns its own timers: it stays [`ToastPhase::Visible`] for the
//! display time, switches to [`ToastPhase::Leaving`] for the exit time and is
//! then removed. Toasts stack without coordinating with each other.
//! Subscribers observe the current list through a `tokio::sync::watch`
//! channel.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastKind::Success => write!(f, "success"),
            ToastKind::Error => write!(f, "error"),
            ToastKind::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    /// Exit animation; removed once it ends.
    Leaving,
}

pub type ToastId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    pub display: Duration,
    pub exit: Duration,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            display: Duration::from_millis(3_000),
            exit: Duration::from_millis(300),
        }
    }
}

/// Cloneable handle to the shared toast list.
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<Inner>,
}

struct Inner {
    toasts: watch::Sender<Vec<Toast>>,
    next_id: AtomicU64,
    timing: NotificationTiming,
}

impl Notifier {
    pub fn new(timing: NotificationTiming) -> Self {
        let (toasts, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(Inner {
                toasts,
                next_id: AtomicU64::new(1),
                timing,
            }),
        }
    }

    /// Append a toast and schedule its dismissal.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let message = message.into();

        info!(
            event = "core.notify.toast_shown",
            toast_id = id,
            kind = %kind,
            message = %message
        );

        self.inner.toasts.send_modify(|toasts| {
            toasts.push(Toast {
                id,
                message,
                kind,
                phase: ToastPhase::Visible,
            });
        });

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(inner.timing.display).await;
            inner.toasts.send_modify(|toasts| {
                if let Some(toast) = toasts.iter_mut().find(|t| t.id == id) {
                    toast.phase = ToastPhase::Leaving;
                }
            });

            tokio::time::sleep(inner.timing.exit).await;
            inner.toasts.send_modify(|toasts| toasts.retain(|t| t.id != id));
            debug!(event = "core.notify.toast_removed", toast_id = id);
        });

        id
    }

    /// Current toasts, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.inner.toasts.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.inner.toasts.subscribe()
    }
}
