//! Toast notifications for the profile screen.
//!
//! Notifiers are fire-and-forget: the form emits a toast and moves on,
//! whatever renders them is someone else's problem.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient user-visible message.
#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
    pub timestamp: String,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title, description)
    }

    fn new(kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Deliver a toast to the user, fire-and-forget.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Notifier that writes toasts to the log.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Success => tracing::info!("{}: {}", toast.title, toast.description),
            ToastKind::Error => tracing::warn!("{}: {}", toast.title, toast.description),
        }
    }
}

/// Notifier that forwards toasts over a channel to a rendering layer.
///
/// A closed receiver drops the toast silently; notification delivery is
/// never allowed to fail the submit workflow.
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Toast>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, toast: Toast) {
        let _ = self.tx.send(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_notifier_delivers_in_order() {
        let (notifier, mut rx) = ChannelNotifier::new();

        notifier.notify(Toast::success("Profile updated", "All good"));
        notifier.notify(Toast::error("Update failed", "Try again"));

        let first = rx.try_recv().unwrap();
        let second = rx.try_recv().unwrap();
        assert_eq!(first.kind, ToastKind::Success);
        assert_eq!(second.kind, ToastKind::Error);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_channel_notifier_ignores_closed_receiver() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);

        // Must not panic.
        notifier.notify(Toast::success("Profile updated", "All good"));
    }
}
