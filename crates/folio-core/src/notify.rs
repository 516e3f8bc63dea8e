//! Transient notifications ("toasts").
//!
//! The contact form reports its outcome as a [`Notification`]; the page
//! keeps them in a [`ToastQueue`] that shows each one once and drops it
//! after a fixed duration.

use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(5);

/// Toasts shown at the same time. Newer ones push older ones out.
pub const DEFAULT_TOAST_LIMIT: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

impl NotificationKind {
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast-success",
            NotificationKind::Failure => "toast-failure",
        }
    }
}

/// A title and a description to show once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn sent() -> Self {
        Self::new(
            NotificationKind::Success,
            "Message sent!",
            "Thank you for your message. I'll get back to you soon.",
        )
    }

    /// Generic failure; delivery details stay in the logs.
    pub fn send_failed() -> Self {
        Self::new(
            NotificationKind::Failure,
            "Message not sent",
            "Something went wrong. Please try again later.",
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub notification: Notification,
    pub shown_at: Instant,
}

#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    duration: Duration,
    limit: usize,
    next_id: u64,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION, DEFAULT_TOAST_LIMIT)
    }
}

impl ToastQueue {
    /// A limit of zero is treated as one.
    pub fn new(duration: Duration, limit: usize) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
            limit: limit.max(1),
            next_id: 0,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn push(&mut self, notification: Notification, now: Instant) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.toasts.insert(
            0,
            Toast {
                id,
                notification,
                shown_at: now,
            },
        );
        self.toasts.truncate(self.limit);
        id
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop toasts that have been on screen for at least the duration.
    pub fn expire(&mut self, now: Instant) {
        let duration = self.duration;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.shown_at) < duration);
    }

    /// Newest first.
    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
