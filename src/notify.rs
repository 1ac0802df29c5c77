//! Notifications
//!
//! Transient toast messages. Fire-and-forget: callers never wait on them.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub detail: Option<String>,
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, title: String, detail: Option<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, title, detail });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Toast surface shared through context
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<ToastQueue>,
    ttl_ms: u32,
}

impl Notifier {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            ttl_ms,
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        let queue = self.queue;
        Signal::derive(move || queue.with(|q| q.toasts().to_vec()))
    }

    pub fn success(&self, title: impl Into<String>) {
        self.show(ToastKind::Success, title.into(), None);
    }

    pub fn info(&self, title: impl Into<String>) {
        self.show(ToastKind::Info, title.into(), None);
    }

    pub fn error(&self, title: impl Into<String>) {
        self.show(ToastKind::Error, title.into(), None);
    }

    /// Error toast for a failed call, worded by [`failure_toast`]
    pub fn failure(&self, title: &str, fallback: &str, err: &ApiError) {
        if !err.is_rejection() {
            log::error!("{}: {}", title, err);
        }
        let (title, detail) = failure_toast(title, fallback, err);
        self.show(ToastKind::Error, title, detail);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn show(&self, kind: ToastKind, title: String, detail: Option<String>) {
        log::debug!("toast {:?}: {}", kind, title);
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, title, detail));

        let queue = self.queue;
        Timeout::new(self.ttl_ms, move || {
            let _ = queue.try_update(|q| q.dismiss(id));
        })
        .forget();
    }
}

/// Title and detail of a failure toast.
///
/// Backend message when it sent one, `fallback` for a bare rejection,
/// `title` plus the cause otherwise.
pub fn failure_toast(title: &str, fallback: &str, err: &ApiError) -> (String, Option<String>) {
    match err {
        ApiError::Rejected { message: None } => (fallback.to_string(), None),
        ApiError::Rejected { message: Some(message) } => (title.to_string(), Some(message.clone())),
        other => (title.to_string(), other.detail()),
    }
}

/// Get the notifier from context
pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_ids_are_unique() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Saved".into(), None);
        let second = queue.push(ToastKind::Error, "Failed".into(), Some("HTTP 500".into()));
        assert_ne!(first, second);
        assert_eq!(queue.toasts().len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Info, "Token not found.".into(), None);
        let second = queue.push(ToastKind::Success, "Saved".into(), None);

        queue.dismiss(first);

        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);

        // Dismissing twice is harmless
        queue.dismiss(first);
        assert_eq!(queue.toasts().len(), 1);
    }

    const TITLE: &str = "Failed to update feature.";
    const FALLBACK: &str = "Failed to update feature. Please try again.";

    #[test]
    fn test_failure_toast_bare_rejection_uses_fallback() {
        let err = ApiError::Rejected { message: None };
        assert_eq!(failure_toast(TITLE, FALLBACK, &err), (FALLBACK.to_string(), None));
    }

    #[test]
    fn test_failure_toast_shows_backend_message() {
        let err = ApiError::Rejected { message: Some("name already taken".into()) };
        assert_eq!(
            failure_toast(TITLE, FALLBACK, &err),
            (TITLE.to_string(), Some("name already taken".to_string()))
        );
    }

    #[test]
    fn test_failure_toast_transport_and_status() {
        let (title, detail) = failure_toast(TITLE, FALLBACK, &ApiError::transport("connection refused"));
        assert_eq!(title, TITLE);
        assert_eq!(detail.as_deref(), Some("connection refused"));

        let (title, detail) = failure_toast(TITLE, FALLBACK, &ApiError::Status(502));
        assert_eq!(title, TITLE);
        assert_eq!(detail.as_deref(), Some("HTTP 502"));
    }
}
