//! Outcome notifications
//!
//! Each terminal order outcome produces an independent full-screen overlay.
//! Overlays are plain view-models: the renderer turns every field into a
//! text node, so user or package strings are never interpreted as markup.

use std::time::Duration;

use tokio::time::Instant;

use crate::catalog::Package;

/// Identifier of a notification within its stack
pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS class for the overlay card
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success-notification",
            NotificationKind::Error => "error-notification",
        }
    }
}

/// A terminal outcome overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub detail: Option<String>,
    pub dismiss_label: &'static str,
    /// Removed automatically after this long when not dismissed first
    pub auto_dismiss: Option<Duration>,
}

impl Notification {
    /// Order confirmation for `package`
    pub fn success(id: NotificationId, package: &Package, auto_dismiss: Duration) -> Self {
        Self {
            id,
            kind: NotificationKind::Success,
            title: "Order Confirmed!".to_string(),
            message: format!(
                "Your {} order has been successfully processed.",
                package.name
            ),
            detail: Some(
                "You will receive a confirmation email shortly with your transaction details."
                    .to_string(),
            ),
            dismiss_label: "Got it!",
            auto_dismiss: Some(auto_dismiss),
        }
    }

    /// Order failure with its reason. Stays until dismissed.
    pub fn error(id: NotificationId, reason: impl Into<String>) -> Self {
        Self {
            id,
            kind: NotificationKind::Error,
            title: "Order Failed".to_string(),
            message: reason.into(),
            detail: None,
            dismiss_label: "Close",
            auto_dismiss: None,
        }
    }
}

/// Live overlays, oldest first.
///
/// No deduplication or queueing: every push is shown alongside the others.
/// Overlays with an auto-dismiss delay get a deadline when pushed and are
/// dropped by [`expire`](Self::expire) once it has passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationStack {
    next_id: NotificationId,
    items: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    notification: Notification,
    expires_at: Option<Instant>,
}

impl NotificationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the id for the next notification
    pub fn next_id(&mut self) -> NotificationId {
        self.next_id += 1;
        self.next_id
    }

    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let id = notification.id;
        let expires_at = notification.auto_dismiss.map(|delay| Instant::now() + delay);
        self.items.push(Entry {
            notification,
            expires_at,
        });
        id
    }

    pub fn push_success(&mut self, package: &Package, auto_dismiss: Duration) -> NotificationId {
        let id = self.next_id();
        self.push(Notification::success(id, package, auto_dismiss))
    }

    pub fn push_error(&mut self, reason: impl Into<String>) -> NotificationId {
        let id = self.next_id();
        self.push(Notification::error(id, reason))
    }

    /// Remove one overlay. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|e| e.notification.id != id);
        self.items.len() != before
    }

    /// Earliest auto-dismiss deadline among the live overlays
    pub fn next_deadline(&self) -> Option<Instant> {
        self.items.iter().filter_map(|e| e.expires_at).min()
    }

    /// Drop every overlay whose deadline is at or before `now`.
    ///
    /// Returns the ids that were removed.
    pub fn expire(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut expired = Vec::new();
        self.items.retain(|e| match e.expires_at {
            Some(at) if at <= now => {
                expired.push(e.notification.id);
                false
            }
            _ => true,
        });
        expired
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.iter().find(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().map(|e| &e.notification)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_success_content() {
        let catalog = Catalog::standard();
        let pkg = catalog.get("premium").unwrap();
        let n = Notification::success(1, pkg, Duration::from_secs(5));
        assert_eq!(n.title, "Order Confirmed!");
        assert_eq!(
            n.message,
            "Your Premium Package order has been successfully processed."
        );
        assert_eq!(n.dismiss_label, "Got it!");
        assert_eq!(n.auto_dismiss, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_error_never_auto_dismisses() {
        let n = Notification::error(1, "boom");
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.message, "boom");
        assert_eq!(n.auto_dismiss, None);
        assert_eq!(n.kind.class(), "error-notification");
    }

    #[test]
    fn test_stack_keeps_independent_overlays() {
        let catalog = Catalog::standard();
        let mut stack = NotificationStack::new();
        let a = stack.push_error("first");
        let b = stack.push_error("first");
        let c = stack.push_success(catalog.get("basic").unwrap(), Duration::from_secs(5));
        assert_eq!(stack.len(), 3);
        assert_ne!(a, b);

        assert!(stack.dismiss(b));
        assert!(!stack.dismiss(b));
        let remaining: Vec<_> = stack.iter().map(|n| n.id).collect();
        assert_eq!(remaining, vec![a, c]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expire_only_drops_due_overlays() {
        let catalog = Catalog::standard();
        let mut stack = NotificationStack::new();
        let success = stack.push_success(catalog.get("mega").unwrap(), Duration::from_secs(5));
        let error = stack.push_error("declined");
        let deadline = stack.next_deadline().unwrap();

        tokio::time::advance(Duration::from_millis(4999)).await;
        assert!(stack.expire(Instant::now()).is_empty());
        assert!(Instant::now() < deadline);

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(stack.expire(Instant::now()), vec![success]);
        assert_eq!(stack.next_deadline(), None);
        assert!(stack.get(error).is_some());
    }
}
