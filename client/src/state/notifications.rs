//! Notification queue behind the notification provider.
//!
//! DESIGN
//! ======
//! Pure data: every operation takes the current time in milliseconds from
//! the caller, so expiry is testable without timers. The provider schedules
//! a `prune` after each enqueue and renders `visible`.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// How long a notification stays visible unless dismissed.
pub const DISPLAY_DURATION_MS: u64 = 5_000;

/// Maximum visible notifications; enqueuing past this drops the oldest.
pub const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// CSS modifier for the toast element.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at_ms: u64,
}

impl Notification {
    #[must_use]
    pub fn expires_at_ms(&self) -> u64 {
        self.created_at_ms.saturating_add(DISPLAY_DURATION_MS)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationState {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationState {
    /// Append a notification stamped with `now_ms`; returns its id.
    pub fn enqueue(&mut self, message: impl Into<String>, kind: NotificationKind, now_ms: u64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, message: message.into(), kind, created_at_ms: now_ms });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove one notification. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    /// Drop every notification whose display time has elapsed at `now_ms`.
    pub fn prune(&mut self, now_ms: u64) {
        self.items.retain(|n| n.expires_at_ms() > now_ms);
    }

    /// Notifications in insertion order.
    #[must_use]
    pub fn visible(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
