use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// A transient message that the render layer hides once `expires_at` passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            message: message.into(),
            expires_at,
        }
    }

    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
