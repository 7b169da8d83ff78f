use std::fmt;

use chrono::NaiveDateTime;
use uuid::Uuid;

/// Opaque identifier assigned once when a draft is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReminderId(Uuid);

impl ReminderId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, enough to tell entries apart on screen.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A committed list entry. Everything except completion is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    id: ReminderId,
    text: String,
    due_at: NaiveDateTime,
    is_complete: bool,
}

impl Reminder {
    pub(crate) fn new(id: ReminderId, text: String, due_at: NaiveDateTime) -> Self {
        Self {
            id,
            text,
            due_at,
            is_complete: false,
        }
    }

    pub fn id(&self) -> ReminderId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn due_at(&self) -> NaiveDateTime {
        self.due_at
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub(crate) fn mark_complete(&mut self) {
        self.is_complete = true;
    }
}
