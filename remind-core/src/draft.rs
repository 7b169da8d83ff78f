use chrono::{NaiveDateTime, Timelike};
use thiserror::Error;

use crate::reminder::{Reminder, ReminderId};

/// Reasons a draft cannot be committed yet. The messages are shown to the user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a reminder text")]
    EmptyText,
    #[error("Please select a date and time")]
    MissingDueAt,
}

/// The reminder being composed before it is committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
    due_at: Option<NaiveDateTime>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn due_at(&self) -> Option<NaiveDateTime> {
        self.due_at
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }

    /// Stores the confirmed due time truncated to whole minutes.
    pub fn set_due_at(&mut self, due_at: NaiveDateTime) {
        let normalized = due_at
            .with_second(0)
            .and_then(|d| d.with_nanosecond(0))
            .unwrap_or(due_at);
        self.due_at = Some(normalized);
    }

    pub fn clear_due_at(&mut self) {
        self.due_at = None;
    }

    /// Validates the draft and builds a fresh reminder from it.
    ///
    /// The draft itself is left untouched either way: after a successful commit
    /// the caller adds the reminder to the store and then calls [`Draft::reset`].
    /// Text is checked before the due time.
    pub fn commit(&self) -> Result<Reminder, ValidationError> {
        if self.text.trim().is_empty() {
            log::debug!("Rejecting draft with empty text");
            return Err(ValidationError::EmptyText);
        }
        let Some(due_at) = self.due_at else {
            log::debug!("Rejecting draft without a due time");
            return Err(ValidationError::MissingDueAt);
        };

        Ok(Reminder::new(
            ReminderId::generate(),
            self.text.clone(),
            due_at,
        ))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn empty_text_is_reported_before_missing_due_time() {
        let draft = Draft::new();
        assert_eq!(draft.commit(), Err(ValidationError::EmptyText));
    }

    #[test]
    fn whitespace_text_fails_and_leaves_draft_alone() {
        let mut draft = Draft::new();
        draft.set_text("  ");
        draft.set_due_at(at(9, 0));
        let before = draft.clone();

        assert_eq!(draft.commit(), Err(ValidationError::EmptyText));
        assert_eq!(draft, before);
    }

    #[test]
    fn missing_due_time_fails() {
        let mut draft = Draft::new();
        draft.set_text("Buy milk");
        assert_eq!(draft.commit(), Err(ValidationError::MissingDueAt));
        assert_eq!(draft.text(), "Buy milk");
    }

    #[test]
    fn valid_draft_commits_active_reminder() {
        let mut draft = Draft::new();
        draft.set_text("Buy milk");
        draft.set_due_at(at(18, 30));

        let reminder = draft.commit().unwrap();
        assert_eq!(reminder.text(), "Buy milk");
        assert_eq!(reminder.due_at(), at(18, 30));
        assert!(!reminder.is_complete());
        // committing does not consume the draft
        assert_eq!(draft.text(), "Buy milk");
    }

    #[test]
    fn text_is_kept_verbatim() {
        let mut draft = Draft::new();
        draft.set_text("  call mom ");
        draft.set_due_at(at(8, 0));
        assert_eq!(draft.commit().unwrap().text(), "  call mom ");
    }

    #[test]
    fn each_commit_gets_a_new_id() {
        let mut draft = Draft::new();
        draft.set_text("water plants");
        draft.set_due_at(at(7, 0));
        assert_ne!(draft.commit().unwrap().id(), draft.commit().unwrap().id());
    }

    #[test]
    fn due_time_is_truncated_to_minutes() {
        let mut draft = Draft::new();
        let precise = at(10, 15)
            .with_second(42)
            .and_then(|d| d.with_nanosecond(123))
            .unwrap();
        draft.set_due_at(precise);
        assert_eq!(draft.due_at(), Some(at(10, 15)));
    }

    #[test]
    fn clear_and_reset() {
        let mut draft = Draft::new();
        draft.set_text("x");
        draft.set_due_at(at(1, 0));
        draft.clear_due_at();
        assert_eq!(draft.due_at(), None);
        assert_eq!(draft.text(), "x");

        draft.set_due_at(at(1, 0));
        draft.reset();
        assert_eq!(draft, Draft::new());
    }
}
