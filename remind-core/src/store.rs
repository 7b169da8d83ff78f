use crate::reminder::{Reminder, ReminderId};

/// Owner of the committed reminders, kept in insertion order.
#[derive(Debug, Default)]
pub struct ReminderStore {
    reminders: Vec<Reminder>,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the end of the list. Ids are assumed fresh; a colliding id is not checked.
    pub fn add(&mut self, reminder: Reminder) {
        log::info!("Adding reminder {} due {}", reminder.id(), reminder.due_at());
        self.reminders.push(reminder);
    }

    /// Marks the reminder complete. Unknown or already complete ids are ignored.
    pub fn complete(&mut self, id: ReminderId) {
        match self.reminders.iter_mut().find(|r| r.id() == id) {
            Some(reminder) if !reminder.is_complete() => {
                reminder.mark_complete();
                log::info!("Completed reminder {id}");
            }
            Some(_) => log::debug!("Reminder {id} is already complete"),
            None => log::debug!("Ignoring complete for unknown reminder {id}"),
        }
    }

    /// Removes the reminder if present. Confirmation is the caller's job.
    pub fn delete(&mut self, id: ReminderId) {
        let before = self.reminders.len();
        self.reminders.retain(|r| r.id() != id);
        if self.reminders.len() < before {
            log::info!("Deleted reminder {id}");
        } else {
            log::debug!("Ignoring delete for unknown reminder {id}");
        }
    }

    /// Snapshot of the list in insertion order.
    pub fn list(&self) -> Vec<Reminder> {
        self.reminders.clone()
    }

    pub fn get(&self, index: usize) -> Option<&Reminder> {
        self.reminders.get(index)
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::Draft;
    use chrono::{NaiveDate, NaiveDateTime};
    use proptest::prelude::*;

    fn due() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn reminder(text: &str) -> Reminder {
        let mut draft = Draft::new();
        draft.set_text(text);
        draft.set_due_at(due());
        draft.commit().unwrap()
    }

    fn ids(store: &ReminderStore) -> Vec<ReminderId> {
        store.list().iter().map(Reminder::id).collect()
    }

    #[test]
    fn commit_alone_does_not_touch_store() {
        let store = ReminderStore::new();
        let _ = reminder("Buy milk");
        assert!(store.list().is_empty());
    }

    #[test]
    fn added_reminder_is_listed_active() {
        let mut store = ReminderStore::new();
        store.add(reminder("Buy milk"));

        let list = store.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].text(), "Buy milk");
        assert_eq!(list[0].due_at(), due());
        assert!(!list[0].is_complete());
    }

    #[test]
    fn complete_keeps_order() {
        let mut store = ReminderStore::new();
        let a = reminder("A");
        let b = reminder("B");
        let (a_id, b_id) = (a.id(), b.id());
        store.add(a);
        store.add(b);

        store.complete(a_id);

        let list = store.list();
        assert_eq!(ids(&store), vec![a_id, b_id]);
        assert!(list[0].is_complete());
        assert!(!list[1].is_complete());
    }

    #[test]
    fn delete_removes_only_target() {
        let mut store = ReminderStore::new();
        let a = reminder("A");
        let b = reminder("B");
        let (a_id, b_id) = (a.id(), b.id());
        store.add(a);
        store.add(b);
        store.complete(a_id);

        store.delete(a_id);

        let list = store.list();
        assert_eq!(ids(&store), vec![b_id]);
        assert!(!list[0].is_complete());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut store = ReminderStore::new();
        store.add(reminder("A"));
        let before = store.list();

        let stranger = ReminderId::generate();
        store.complete(stranger);
        store.delete(stranger);

        assert_eq!(store.list(), before);
    }

    #[test]
    fn list_is_a_detached_snapshot() {
        let mut store = ReminderStore::new();
        store.add(reminder("A"));

        let mut snapshot = store.list();
        snapshot.clear();

        assert_eq!(store.len(), 1);
    }

    proptest! {
        #[test]
        fn list_preserves_insertion_order(texts in prop::collection::vec("[a-z]{1,12}", 0..20)) {
            let mut store = ReminderStore::new();
            let mut expected = Vec::new();
            for text in &texts {
                let r = reminder(text);
                expected.push(r.id());
                store.add(r);
            }
            prop_assert_eq!(ids(&store), expected);
        }

        #[test]
        fn complete_is_idempotent(count in 1usize..10, pick in any::<prop::sample::Index>()) {
            let mut once = ReminderStore::new();
            let mut twice = ReminderStore::new();
            let mut all = Vec::new();
            for i in 0..count {
                let r = reminder(&format!("r{i}"));
                all.push(r.id());
                once.add(r.clone());
                twice.add(r);
            }
            let target = all[pick.index(count)];

            once.complete(target);
            twice.complete(target);
            twice.complete(target);

            prop_assert_eq!(once.list(), twice.list());
        }

        #[test]
        fn delete_is_idempotent(count in 1usize..10, pick in any::<prop::sample::Index>()) {
            let mut once = ReminderStore::new();
            let mut twice = ReminderStore::new();
            let mut all = Vec::new();
            for i in 0..count {
                let r = reminder(&format!("r{i}"));
                all.push(r.id());
                once.add(r.clone());
                twice.add(r);
            }
            let target = all[pick.index(count)];

            once.delete(target);
            twice.delete(target);
            twice.delete(target);

            prop_assert_eq!(once.list(), twice.list());
            prop_assert_eq!(once.len(), count - 1);
        }
    }
}
