use chrono::Local;

use crate::io::kv::{KvStore, StoreError};
use crate::model::todo::{MAX_TEXT_LEN, TodoRecord, TodoStats};

/// Storage key for the serialized todo list
pub const TODO_LIST_KEY: &str = "todoList";

/// Error type for todo operations
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("task text is empty")]
    EmptyText,
    #[error("task text is too long ({len} characters, max {MAX_TEXT_LEN})")]
    TextTooLong { len: usize },
    #[error("task not found: {0}")]
    NotFound(u64),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What `TodoStore::load` found in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Key present, list deserialized
    Loaded(usize),
    /// No prior data
    Empty,
    /// Key present but not a valid list; started empty
    Corrupt,
}

/// The authoritative in-memory todo list, mirrored to a [`KvStore`] under
/// [`TODO_LIST_KEY`] after every mutation.
///
/// Newest records come first. Validation failures and unknown ids leave both
/// the list and the store untouched.
pub struct TodoStore<S: KvStore> {
    records: Vec<TodoRecord>,
    store: S,
}

impl<S: KvStore> TodoStore<S> {
    /// Load the persisted list from the store, once at startup.
    ///
    /// Missing data starts an empty list; malformed data does too, but the
    /// outcome says so, letting the caller warn without failing.
    pub fn load(store: S) -> (TodoStore<S>, LoadOutcome) {
        let (records, outcome) = match store.get(TODO_LIST_KEY) {
            None => (Vec::new(), LoadOutcome::Empty),
            Some(blob) => match serde_json::from_str::<Vec<TodoRecord>>(&blob) {
                Ok(records) => {
                    let n = records.len();
                    (records, LoadOutcome::Loaded(n))
                }
                Err(_) => (Vec::new(), LoadOutcome::Corrupt),
            },
        };
        (TodoStore { records, store }, outcome)
    }

    /// Add a task. The text is trimmed; it must be 1..=100 characters.
    /// The new record is prepended (newest first) and the list persisted.
    pub fn add(&mut self, text: &str) -> Result<&TodoRecord, TodoError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }
        let len = text.chars().count();
        if len > MAX_TEXT_LEN {
            return Err(TodoError::TextTooLong { len });
        }

        let now = Local::now();
        let record = TodoRecord::new(self.next_id(now), text.to_string(), now);
        self.records.insert(0, record);
        self.persist()?;
        Ok(&self.records[0])
    }

    /// Flip `completed` on the record with the given id.
    pub fn toggle(&mut self, id: u64) -> Result<&TodoRecord, TodoError> {
        let idx = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(TodoError::NotFound(id))?;
        self.records[idx].completed = !self.records[idx].completed;
        self.persist()?;
        Ok(&self.records[idx])
    }

    /// Remove the record with the given id. A missing id is a no-op, not an
    /// error; nothing is persisted in that case.
    pub fn remove(&mut self, id: u64) -> Result<(), StoreError> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() != before {
            self.persist()?;
        }
        Ok(())
    }

    /// The current list, newest first.
    pub fn records(&self) -> &[TodoRecord] {
        &self.records
    }

    pub fn stats(&self) -> TodoStats {
        TodoStats {
            total: self.records.len(),
            completed: self.records.iter().filter(|r| r.completed).count(),
        }
    }

    /// Ids are creation-time milliseconds, bumped past the head record when
    /// two adds land in the same millisecond.
    fn next_id(&self, now: chrono::DateTime<Local>) -> u64 {
        let millis = now.timestamp_millis().max(0) as u64;
        match self.records.first() {
            Some(head) if head.id >= millis => head.id + 1,
            _ => millis,
        }
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let blob =
            serde_json::to_string(&self.records).map_err(|e| StoreError::SerializeError {
                key: TODO_LIST_KEY.to_string(),
                source: e,
            })?;
        self.store.set(TODO_LIST_KEY, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::kv::MemStore;
    use pretty_assertions::assert_eq;

    fn empty_store() -> TodoStore<MemStore> {
        let (store, outcome) = TodoStore::load(MemStore::new());
        assert_eq!(outcome, LoadOutcome::Empty);
        store
    }

    #[test]
    fn add_prepends_and_defaults_incomplete() {
        let mut todos = empty_store();
        todos.add("Write spec").unwrap();
        let record = todos.add("Review PR").unwrap();
        assert!(!record.completed);
        assert_eq!(todos.records().len(), 2);
        assert_eq!(todos.records()[0].text, "Review PR");
        assert_eq!(todos.records()[1].text, "Write spec");
    }

    #[test]
    fn add_trims_whitespace() {
        let mut todos = empty_store();
        let record = todos.add("  padded  ").unwrap();
        assert_eq!(record.text, "padded");
    }

    #[test]
    fn add_rejects_blank_text() {
        let mut todos = empty_store();
        assert!(matches!(todos.add("   "), Err(TodoError::EmptyText)));
        assert!(todos.records().is_empty());
    }

    #[test]
    fn add_rejects_overlong_text() {
        let mut todos = empty_store();
        let long = "x".repeat(101);
        assert!(matches!(
            todos.add(&long),
            Err(TodoError::TextTooLong { len: 101 })
        ));
        assert!(todos.records().is_empty());

        // Exactly at the limit is fine
        let max = "x".repeat(100);
        assert!(todos.add(&max).is_ok());
    }

    #[test]
    fn overlong_check_applies_after_trimming() {
        let mut todos = empty_store();
        let padded = format!("  {}  ", "x".repeat(100));
        assert!(todos.add(&padded).is_ok());
    }

    #[test]
    fn ids_strictly_increase() {
        let mut todos = empty_store();
        for i in 0..5 {
            todos.add(&format!("task {}", i)).unwrap();
        }
        let ids: Vec<u64> = todos.records().iter().map(|r| r.id).collect();
        for pair in ids.windows(2) {
            // Newest first, so ids descend through the list
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut todos = empty_store();
        let id = todos.add("flip me").unwrap().id;
        assert!(todos.toggle(id).unwrap().completed);
        assert!(!todos.toggle(id).unwrap().completed);
    }

    #[test]
    fn toggle_unknown_id_is_not_found_and_leaves_list_alone() {
        let mut todos = empty_store();
        todos.add("only task").unwrap();
        let before = todos.records().to_vec();
        assert!(matches!(todos.toggle(999), Err(TodoError::NotFound(999))));
        assert_eq!(todos.records(), &before[..]);
    }

    #[test]
    fn remove_deletes_and_ignores_unknown_ids() {
        let mut todos = empty_store();
        let id = todos.add("doomed").unwrap().id;
        todos.add("survivor").unwrap();

        todos.remove(id).unwrap();
        assert!(todos.records().iter().all(|r| r.id != id));
        assert_eq!(todos.records().len(), 1);

        // Unknown id: success, nothing changes
        todos.remove(id).unwrap();
        assert_eq!(todos.records().len(), 1);
    }

    #[test]
    fn stats_track_the_list() {
        let mut todos = empty_store();
        assert_eq!(todos.stats(), TodoStats::default());

        let first = todos.add("Write spec").unwrap().id;
        todos.add("Review PR").unwrap();
        todos.toggle(first).unwrap();

        let stats = todos.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending(), 1);
    }

    #[test]
    fn every_mutation_persists_the_full_list() {
        let mut todos = empty_store();
        let id = todos.add("persisted").unwrap().id;
        todos.toggle(id).unwrap();

        let blob = todos.store.get(TODO_LIST_KEY).unwrap();
        let reloaded: Vec<TodoRecord> = serde_json::from_str(&blob).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded[0].completed);
    }

    #[test]
    fn load_restores_persisted_records() {
        let mut todos = empty_store();
        todos.add("Write spec").unwrap();
        let id = todos.add("Review PR").unwrap().id;
        todos.toggle(id).unwrap();
        let original = todos.records().to_vec();

        let blob = todos.store.get(TODO_LIST_KEY).unwrap();
        let (reloaded, outcome) = TodoStore::load(MemStore::with_entry(TODO_LIST_KEY, &blob));
        assert_eq!(outcome, LoadOutcome::Loaded(2));
        assert_eq!(reloaded.records(), &original[..]);
    }

    #[test]
    fn corrupt_blob_loads_empty_and_reports() {
        let store = MemStore::with_entry(TODO_LIST_KEY, "not json {{{");
        let (todos, outcome) = TodoStore::load(store);
        assert_eq!(outcome, LoadOutcome::Corrupt);
        assert!(todos.records().is_empty());
    }

    #[test]
    fn spec_scenario_two_adds_one_toggle() {
        let mut todos = empty_store();
        let first = todos.add("Write spec").unwrap().id;
        todos.add("Review PR").unwrap();

        let texts: Vec<&str> = todos.records().iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Review PR", "Write spec"]);
        assert!(todos.records().iter().all(|r| !r.completed));

        todos.toggle(first).unwrap();
        assert!(todos.records()[1].completed);
        assert_eq!(todos.stats(), TodoStats { total: 2, completed: 1 });
    }
}
