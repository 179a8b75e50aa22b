/*
[INPUT]:  Add/remove/reorder requests from the shell, loaded snapshots
[OUTPUT]: Live ordered task list and snapshots of it
[POS]:    Core data structure
[UPDATE]: When adding list operations or changing boundary behavior
*/

use crate::snapshot::Snapshot;
use crate::task::{Task, TaskId, TaskKey};

/// The live, ordered working set of tasks.
///
/// Insertion order is display order and persistence order. Operations that
/// target an entry take any [`TaskKey`]; an absent entry turns the call into
/// a no-op rather than an error.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Builds a list from a saved snapshot, assigning fresh ids.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        snapshot.iter().cloned().collect()
    }

    /// Replaces the whole contents with a snapshot's entries.
    pub fn replace_with(&mut self, snapshot: &Snapshot) {
        self.tasks = snapshot.iter().cloned().map(Task::new).collect();
    }

    /// Appends `text` to the end. Empty text is accepted.
    pub fn add(&mut self, text: impl Into<String>) -> TaskId {
        let task = Task::new(text);
        let id = task.id();
        self.tasks.push(task);
        id
    }

    pub fn remove<K: TaskKey>(&mut self, key: K) -> Option<Task> {
        let index = key.locate(&self.tasks)?;
        Some(self.tasks.remove(index))
    }

    /// Moves the entry to index 0. Returns the new index.
    pub fn move_to_front<K: TaskKey>(&mut self, key: K) -> Option<usize> {
        let from = key.locate(&self.tasks)?;
        Some(self.splice(from, 0))
    }

    /// Moves the entry to the last index. Returns the new index.
    pub fn move_to_back<K: TaskKey>(&mut self, key: K) -> Option<usize> {
        let from = key.locate(&self.tasks)?;
        let last = self.tasks.len() - 1;
        Some(self.splice(from, last))
    }

    /// Moves the entry one step towards the front.
    ///
    /// Returns `None` without touching the list when the entry is absent or
    /// already first.
    pub fn move_earlier<K: TaskKey>(&mut self, key: K) -> Option<usize> {
        let from = key.locate(&self.tasks)?;
        if from == 0 {
            return None;
        }
        Some(self.splice(from, from - 1))
    }

    /// Moves the entry one step towards the back.
    ///
    /// Returns `None` without touching the list when the entry is absent or
    /// already last.
    pub fn move_later<K: TaskKey>(&mut self, key: K) -> Option<usize> {
        let from = key.locate(&self.tasks)?;
        if from + 1 >= self.tasks.len() {
            return None;
        }
        Some(self.splice(from, from + 1))
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Independent copy of the current texts, in order.
    pub fn snapshot(&self) -> Snapshot {
        self.tasks.iter().map(|task| task.text().to_string()).collect()
    }

    /// Whether the live texts equal `snapshot`, in order.
    pub fn matches(&self, snapshot: &Snapshot) -> bool {
        self.tasks.len() == snapshot.len()
            && self
                .tasks
                .iter()
                .zip(snapshot.iter())
                .all(|(task, saved)| task.text() == saved)
    }

    pub fn position<K: TaskKey>(&self, key: K) -> Option<usize> {
        key.locate(&self.tasks)
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.tasks.iter().map(Task::text).collect()
    }

    fn splice(&mut self, from: usize, to: usize) -> usize {
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        to
    }
}

impl<S: Into<String>> FromIterator<S> for TaskList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().map(Task::new).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> TaskList {
        items.iter().copied().collect()
    }

    #[test]
    fn test_move_to_back_from_front() {
        let mut tasks = list(&["a", "b", "c"]);
        assert_eq!(tasks.move_to_back("a"), Some(2));
        assert_eq!(tasks.texts(), ["b", "c", "a"]);
    }

    #[test]
    fn test_move_earlier_returns_new_index() {
        let mut tasks = list(&["a", "b", "c"]);
        assert_eq!(tasks.move_earlier("c"), Some(1));
        assert_eq!(tasks.texts(), ["a", "c", "b"]);
    }

    #[test]
    fn test_single_entry_boundaries() {
        let mut tasks = list(&["only"]);
        assert_eq!(tasks.move_earlier("only"), None);
        assert_eq!(tasks.move_later("only"), None);
        assert_eq!(tasks.move_to_front("only"), Some(0));
        assert_eq!(tasks.move_to_back("only"), Some(0));
        assert_eq!(tasks.texts(), ["only"]);
    }

    #[test]
    fn test_moves_keep_ids() {
        let mut tasks = TaskList::new();
        let first = tasks.add("first");
        let second = tasks.add("second");
        tasks.move_to_front(second);
        assert_eq!(tasks.get(0).map(Task::id), Some(second));
        assert_eq!(tasks.get(1).map(Task::id), Some(first));
    }

    #[test]
    fn test_replace_with_assigns_fresh_ids() {
        let mut tasks = list(&["old"]);
        let old_id = tasks.get(0).map(Task::id);
        tasks.replace_with(&Snapshot::from(vec!["old".to_string(), "new".to_string()]));
        assert_eq!(tasks.texts(), ["old", "new"]);
        assert_ne!(tasks.get(0).map(Task::id), old_id);
    }

    #[test]
    fn test_matches_is_order_sensitive() {
        let tasks = list(&["a", "b"]);
        assert!(tasks.matches(&Snapshot::from(vec!["a".to_string(), "b".to_string()])));
        assert!(!tasks.matches(&Snapshot::from(vec!["b".to_string(), "a".to_string()])));
        assert!(!tasks.matches(&Snapshot::default()));
    }
}
