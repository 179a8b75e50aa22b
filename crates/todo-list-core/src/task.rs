/*
[INPUT]:  Task text entered by the user
[OUTPUT]: Task entries with runtime identity, and keys that address them
[POS]:    Data model - single list entry
[UPDATE]: When changing how list entries are identified
*/

use std::fmt;

use uuid::Uuid;

/// Runtime identity of a task inside a live list.
///
/// Ids are assigned when a task enters a [`crate::TaskList`] and are never
/// persisted; reloading a snapshot yields fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    text: String,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            text: text.into(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Addresses a task inside a list.
///
/// A [`TaskId`] matches exactly one entry. Text keys match the first entry
/// with equal text, so with duplicate entries only the earliest one is
/// reachable by text.
pub trait TaskKey {
    /// Index of the addressed task, or `None` if it is not in `tasks`.
    fn locate(&self, tasks: &[Task]) -> Option<usize>;
}

impl TaskKey for TaskId {
    fn locate(&self, tasks: &[Task]) -> Option<usize> {
        tasks.iter().position(|task| task.id == *self)
    }
}

impl TaskKey for str {
    fn locate(&self, tasks: &[Task]) -> Option<usize> {
        tasks.iter().position(|task| task.text == self)
    }
}

impl TaskKey for String {
    fn locate(&self, tasks: &[Task]) -> Option<usize> {
        self.as_str().locate(tasks)
    }
}

impl<K: TaskKey + ?Sized> TaskKey for &K {
    fn locate(&self, tasks: &[Task]) -> Option<usize> {
        (**self).locate(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = Task::new("same");
        let b = Task::new("same");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.text(), b.text());
    }

    #[test]
    fn test_text_key_finds_first_occurrence() {
        let tasks = vec![Task::new("x"), Task::new("dup"), Task::new("dup")];
        assert_eq!("dup".locate(&tasks), Some(1));
        assert_eq!(String::from("x").locate(&tasks), Some(0));
        assert_eq!("missing".locate(&tasks), None);
    }

    #[test]
    fn test_id_key_finds_exact_entry() {
        let tasks = vec![Task::new("dup"), Task::new("dup")];
        let second = tasks[1].id();
        assert_eq!(second.locate(&tasks), Some(1));
        assert_eq!(TaskId::new().locate(&tasks), None);
    }
}
