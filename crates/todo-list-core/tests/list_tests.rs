/*
[INPUT]:  Sequences of list operations
[OUTPUT]: Test results for ordering and no-op rules
[POS]:    Integration tests - task list
[UPDATE]: When list operations or boundary rules change
*/

mod common;

use common::{list_of, snapshot_of};
use rstest::rstest;
use todo_list_core::{Task, TaskList};

#[test]
fn test_add_preserves_call_order() {
    let mut list = TaskList::new();
    for text in ["one", "two", "", "three"] {
        list.add(text);
    }
    assert_eq!(list.texts(), ["one", "two", "", "three"]);
    assert_eq!(list.len(), 4);
}

#[test]
fn test_move_to_front_scenario() {
    let mut list = TaskList::new();
    list.add("buy milk");
    list.add("walk dog");
    assert_eq!(list.move_to_front("walk dog"), Some(0));
    assert_eq!(list.texts(), ["walk dog", "buy milk"]);
}

#[test]
fn test_move_to_front_is_idempotent() {
    let mut list = list_of(&["a", "b", "c"]);
    list.move_to_front("c");
    let once = list.texts().join(",");
    list.move_to_front("c");
    assert_eq!(list.texts().join(","), once);
    assert_eq!(list.texts(), ["c", "a", "b"]);
}

#[test]
fn test_move_later_scenario() {
    let mut list = list_of(&["a", "b", "c"]);
    assert_eq!(list.move_later("b"), Some(2));
    assert_eq!(list.texts(), ["a", "c", "b"]);

    assert_eq!(list.move_later("b"), None);
    assert_eq!(list.texts(), ["a", "c", "b"]);
}

#[test]
fn test_move_earlier_at_front_is_noop() {
    let mut list = list_of(&["a", "b"]);
    assert_eq!(list.move_earlier("a"), None);
    assert_eq!(list.texts(), ["a", "b"]);
}

#[rstest]
#[case::remove("remove")]
#[case::front("front")]
#[case::back("back")]
#[case::earlier("earlier")]
#[case::later("later")]
fn test_absent_item_is_noop(#[case] op: &str) {
    let mut list = list_of(&["a", "b", "c"]);
    let changed = match op {
        "remove" => list.remove("zzz").is_some(),
        "front" => list.move_to_front("zzz").is_some(),
        "back" => list.move_to_back("zzz").is_some(),
        "earlier" => list.move_earlier("zzz").is_some(),
        "later" => list.move_later("zzz").is_some(),
        other => panic!("unknown op {other}"),
    };
    assert!(!changed);
    assert_eq!(list.texts(), ["a", "b", "c"]);
}

#[rstest]
#[case(&["a", "b", "c"], "a", &["b", "c"])]
#[case(&["a", "b", "a"], "a", &["b", "a"])]
#[case(&["", "x"], "", &["x"])]
fn test_remove_first_occurrence(
    #[case] items: &[&str],
    #[case] target: &str,
    #[case] expected: &[&str],
) {
    let mut list = list_of(items);
    let removed = list.remove(target).map(Task::into_text);
    assert_eq!(removed.as_deref(), Some(target));
    assert_eq!(list.texts(), expected);
}

#[test]
fn test_duplicates_addressed_by_id() {
    let mut list = TaskList::new();
    list.add("dup");
    list.add("other");
    let second_dup = list.add("dup");

    assert_eq!(list.move_to_front(second_dup), Some(0));
    assert_eq!(list.get(0).map(Task::id), Some(second_dup));
    assert_eq!(list.texts(), ["dup", "dup", "other"]);

    let removed = list.remove(second_dup).expect("id present");
    assert_eq!(removed.id(), second_dup);
    assert_eq!(list.position(second_dup), None);
    assert_eq!(list.texts(), ["dup", "other"]);
}

#[test]
fn test_snapshot_is_decoupled_from_list() {
    let mut list = list_of(&["a", "b"]);
    let snapshot = list.snapshot();
    list.add("c");
    list.move_to_front("b");
    list.clear();

    assert!(list.is_empty());
    assert_eq!(snapshot, snapshot_of(&["a", "b"]));
}

#[test]
fn test_from_snapshot_round_trip() {
    let snapshot = snapshot_of(&["x", "", "x"]);
    let list = TaskList::from_snapshot(&snapshot);
    assert!(list.matches(&snapshot));
    assert_eq!(list.snapshot(), snapshot);
}
