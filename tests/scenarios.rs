use session_todo::{Counts, FilterMode, IdPolicy, TodoStore, ValidationError};

#[test]
fn buy_milk_walk_dog() {
    let mut store = TodoStore::new();

    store.add("Buy milk").unwrap();
    assert_eq!(store.count_all(), 1);
    assert_eq!(store.count_pending(), 1);

    store.toggle(0);
    assert_eq!(store.count_completed(), 1);
    assert_eq!(store.count_pending(), 0);

    store.add("Walk dog").unwrap();
    assert_eq!(store.count_all(), 2);

    store.delete_completed();
    assert_eq!(store.count_all(), 1);
    let remaining = &store.tasks()[0];
    assert_eq!(remaining.id, 1);
    assert_eq!(remaining.text, "Walk dog");
    assert!(!remaining.completed);
}

#[test]
fn delete_first_of_two_keeps_second() {
    for policy in [IdPolicy::Counter, IdPolicy::ListLength] {
        let mut store = TodoStore::with_id_policy(policy);
        store.add("A").unwrap();
        store.add("B").unwrap();

        store.delete(0);

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].text, "B");
    }
}

#[test]
fn blank_adds_leave_store_unchanged() {
    let mut store = TodoStore::new();
    assert_eq!(store.add("").unwrap_err(), ValidationError::EmptyText);
    assert_eq!(store.add("   ").unwrap_err(), ValidationError::EmptyText);
    assert!(store.is_empty());
}

#[test]
fn clear_all_then_counts_are_zero() {
    let mut store = TodoStore::new();
    for t in ["a", "b", "c"] {
        store.add(t).unwrap();
    }
    store.toggle(2);

    store.clear_all();

    assert_eq!(store.counts(), Counts::default());
    assert!(store.filter(FilterMode::All).is_empty());
}

#[test]
fn filter_all_is_the_full_list_in_order() {
    let mut store = TodoStore::new();
    for t in ["first", "second", "third"] {
        store.add(t).unwrap();
    }
    store.toggle(1);

    let all: Vec<&str> = store
        .filter(FilterMode::All)
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(all, vec!["first", "second", "third"]);
}
