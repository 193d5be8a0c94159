//! Property tests for ID assignment and slot round-tripping.

use proptest::prelude::*;
use std::collections::HashSet;
use todo_store::{MemoryStorage, Store, Todo, TodoId};

/// An arbitrary user action against the store.
#[derive(Clone, Debug)]
enum Action {
    Add(String),
    Edit(u64, String),
    Delete(u64),
    Toggle(u64),
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        "[a-z ]{1,12}".prop_map(Action::Add),
        (1..20u64, "[a-z ]{1,12}").prop_map(|(id, text)| Action::Edit(id, text)),
        (1..20u64).prop_map(Action::Delete),
        (1..20u64).prop_map(Action::Toggle),
    ]
}

proptest! {
    /// Across any action sequence, every ID ever assigned is distinct and
    /// assigned in increasing order.
    #[test]
    fn ids_are_unique_and_monotonic(actions in prop::collection::vec(action_strategy(), 0..40)) {
        let store = Store::with_storage(Box::new(MemoryStorage::new())).unwrap();

        let mut assigned = Vec::new();
        for action in actions {
            match action {
                Action::Add(text) => assigned.push(store.add(text).unwrap().id.0),
                Action::Edit(id, text) => store.edit(TodoId(id), text).unwrap(),
                Action::Delete(id) => store.delete(TodoId(id)).unwrap(),
                Action::Toggle(id) => store.toggle(TodoId(id)).unwrap(),
            }
        }

        let unique: HashSet<u64> = assigned.iter().copied().collect();
        prop_assert_eq!(unique.len(), assigned.len());

        let mut sorted = assigned.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, assigned);
    }

    /// Whatever the store persisted, reopening over the same slot reproduces
    /// the exact sequence.
    #[test]
    fn slot_roundtrip_reproduces_sequence(actions in prop::collection::vec(action_strategy(), 1..40)) {
        let storage = MemoryStorage::new();
        let before: Vec<Todo>;

        {
            let store = Store::with_storage(Box::new(storage.clone())).unwrap();
            for action in actions {
                match action {
                    Action::Add(text) => { store.add(text).unwrap(); }
                    Action::Edit(id, text) => store.edit(TodoId(id), text).unwrap(),
                    Action::Delete(id) => store.delete(TodoId(id)).unwrap(),
                    Action::Toggle(id) => store.toggle(TodoId(id)).unwrap(),
                }
            }
            before = store.todos();
        }

        let reopened = Store::with_storage(Box::new(storage)).unwrap();
        prop_assert_eq!(reopened.todos(), before);
    }
}
