//! Tests of the task store: mutations, persistence, degrade-to-empty

mod scenarii;

use std::sync::{Arc, Mutex};

use corkboard::mock_behaviour::MockBehaviour;
use corkboard::storage::{KeyValueStore, MemoryStore};
use corkboard::{Priority, Task, TaskId, TaskStore};

use scenarii::{build_task, date, mixed_population, task_named, time};

fn populated_store() -> TaskStore<MemoryStore> {
    let mut store = TaskStore::open(MemoryStore::new());
    for task in mixed_population() {
        store.add(task);
    }
    store
}

#[test]
fn added_tasks_survive_a_reopen() {
    let mut store = TaskStore::open(MemoryStore::new());
    store.add(build_task(
        "Call the plumber",
        "kitchen sink drips",
        Some(date(2024, 2, 1)),
        Some(time(10, 30)),
        Priority::High,
        false,
    ));
    store.add(task_named("Unscheduled chore"));
    let expected: Vec<Task> = store.tasks().to_vec();

    let reopened = TaskStore::open(store.into_storage());
    assert_eq!(reopened.tasks(), expected.as_slice());
}

#[test]
fn update_replaces_the_record_wholesale() {
    let mut store = populated_store();

    let mut edited = store.tasks()[0].clone();
    edited.set_title(String::from("Prepare the agenda (rescheduled)"));
    edited.set_schedule(None, None, Some(date(2024, 1, 11)), None);
    edited.set_priority(Priority::Low);
    store.update(edited.clone());

    assert_eq!(store.task_by_id(edited.id()), Some(&edited));

    // The edit also reached the storage
    let reopened = TaskStore::open(store.into_storage());
    assert_eq!(reopened.task_by_id(edited.id()), Some(&edited));
}

#[test]
fn mutating_an_unknown_id_is_a_no_op() {
    let mut store = populated_store();
    let before: Vec<Task> = store.tasks().to_vec();

    let ghost = task_named("Never added");
    store.update(ghost.clone());
    store.delete(ghost.id());
    store.toggle_completion(&TaskId::from("no-such-id"));

    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn delete_removes_only_the_matching_task() {
    let mut store = populated_store();
    let count_before = store.tasks().len();
    let victim_id = store.tasks()[2].id().clone();

    store.delete(&victim_id);

    assert_eq!(store.tasks().len(), count_before - 1);
    assert!(store.task_by_id(&victim_id).is_none());
}

#[test]
fn toggle_flips_and_persists() {
    let mut store = populated_store();
    let id = store.tasks()[0].id().clone();
    assert!(!store.task_by_id(&id).unwrap().is_completed());

    store.toggle_completion(&id);
    assert!(store.task_by_id(&id).unwrap().is_completed());

    store.toggle_completion(&id);
    assert!(!store.task_by_id(&id).unwrap().is_completed());

    store.toggle_completion(&id);
    let reopened = TaskStore::open(store.into_storage());
    assert!(reopened.task_by_id(&id).unwrap().is_completed());
}

#[test]
fn clear_completed_removes_exactly_the_completed_tasks() {
    let mut store = populated_store();
    let survivors: Vec<Task> = store
        .tasks()
        .iter()
        .filter(|task| !task.is_completed())
        .cloned()
        .collect();
    assert!(store.tasks().len() > survivors.len());

    store.clear_completed();

    // Exactly the active tasks remain, every field untouched
    assert_eq!(store.tasks(), survivors.as_slice());
}

#[test]
fn categories_get_unique_ids_and_survive_a_reopen() {
    let mut store = TaskStore::open(MemoryStore::new());
    let errands = store.add_category(String::from("Errands"), 1);
    let work = store.add_category(String::from("Work"), 5);
    assert_ne!(errands, work);

    let reopened = TaskStore::open(store.into_storage());
    assert_eq!(reopened.categories().len(), 2);
    assert_eq!(reopened.categories()[0].name(), "Errands");
    assert_eq!(reopened.categories()[0].color_index(), 1);
    assert_eq!(reopened.categories()[1].id(), &work);
}

#[test]
fn corrupt_storage_opens_as_an_empty_store() {
    let mut storage = MemoryStore::new();
    storage.set("tasks", "definitely { not json").unwrap();
    storage.set("categories", "[{\"wrong\": \"shape\"}]").unwrap();

    let store = TaskStore::open(storage);
    assert!(store.tasks().is_empty());
    assert!(store.categories().is_empty());
}

#[test]
fn a_failed_save_keeps_the_in_memory_mutation() {
    let mock = Arc::new(Mutex::new(MockBehaviour::new()));
    let mut store = TaskStore::open(MemoryStore::with_mock_behaviour(Arc::clone(&mock)));
    store.add(task_named("Written before the outage"));

    // Every write fails from now on
    mock.lock().unwrap().set_behaviour = (0, u32::MAX);
    store.add(task_named("Written during the outage"));

    // The mutation is visible for the rest of the process lifetime...
    assert_eq!(store.tasks().len(), 2);

    // ...but was never persisted, so a restart only sees the earlier state
    mock.lock().unwrap().suspend();
    let reopened = TaskStore::open(store.into_storage());
    assert_eq!(reopened.tasks().len(), 1);
    assert_eq!(reopened.tasks()[0].title(), "Written before the outage");
}
