//! This is an example of how corkboard can be used.
//! It walks through the life of a small task list: create, edit, toggle, filter,
//! search, and clear the completed leftovers.

use std::path::Path;

use chrono::{Duration, Local};

use corkboard::query::{self, StatusFilter, ViewSpec};
use corkboard::storage::FileStore;
use corkboard::utils::{print_category_list, print_task_list};
use corkboard::{Priority, Task, TaskStore};

const DATA_FOLDER: &str = "demo_data/basic";

fn main() {
    env_logger::init();

    println!("This example keeps its data in '{}'; run it twice to see tasks survive a restart.", DATA_FOLDER);
    println!("You can set the RUST_LOG environment variable to display more info about storage.");
    println!();

    let mut store = TaskStore::open(FileStore::new(Path::new(DATA_FOLDER)));
    let today = Local::now().date_naive();

    if store.tasks().is_empty() {
        println!("Seeding a fresh task list...");
        seed_tasks(&mut store);
    }

    // The edit boundary rejects blank titles; nothing reaches the store.
    add_task_from_form(&mut store, "   ");

    // Toggle the first task of the current view
    let view = query::task_view(store.tasks(), &ViewSpec::new(today));
    if let Some(first) = view.first() {
        println!("Toggling '{}'...", first.title());
        store.toggle_completion(first.id());
    }

    let everything = ViewSpec::new(today);
    println!("---- Categories ----");
    print_category_list(store.categories());
    println!("---- All tasks ----");
    print_task_list(&query::task_view(store.tasks(), &everything));

    let stats = query::view_stats(store.tasks(), &everything);
    println!("{} total / {} active / {} completed", stats.total, stats.active, stats.completed);

    let mut actives_about_plants = ViewSpec::new(today);
    actives_about_plants.status_filter = StatusFilter::Active;
    actives_about_plants.search_text = String::from("plant");
    println!("---- Active tasks matching 'plant' ----");
    print_task_list(&query::task_view(store.tasks(), &actives_about_plants));

    println!("Clearing completed tasks...");
    store.clear_completed();
    print_task_list(&query::task_view(store.tasks(), &everything));
}

/// What a presentation layer does when its form is submitted: validate, then hand a
/// fully-formed task to the store.
fn add_task_from_form(store: &mut TaskStore<FileStore>, raw_title: &str) {
    let title = raw_title.trim();
    if title.is_empty() {
        println!("Rejected a task with an empty title (the form would stay open).");
        return;
    }
    store.add(Task::new(title.to_string()));
}

fn seed_tasks(store: &mut TaskStore<FileStore>) {
    let today = Local::now().date_naive();
    let home = store.add_category(String::from("Home"), 3);

    let mut groceries = Task::new(String::from("Restock the pantry"));
    groceries.set_description(String::from("oat milk, coffee beans, lentils"));
    groceries.set_schedule(None, None, Some(today + Duration::days(1)), None);
    groceries.set_category(Some((home.clone(), 3)));
    store.add(groceries);

    let mut report = Task::new(String::from("Draft the quarterly report"));
    report.set_priority(Priority::High);
    report.set_schedule(None, None, Some(today + Duration::days(2)), None);
    store.add(report);

    let mut plants = Task::new(String::from("Repot the basil plant"));
    plants.set_priority(Priority::Low);
    plants.set_category(Some((home, 3)));
    store.add(plants);
}
