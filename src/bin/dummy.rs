use chrono::Local;

use corkboard::query::ViewSpec;
use corkboard::storage::MemoryStore;
use corkboard::{Task, TaskStore};

fn main() {
    env_logger::init();

    let mut store = TaskStore::open(MemoryStore::new());

    let errands = store.add_category(String::from("Errands"), 3);

    let mut task = Task::new(String::from("Pick up the dry cleaning"));
    task.set_category(Some((errands, 3)));
    store.add(task);
    store.add(Task::new(String::from("Water the plants")));

    let today = Local::now().date_naive();
    let view = corkboard::query::task_view(store.tasks(), &ViewSpec::new(today));
    corkboard::utils::print_task_list(&view);
}
