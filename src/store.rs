//! The live task collection and its mutation entry points

use crate::category::{Category, CategoryId};
use crate::config::{CATEGORIES_SLOT, TASKS_SLOT};
use crate::storage::{load_slot, save_slot, KeyValueStore};
use crate::task::{Task, TaskId};

/// The single owner of the task and category collections
///
/// Every mutator persists through the backing [`KeyValueStore`] as its last step, so
/// the stored blobs always track the in-memory state (modulo swallowed write
/// failures, which only risk being lost on restart). Callers never get a mutable
/// handle into the collections: reads go through `&[Task]` / `&[Category]`, and the
/// [`query`](crate::query) functions hand out owned copies.
pub struct TaskStore<S: KeyValueStore> {
    storage: S,
    tasks: Vec<Task>,
    categories: Vec<Category>,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Open a store over `storage`, loading whatever it currently holds.
    /// Missing, unreadable or corrupt slots load as empty collections.
    pub fn open(storage: S) -> Self {
        let tasks = load_slot(&storage, TASKS_SLOT);
        let categories = load_slot(&storage, CATEGORIES_SLOT);
        Self { storage, tasks, categories }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns a particular task, e.g. the one an edit form is about to display
    pub fn task_by_id(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Append a fully-formed task and persist.
    /// The task arrives with its id and creation time already assigned (see
    /// [`Task::new`]) and its title already validated non-empty by the edit boundary.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
        self.save_tasks();
    }

    /// Replace the stored task carrying the same id, wholesale.
    /// Updating an id that is not in the collection is a silent no-op, not an error.
    pub fn update(&mut self, task: Task) {
        let existing = self.tasks.iter_mut().find(|t| t.id() == task.id());
        match existing {
            None => {
                log::debug!("Ignoring update of unknown task {}", task.id());
                return;
            },
            Some(existing) => *existing = task,
        }
        self.save_tasks();
    }

    /// Remove the task with this id, if present
    pub fn delete(&mut self, id: &TaskId) {
        let count_before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        if self.tasks.len() == count_before {
            log::debug!("Ignoring deletion of unknown task {}", id);
            return;
        }
        self.save_tasks();
    }

    /// Flip the completion flag of the task with this id, if present
    pub fn toggle_completion(&mut self, id: &TaskId) {
        let existing = self.tasks.iter_mut().find(|t| t.id() == id);
        match existing {
            None => {
                log::debug!("Ignoring completion toggle of unknown task {}", id);
                return;
            },
            Some(task) => {
                let completed = task.is_completed();
                task.set_completed(!completed);
            },
        }
        self.save_tasks();
    }

    /// Remove every completed task, leaving the others untouched
    pub fn clear_completed(&mut self) {
        self.tasks.retain(|task| !task.is_completed());
        self.save_tasks();
    }

    /// Create a new category and persist the category list.
    /// `name` must be non-empty and `color` a chosen palette index; both are enforced
    /// by the caller before invocation. Returns the id of the new category, so the
    /// caller can immediately assign it to a task.
    pub fn add_category(&mut self, name: String, color: u8) -> CategoryId {
        let category = Category::new(name, color);
        let new_id = category.id().clone();
        self.categories.push(category);
        self.save_categories();
        new_id
    }

    /// Tear down the store and hand the backing storage back, e.g. to reopen it
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn save_tasks(&mut self) {
        save_slot(&mut self.storage, TASKS_SLOT, &self.tasks);
    }

    fn save_categories(&mut self) {
        save_slot(&mut self.storage, CATEGORIES_SLOT, &self.categories);
    }
}
