//! Support for library configuration options

use std::path::PathBuf;

/// The storage slot the task collection is saved under
pub const TASKS_SLOT: &str = "tasks";

/// The storage slot the category list is saved under
pub const CATEGORIES_SLOT: &str = "categories";

/// Get the default folder for on-disk task data
pub fn default_data_folder() -> PathBuf {
    PathBuf::from(String::from("~/.config/corkboard"))
}
