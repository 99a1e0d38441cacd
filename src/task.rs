//! To-do tasks

use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::category::CategoryId;

/// The identifier of a task.
///
/// Identifiers are assigned once at creation time and never change afterwards, even
/// when every other field of the task is edited.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskId {
    content: String,
}
impl TaskId {
    /// Generate a random TaskId.
    pub fn random() -> Self {
        let random = Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}
impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for TaskId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}
impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<TaskId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let content = String::deserialize(deserializer)?;
        Ok(TaskId { content })
    }
}

/// How urgent a task is.
///
/// There is no "unset" level: tasks created without an explicit choice get
/// [`Priority::Medium`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Numeric rank, higher means more urgent. This is what the sort order compares.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    /// A display color name for this priority level
    pub fn color_name(&self) -> &'static str {
        match self {
            Priority::Low => "green",
            Priority::Medium => "orange",
            Priority::High => "red",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// A to-do task
///
/// All four scheduling fields are optional. A task without any date is "unscheduled"
/// and never shows up in day/week/month windows. Date and time-of-day are kept as
/// separate calendar components with no timezone attached, so window membership is
/// decided on local calendar dates rather than on UTC instants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique, immutable identifier
    id: TaskId,

    /// The display title. Never persisted empty: the edit boundary rejects blank
    /// titles before they reach the store.
    title: String,
    /// Free-form details, may be empty
    description: String,

    start_date: Option<NaiveDate>,
    start_time: Option<NaiveTime>,
    due_date: Option<NaiveDate>,
    due_time: Option<NaiveTime>,

    is_completed: bool,

    /// The time this task was created. Set once, never mutated afterwards.
    created_at: DateTime<Utc>,

    priority: Priority,

    /// At most one category per task
    category_id: Option<CategoryId>,
    /// Palette index of the referenced category, denormalized onto the task so views
    /// can color it without a category lookup
    category_color: Option<u8>,
}

impl Task {
    /// Create a brand new task with the given (non-empty) title.
    /// This picks a new random id and stamps the creation time.
    pub fn new(title: String) -> Self {
        let new_id = TaskId::random();
        let new_created_at = Utc::now();
        Self::new_with_parameters(
            new_id,
            title,
            String::new(),
            None,
            None,
            None,
            None,
            false,
            new_created_at,
            Priority::default(),
            None,
            None,
        )
    }

    /// Create a task from every field explicitly. Mostly useful for tests, and for
    /// callers rebuilding tasks from an external source.
    pub fn new_with_parameters(
        id: TaskId,
        title: String,
        description: String,
        start_date: Option<NaiveDate>,
        start_time: Option<NaiveTime>,
        due_date: Option<NaiveDate>,
        due_time: Option<NaiveTime>,
        is_completed: bool,
        created_at: DateTime<Utc>,
        priority: Priority,
        category_id: Option<CategoryId>,
        category_color: Option<u8>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            start_date,
            start_time,
            due_date,
            due_time,
            is_completed,
            created_at,
            priority,
            category_id,
            category_color,
        }
    }

    pub fn id(&self) -> &TaskId     { &self.id          }
    pub fn title(&self) -> &str     { &self.title       }
    pub fn description(&self) -> &str { &self.description }
    pub fn start_date(&self) -> Option<NaiveDate> { self.start_date }
    pub fn start_time(&self) -> Option<NaiveTime> { self.start_time }
    pub fn due_date(&self) -> Option<NaiveDate>   { self.due_date   }
    pub fn due_time(&self) -> Option<NaiveTime>   { self.due_time   }
    pub fn is_completed(&self) -> bool            { self.is_completed }
    pub fn created_at(&self) -> &DateTime<Utc>    { &self.created_at }
    pub fn priority(&self) -> Priority            { self.priority   }
    pub fn category_id(&self) -> Option<&CategoryId> { self.category_id.as_ref() }
    pub fn category_color(&self) -> Option<u8>    { self.category_color }

    /// The date that decides which day/week/month window this task belongs to:
    /// the due date, falling back to the start date. `None` means unscheduled.
    pub fn scheduled_date(&self) -> Option<NaiveDate> {
        self.due_date.or(self.start_date)
    }

    /// The key the sort order uses at its due-date level.
    /// A missing due time counts as midnight, so a date-only task sorts at the top of
    /// its day; remaining ties are broken by priority.
    pub fn due_sort_key(&self) -> Option<(NaiveDate, NaiveTime)> {
        self.due_date
            .map(|date| (date, self.due_time.unwrap_or(NaiveTime::MIN)))
    }

    /// Rename a task. The new title must already have passed the edit boundary's
    /// non-empty check.
    pub fn set_title(&mut self, new_title: String) {
        self.title = new_title;
    }

    pub fn set_description(&mut self, new_description: String) {
        self.description = new_description;
    }

    /// Replace all four scheduling components at once, the way an edit form submits
    /// them
    pub fn set_schedule(
        &mut self,
        start_date: Option<NaiveDate>,
        start_time: Option<NaiveTime>,
        due_date: Option<NaiveDate>,
        due_time: Option<NaiveTime>,
    ) {
        self.start_date = start_date;
        self.start_time = start_time;
        self.due_date = due_date;
        self.due_time = due_time;
    }

    pub fn set_priority(&mut self, new_priority: Priority) {
        self.priority = new_priority;
    }

    /// Assign this task to a category (id and palette color index), or clear the
    /// assignment
    pub fn set_category(&mut self, category: Option<(CategoryId, u8)>) {
        match category {
            Some((id, color)) => {
                self.category_id = Some(id);
                self.category_color = Some(color);
            }
            None => {
                self.category_id = None;
                self.category_color = None;
            }
        }
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.is_completed = completed;
    }
}
