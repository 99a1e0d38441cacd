//! Pure derivation of filtered, sorted task views
//!
//! Nothing in this module mutates anything: the inputs are the current task
//! collection plus a [`ViewSpec`], the output is a freshly-built, ordered `Vec` of
//! task copies. A presentation layer re-runs the derivation after every mutation and
//! renders the result.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::calendar;
use crate::task::Task;

/// Which completion states a view keeps
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusFilter {
    /// Keep everything
    All,
    /// Keep only tasks that are not completed yet
    Active,
    /// Keep only completed tasks
    Completed,
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::All
    }
}

/// Which date window restricts a view
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TemporalMode {
    /// No window: the flat list over the whole collection
    None,
    /// The single anchor day
    Day,
    /// The Sunday-to-Saturday week containing the anchor
    Week,
    /// The calendar month containing the anchor
    Month,
}

impl Default for TemporalMode {
    fn default() -> Self {
        TemporalMode::None
    }
}

/// The parameters of one view derivation
///
/// This is a plain value the presentation layer passes in on every render; the
/// "current filter" is never ambient state inside this crate.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewSpec {
    pub status_filter: StatusFilter,
    /// Case-insensitive substring to search titles and descriptions for.
    /// Empty means "no search".
    pub search_text: String,
    pub temporal_mode: TemporalMode,
    /// The date the temporal window is anchored at. Ignored when the mode is
    /// [`TemporalMode::None`].
    pub anchor_date: NaiveDate,
}

impl ViewSpec {
    /// A spec that shows the whole collection, anchored at the given date
    pub fn new(anchor_date: NaiveDate) -> Self {
        Self {
            status_filter: StatusFilter::default(),
            search_text: String::new(),
            temporal_mode: TemporalMode::default(),
            anchor_date,
        }
    }
}

/// The three counters a view header displays.
///
/// They are computed over the active date window only: the status filter and the
/// search text do not affect them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ViewStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Derive the filtered, sorted sequence a view renders.
///
/// The pipeline applies, in this fixed order: the temporal window, the status
/// filter, the search filter, then the sort of [`compare_tasks`]. Returns owned
/// copies: callers never get a handle into the live collection.
pub fn task_view(tasks: &[Task], spec: &ViewSpec) -> Vec<Task> {
    let query = spec.search_text.to_lowercase();

    let mut view: Vec<Task> = tasks
        .iter()
        .filter(|task| in_window(task, spec))
        .filter(|task| matches_status(task, spec))
        .filter(|task| query.is_empty() || matches_search(task, &query))
        .cloned()
        .collect();

    view.sort_by(|a, b| compare_tasks(a, b));
    view
}

/// Count the tasks inside the active date window
pub fn view_stats(tasks: &[Task], spec: &ViewSpec) -> ViewStats {
    let mut total = 0;
    let mut completed = 0;
    for task in tasks.iter().filter(|task| in_window(task, spec)) {
        total += 1;
        if task.is_completed() {
            completed += 1;
        }
    }
    ViewStats {
        total,
        active: total - completed,
        completed,
    }
}

/// The tasks due on one specific date, with the status and search filters applied.
/// This is what a month-grid cell lists under its day number.
pub fn tasks_for_date(tasks: &[Task], spec: &ViewSpec, date: NaiveDate) -> Vec<Task> {
    let query = spec.search_text.to_lowercase();

    let mut view: Vec<Task> = tasks
        .iter()
        .filter(|task| task.due_date() == Some(date))
        .filter(|task| matches_status(task, spec))
        .filter(|task| query.is_empty() || matches_search(task, &query))
        .cloned()
        .collect();

    view.sort_by(|a, b| compare_tasks(a, b));
    view
}

/// The total order views are sorted in. Three levels, each only reached on a tie at
/// the previous one:
///
/// 1. incomplete tasks before completed tasks;
/// 2. ascending due date/time, tasks without a due date last within their
///    completion group;
/// 3. descending priority (high, medium, low).
///
/// Used with a stable sort, this yields the same output for the same input, byte for
/// byte: tasks equal on all three levels keep their insertion order.
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    let by_completion = a.is_completed().cmp(&b.is_completed());
    if by_completion != Ordering::Equal {
        return by_completion;
    }

    let by_due = match (a.due_sort_key(), b.due_sort_key()) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    if by_due != Ordering::Equal {
        return by_due;
    }

    b.priority().rank().cmp(&a.priority().rank())
}

fn in_window(task: &Task, spec: &ViewSpec) -> bool {
    match spec.temporal_mode {
        TemporalMode::None => true,
        TemporalMode::Day => task
            .scheduled_date()
            .map_or(false, |date| date == spec.anchor_date),
        TemporalMode::Week => task
            .scheduled_date()
            .map_or(false, |date| calendar::same_week(date, spec.anchor_date)),
        TemporalMode::Month => task
            .scheduled_date()
            .map_or(false, |date| calendar::same_month(date, spec.anchor_date)),
    }
}

fn matches_status(task: &Task, spec: &ViewSpec) -> bool {
    match spec.status_filter {
        StatusFilter::All => true,
        StatusFilter::Active => !task.is_completed(),
        StatusFilter::Completed => task.is_completed(),
    }
}

/// Case-insensitive substring match over title and description.
/// `query` must already be lowercased.
fn matches_search(task: &Task, query: &str) -> bool {
    task.title().to_lowercase().contains(query)
        || task.description().to_lowercase().contains(query)
}
