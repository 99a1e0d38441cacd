//! A shared task population that the integration tests derive views and mutations from
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use corkboard::{Priority, Task};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// The anchor day the view tests look at: Wednesday 2024-01-10.
/// Its week window runs Sunday 2024-01-07 through Saturday 2024-01-13.
pub fn anchor() -> NaiveDate {
    date(2024, 1, 10)
}

pub fn task_named(title: &str) -> Task {
    Task::new(String::from(title))
}

pub fn build_task(
    title: &str,
    description: &str,
    due_date: Option<NaiveDate>,
    due_time: Option<NaiveTime>,
    priority: Priority,
    completed: bool,
) -> Task {
    let mut task = Task::new(String::from(title));
    task.set_description(String::from(description));
    task.set_schedule(None, None, due_date, due_time);
    task.set_priority(priority);
    task.set_completed(completed);
    task
}

/// Populate the collection the view tests run against:
///
/// * A: active,    due Jan 10 09:00, medium (the anchor day)
/// * B: active,    due Jan 10 (no time), high
/// * C: active,    due Jan  7, low    (the Sunday that opens the week window)
/// * D: active,    due Jan  6, high   (the Saturday before the window)
/// * E: active,    due Jan 14, medium (the Sunday after the window)
/// * F: completed, due Jan 10 08:00, high
/// * G: active,    no dates at all, high
/// * H: completed, no dates at all, low
/// * I: active,    start date Jan 12 only, medium (scheduled via the start-date fallback)
pub fn mixed_population() -> Vec<Task> {
    let mut tasks = Vec::new();

    tasks.push(build_task(
        "Prepare the agenda",
        "Email the team before noon",
        Some(date(2024, 1, 10)),
        Some(time(9, 0)),
        Priority::Medium,
        false,
    ));
    tasks.push(build_task(
        "File the expense report",
        "",
        Some(date(2024, 1, 10)),
        None,
        Priority::High,
        false,
    ));
    tasks.push(build_task(
        "Sunday reset",
        "tidy the apartment",
        Some(date(2024, 1, 7)),
        None,
        Priority::Low,
        false,
    ));
    tasks.push(build_task(
        "Water the garden",
        "",
        Some(date(2024, 1, 6)),
        None,
        Priority::High,
        false,
    ));
    tasks.push(build_task(
        "Plan next sprint",
        "",
        Some(date(2024, 1, 14)),
        None,
        Priority::Medium,
        false,
    ));
    tasks.push(build_task(
        "Morning run",
        "5k around the park",
        Some(date(2024, 1, 10)),
        Some(time(8, 0)),
        Priority::High,
        true,
    ));
    tasks.push(build_task(
        "Read the onboarding doc",
        "",
        None,
        None,
        Priority::High,
        false,
    ));
    tasks.push(build_task(
        "Archive old photos",
        "",
        None,
        None,
        Priority::Low,
        true,
    ));

    let mut travel = Task::new(String::from("Conference travel"));
    travel.set_schedule(Some(date(2024, 1, 12)), None, None, None);
    tasks.push(travel);

    tasks
}

pub fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.title()).collect()
}
