//! Some utility functions

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};

use crate::category::Category;
use crate::task::Task;

/// A debug utility that pretty-prints a task list
pub fn print_task_list(tasks: &[Task]) {
    for task in tasks {
        print_task(task);
    }
}

/// A debug utility that pretty-prints the category list
pub fn print_category_list(categories: &[Category]) {
    for category in categories {
        println!("    {} ({})", category.name(), category.color().to_hex_string());
    }
}

pub fn print_task(task: &Task) {
    let completion = if task.is_completed() { "✓" } else { " " };
    let scheduled = match task.scheduled_date() {
        Some(date) => date.to_string(),
        None => String::from("unscheduled"),
    };
    println!("    {} {}\t[{}]\t{}", completion, task.title(), task.priority().color_name(), scheduled);
}

/// The label a view header shows for a date: "Today", "Tomorrow", "Yesterday", or a
/// short date like "Wed, Jan 10"
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        String::from("Today")
    } else if date == today + Duration::days(1) {
        String::from("Tomorrow")
    } else if date == today - Duration::days(1) {
        String::from("Yesterday")
    } else {
        date.format("%a, %b %-d").to_string()
    }
}

/// Whether a task should be highlighted as overdue: still open, and scheduled
/// strictly before `today`
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    if task.is_completed() {
        return false;
    }
    match task.scheduled_date() {
        Some(date) => date < today,
        None => false,
    }
}

/// Render a time of day on a 12-hour clock: "9:00 AM", "12:05 AM", "11:30 PM"
pub fn format_clock_time(time: NaiveTime) -> String {
    let hour = time.hour();
    let display_hour = if hour == 0 {
        12
    } else if hour > 12 {
        hour - 12
    } else {
        hour
    };
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    format!("{}:{:02} {}", display_hour, time.minute(), meridiem)
}

/// Render a start/due time pair the way a task row displays it:
/// "9:00 AM - 11:30 AM", a lone "9:00 AM", "Ends 5:00 PM", or nothing at all
pub fn format_time_range(start: Option<NaiveTime>, due: Option<NaiveTime>) -> String {
    match (start, due) {
        (Some(start), Some(due)) => format!("{} - {}", format_clock_time(start), format_clock_time(due)),
        (Some(start), None) => format_clock_time(start),
        (None, Some(due)) => format!("Ends {}", format_clock_time(due)),
        (None, None) => String::new(),
    }
}
