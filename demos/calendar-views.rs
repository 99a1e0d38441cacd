//! This is an example of how corkboard can be used.
//! It derives the day, week and month views a planner-style UI would render.

use chrono::{Datelike, Local, NaiveTime};

use corkboard::calendar::{month_grid, step_anchor, week_dates, week_slots};
use corkboard::query::{self, TemporalMode, ViewSpec};
use corkboard::storage::MemoryStore;
use corkboard::utils::{date_label, format_time_range, print_task_list};
use corkboard::{Task, TaskStore};

fn main() {
    env_logger::init();

    let mut store = TaskStore::open(MemoryStore::new());
    let today = Local::now().date_naive();

    let mut standup = Task::new(String::from("Team standup"));
    standup.set_schedule(
        Some(today),
        NaiveTime::from_hms_opt(9, 30, 0),
        Some(today),
        NaiveTime::from_hms_opt(10, 0, 0),
    );
    store.add(standup);

    let mut review = Task::new(String::from("Design review"));
    review.set_schedule(
        Some(today),
        NaiveTime::from_hms_opt(14, 0, 0),
        Some(today),
        NaiveTime::from_hms_opt(16, 0, 0),
    );
    store.add(review);

    let mut errand = Task::new(String::from("Renew the passport"));
    errand.set_schedule(None, None, Some(step_anchor(today, TemporalMode::Day, 3)), None);
    store.add(errand);

    let mut day_spec = ViewSpec::new(today);
    day_spec.temporal_mode = TemporalMode::Day;
    println!("---- {} ----", date_label(today, today));
    print_task_list(&query::task_view(store.tasks(), &day_spec));

    println!("---- This week ----");
    for date in week_dates(today) {
        println!("  {}", date.format("%a %b %-d"));
        for slot in week_slots(store.tasks(), today) {
            if slot.date == date {
                println!(
                    "    {:>2}:00 ({}h) {} {}",
                    slot.start_hour,
                    slot.duration_hours,
                    slot.task.title(),
                    format_time_range(slot.task.start_time(), slot.task.due_time()),
                );
            }
        }
    }

    let grid = month_grid(today);
    let mut month_spec = ViewSpec::new(today);
    month_spec.temporal_mode = TemporalMode::Month;
    let stats = query::view_stats(store.tasks(), &month_spec);
    println!("---- {} ----", today.format("%B %Y"));
    println!(
        "{} cells ({} weeks), {} tasks this month ({} active)",
        grid.len(),
        grid.len() / 7,
        stats.total,
        stats.active,
    );
    for chunk in grid.chunks(7) {
        let row: Vec<String> = chunk
            .iter()
            .map(|cell| {
                let count = query::tasks_for_date(store.tasks(), &month_spec, cell.date).len();
                if cell.in_anchor_month {
                    format!("{:>3}{}", cell.date.day(), if count > 0 { "*" } else { " " })
                } else {
                    String::from("  . ")
                }
            })
            .collect();
        println!("  {}", row.join(" "));
    }
}
