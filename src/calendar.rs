//! Date windows and grid layout for calendar-style views
//!
//! Everything in this module is pure coordinate computation. Dates are compared as
//! local calendar dates (year/month/day), never as timestamps, so window membership
//! cannot be shifted by a UTC conversion around midnight.

use chrono::{Datelike, Duration, NaiveDate, Timelike};

use crate::query::TemporalMode;
use crate::task::Task;

/// The hour row tasks without a start time are placed on
pub const DEFAULT_START_HOUR: u32 = 9;

/// The Sunday that starts the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// The 7 dates of the week containing `anchor`, Sunday first
pub fn week_dates(anchor: NaiveDate) -> Vec<NaiveDate> {
    let start = week_start(anchor);
    (0..7).map(|offset| start + Duration::days(offset)).collect()
}

/// Whether `date` falls in the Sunday-to-Saturday week containing `anchor`
pub fn same_week(date: NaiveDate, anchor: NaiveDate) -> bool {
    week_start(date) == week_start(anchor)
}

/// Whether `date` falls in the calendar month containing `anchor`
pub fn same_month(date: NaiveDate, anchor: NaiveDate) -> bool {
    date.year() == anchor.year() && date.month() == anchor.month()
}

/// One cell of the month grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthCell {
    pub date: NaiveDate,
    /// False for the leading/trailing cells borrowed from the adjacent months
    pub in_anchor_month: bool,
}

/// The full grid a month view displays for the month containing `anchor`.
///
/// The grid starts on the Sunday on or before the 1st and covers complete weeks, so
/// its length is always a multiple of 7. Cells borrowed from the previous or next
/// month to fill those weeks are flagged with `in_anchor_month == false`.
pub fn month_grid(anchor: NaiveDate) -> Vec<MonthCell> {
    let first = anchor.with_day(1).unwrap(/* every month has a day 1 */);
    let start = week_start(first);
    let leading = (first - start).num_days();
    let total_cells = ((leading + days_in_month(anchor) + 6) / 7) * 7;

    (0..total_cells)
        .map(|offset| {
            let date = start + Duration::days(offset);
            MonthCell {
                date,
                in_anchor_month: same_month(date, anchor),
            }
        })
        .collect()
}

/// Where one task renders inside the hour grid of a week view
#[derive(Clone, Debug, PartialEq)]
pub struct HourSlot {
    pub task: Task,
    /// The grid column: the day this task renders under
    pub date: NaiveDate,
    /// The hour row the task starts at (0-23)
    pub start_hour: u32,
    /// Rendered height in hour rows, always at least 1
    pub duration_hours: u32,
}

/// Place every task scheduled during the week containing `anchor` onto the hour grid.
///
/// A task renders under its start date, falling back to its due date. Its row is its
/// start-time hour (9 when it has no start time); its height is the hour distance
/// from start to due time, clamped so a task never renders with non-positive height.
pub fn week_slots(tasks: &[Task], anchor: NaiveDate) -> Vec<HourSlot> {
    let mut slots = Vec::new();

    for task in tasks {
        let date = match task.start_date().or(task.due_date()) {
            None => continue,
            Some(date) => date,
        };
        if !same_week(date, anchor) {
            continue;
        }

        let start_hour = task
            .start_time()
            .map(|time| time.hour())
            .unwrap_or(DEFAULT_START_HOUR);
        let due_hour = task
            .due_time()
            .map(|time| time.hour())
            .unwrap_or(start_hour + 1);
        let duration_hours = std::cmp::max(1, due_hour.saturating_sub(start_hour));

        slots.push(HourSlot {
            task: task.clone(),
            date,
            start_hour,
            duration_hours,
        });
    }

    slots
}

/// Move an anchor date one step backward (`-1`) or forward (`+1`): by a day in day
/// mode, a week in week mode, a month in month mode. [`TemporalMode::None`] steps by
/// days as well, since a flat list has nothing larger to page by.
///
/// Month steps preserve the day-of-month when it exists in the target month and
/// clamp to the target's last day otherwise (Jan 31 + 1 month = Feb 28/29).
pub fn step_anchor(anchor: NaiveDate, mode: TemporalMode, direction: i32) -> NaiveDate {
    match mode {
        TemporalMode::None | TemporalMode::Day => anchor + Duration::days(direction as i64),
        TemporalMode::Week => anchor + Duration::days(7 * direction as i64),
        TemporalMode::Month => {
            let months = anchor.year() * 12 + anchor.month0() as i32 + direction;
            let year = months.div_euclid(12);
            let month0 = months.rem_euclid(12) as u32;
            let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)
                .unwrap(/* month0 is 0-11 by construction */);
            let day = std::cmp::min(anchor.day() as i64, days_in_month(first));
            first.with_day(day as u32).unwrap(/* clamped to the month length */)
        },
    }
}

/// Number of days in the month containing `date`
fn days_in_month(date: NaiveDate) -> i64 {
    let first = date.with_day(1).unwrap(/* every month has a day 1 */);
    let next_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    (next_first.unwrap(/* the first of the next month always exists */) - first).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn week_starts_on_sunday() {
        // 2024-01-10 is a Wednesday
        assert_eq!(week_start(date(2024, 1, 10)), date(2024, 1, 7));
        // A Sunday is its own week start
        assert_eq!(week_start(date(2024, 1, 7)), date(2024, 1, 7));
        // A Saturday belongs to the week that started 6 days earlier
        assert_eq!(week_start(date(2024, 1, 13)), date(2024, 1, 7));
    }

    #[test]
    fn month_steps_clamp_to_month_end() {
        assert_eq!(step_anchor(date(2024, 1, 31), TemporalMode::Month, 1), date(2024, 2, 29));
        assert_eq!(step_anchor(date(2023, 1, 31), TemporalMode::Month, 1), date(2023, 2, 28));
        assert_eq!(step_anchor(date(2024, 3, 31), TemporalMode::Month, -1), date(2024, 2, 29));
        // December to January crosses the year boundary
        assert_eq!(step_anchor(date(2023, 12, 15), TemporalMode::Month, 1), date(2024, 1, 15));
        assert_eq!(step_anchor(date(2024, 1, 15), TemporalMode::Month, -1), date(2023, 12, 15));
    }

    #[test]
    fn day_and_week_steps() {
        assert_eq!(step_anchor(date(2024, 1, 10), TemporalMode::Day, 1), date(2024, 1, 11));
        assert_eq!(step_anchor(date(2024, 1, 10), TemporalMode::None, -1), date(2024, 1, 9));
        assert_eq!(step_anchor(date(2024, 1, 10), TemporalMode::Week, 1), date(2024, 1, 17));
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2023, 2, 10)), 28);
        assert_eq!(days_in_month(date(2024, 12, 25)), 31);
    }
}
