//! # Due-Reminder Evaluator
//!
//! Pure functions that decide which reminder occurrences are due at a
//! given instant. The evaluator holds no state and performs no I/O: the
//! caller supplies the schedule snapshot and the current time, which is
//! what makes the firing logic directly unit-testable with injected
//! clocks.
//!
//! ## Due computation
//!
//! For every schedule and every time-of-day entry, the scheduled instant
//! is built on `now`'s calendar date. An occurrence is due when `now` is
//! within the tolerance window either side of that instant. Because the
//! instant is always constructed on today's date, an entry near midnight
//! never matches the previous or next day's firing: at `00:01` an entry
//! for `23:58` is more than 23 hours away from today's instant, far
//! outside any sane tolerance.
//!
//! Schedule edits take effect on the next evaluation: occurrences are
//! recomputed from scratch each tick, so there is no retroactive firing
//! for times that passed before the edit.

use carealert_core::models::alert::ReminderOccurrence;
use carealert_core::models::medicine::MedicineSchedule;
use chrono::{Duration, NaiveDateTime};

/// Default tolerance either side of a scheduled instant (5 minutes).
pub fn default_tolerance() -> Duration {
    Duration::minutes(5)
}

/// Computes the set of occurrences due at `now`.
///
/// An occurrence `(schedule, time, today)` is due iff
/// `|now - today.and_time(time)| <= tolerance`.
///
/// # Arguments
///
/// * `schedules` - Read-only snapshot of the current medicine schedules
/// * `now` - The current local time, injected by the caller
/// * `tolerance` - Window either side of the scheduled instant
pub fn due_occurrences(
    schedules: &[MedicineSchedule],
    now: NaiveDateTime,
    tolerance: Duration,
) -> Vec<ReminderOccurrence> {
    let today = now.date();
    let mut due = Vec::new();

    for schedule in schedules {
        for &time in &schedule.times {
            let scheduled = today.and_time(time);
            if (now - scheduled).abs() <= tolerance {
                due.push(ReminderOccurrence::new(schedule, time, today));
            }
        }
    }

    due
}

/// Occurrences still ahead of `now` today, soonest first.
///
/// Used for "today's upcoming doses" summaries; never feeds the alert
/// lifecycle.
pub fn upcoming_today(
    schedules: &[MedicineSchedule],
    now: NaiveDateTime,
) -> Vec<ReminderOccurrence> {
    let today = now.date();
    let mut upcoming: Vec<_> = schedules
        .iter()
        .flat_map(|schedule| {
            schedule
                .times
                .iter()
                .filter(|&&time| today.and_time(time) > now)
                .map(|&time| ReminderOccurrence::new(schedule, time, today))
        })
        .collect();
    upcoming.sort_by_key(|occurrence| occurrence.scheduled_at);
    upcoming
}
