//! Cycle status calculator.
//!
//! Turns a last period start date and a cycle length into the current cycle
//! day, the phase, and the next predicted period. Everything here is a pure
//! function of its inputs; "today" is always passed in.

use serde::{Deserialize, Serialize};

use super::{CycleLength, Phase};
use crate::domain::foundation::{CalendarDate, ValidationError};

/// How the cycle day is numbered once the predicted cycle length has passed.
///
/// One rule is chosen per engine and used for both the status display and
/// symptom tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCounting {
    /// `days elapsed mod cycle length + 1`, a repeating 1..=length axis.
    #[default]
    Wrapped,
    /// `days elapsed + 1`, growing past the cycle length until a new
    /// period is recorded.
    Continuous,
}

impl DayCounting {
    /// Computes the 1-based cycle day for `today`.
    ///
    /// A last period date in the future clamps to day 1.
    pub fn cycle_day(
        &self,
        last_period: CalendarDate,
        cycle_length: CycleLength,
        today: CalendarDate,
    ) -> u32 {
        self.day_for(today.days_since(last_period), cycle_length.as_i64())
    }

    /// `length` must be positive.
    fn day_for(&self, elapsed: i64, length: i64) -> u32 {
        if elapsed < 0 {
            return 1;
        }
        let offset = match self {
            DayCounting::Wrapped => elapsed % length,
            DayCounting::Continuous => elapsed,
        };
        u32::try_from(offset + 1).unwrap_or(u32::MAX)
    }
}

/// Derived view of where the user is in her cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleStatus {
    pub day: u32,
    pub phase: Phase,
    pub next_period_date: CalendarDate,
    pub days_until_next: i64,
}

/// Computes the cycle status for `today`.
///
/// The prediction is projected forward by whole cycles until it is not in
/// the past, so `days_until_next` is never negative.
pub fn compute_status(
    last_period: CalendarDate,
    cycle_length: CycleLength,
    today: CalendarDate,
    counting: DayCounting,
) -> CycleStatus {
    status_for(last_period, cycle_length.as_i64(), today, counting)
}

/// Same as [`compute_status`] but from the primitive inputs a UI holds.
///
/// Any positive length is accepted here, including lengths outside the
/// [`CycleLength`] band; only a zero length is rejected.
pub fn get_status(
    last_period_iso: &str,
    cycle_length_days: u32,
    today: CalendarDate,
    counting: DayCounting,
) -> Result<CycleStatus, ValidationError> {
    let last_period = CalendarDate::parse_iso(last_period_iso)?;
    if cycle_length_days == 0 {
        return Err(ValidationError::out_of_range(
            "cycle_length",
            1,
            i64::from(u32::MAX),
            0,
        ));
    }
    Ok(status_for(
        last_period,
        i64::from(cycle_length_days),
        today,
        counting,
    ))
}

fn status_for(
    last_period: CalendarDate,
    length: i64,
    today: CalendarDate,
    counting: DayCounting,
) -> CycleStatus {
    let day = counting.day_for(today.days_since(last_period), length);
    let next_period_date = next_period_on_or_after(last_period, length, today);

    CycleStatus {
        day,
        phase: Phase::for_day(day),
        next_period_date,
        days_until_next: next_period_date.days_since(today),
    }
}

/// First `last_period + k * length` (k >= 1) that is not before `today`.
fn next_period_on_or_after(last_period: CalendarDate, length: i64, today: CalendarDate) -> CalendarDate {
    let elapsed = today.days_since(last_period);
    // ceil(elapsed / length), at least one cycle
    let cycles = if elapsed <= length {
        1
    } else {
        (elapsed + length - 1) / length
    };
    last_period.plus_days(cycles * length)
}
