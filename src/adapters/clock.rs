//! Clock adapters.

use chrono::Local;

use crate::domain::foundation::CalendarDate;
use crate::ports::Clock;

/// Reads the local date from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from_naive(Local::now().date_naive())
    }
}

/// Always returns the same date. For tests and replaying past days.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(CalendarDate);

impl FixedClock {
    pub fn new(today: CalendarDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_date() {
        let date = CalendarDate::parse_iso("2024-01-06").unwrap();
        assert_eq!(FixedClock::new(date).today(), date);
    }

    #[test]
    fn system_clock_matches_local_date() {
        let before = Local::now().date_naive();
        let today = SystemClock.today().as_naive();
        let after = Local::now().date_naive();
        assert!(today == before || today == after);
    }
}
