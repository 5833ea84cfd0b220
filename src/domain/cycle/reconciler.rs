//! History reconciler.
//!
//! Sole writer of a profile's period history, last period date and cycle
//! length. Recording a period start keeps the history sorted and unique and
//! re-estimates the cycle length from the most recent gaps, ignoring gaps
//! that cannot be a single cycle.

use super::CycleLength;
use crate::domain::foundation::CalendarDate;
use crate::domain::profile::UserProfile;

/// Number of most recent dates used for estimation (three gaps).
pub const ESTIMATION_WINDOW: usize = 4;

/// Gaps at or below this many days are treated as entry mistakes.
pub const MIN_PLAUSIBLE_GAP: i64 = 15;

/// Gaps at or above this many days are treated as skipped logging.
pub const MAX_PLAUSIBLE_GAP: i64 = 45;

/// What a call to [`record_period_start`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// False when the date was already in the history.
    pub inserted: bool,
    pub last_period_date: CalendarDate,
    pub previous_cycle_length: CycleLength,
    pub cycle_length: CycleLength,
}

impl ReconcileOutcome {
    pub fn cycle_length_changed(&self) -> bool {
        self.previous_cycle_length != self.cycle_length
    }
}

/// Records a period start date and re-estimates the cycle length.
///
/// Inserting a date already present is a no-op on the history, but the
/// last period date and cycle length are still recomputed. Backfilled
/// older dates do not move `last_period_date`.
pub fn record_period_start(profile: &mut UserProfile, date: CalendarDate) -> ReconcileOutcome {
    let previous_cycle_length = profile.cycle_length();

    let inserted = !profile.period_history().contains(&date);
    if inserted {
        profile.period_history_mut().push(date);
    }
    profile.normalize_period_history();

    if let Some(estimate) = estimate_cycle_length(profile.period_history()) {
        profile.set_cycle_length(estimate);
    }

    ReconcileOutcome {
        inserted,
        last_period_date: profile.last_period_date(),
        previous_cycle_length,
        cycle_length: profile.cycle_length(),
    }
}

/// Replaces the most recent history entry with a corrected date.
///
/// Used when the user edits "last period date" in settings: the edit is a
/// correction of the latest entry, not a new period. The cycle length is
/// left alone.
pub fn correct_latest_period(profile: &mut UserProfile, date: CalendarDate) {
    let history = profile.period_history_mut();
    match history.first_mut() {
        Some(latest) => *latest = date,
        None => history.push(date),
    }
    profile.normalize_period_history();
}

/// Explicit cycle length chosen by the user.
pub fn override_cycle_length(profile: &mut UserProfile, length: CycleLength) {
    profile.set_cycle_length(length);
}

/// Averages the plausible gaps between the most recent history dates.
///
/// `history` must be sorted descending. Returns `None` when no gap inside
/// the plausible band exists, which includes single-date histories.
pub fn estimate_cycle_length(history: &[CalendarDate]) -> Option<CycleLength> {
    let window = &history[..history.len().min(ESTIMATION_WINDOW)];

    let plausible: Vec<i64> = window
        .windows(2)
        .map(|pair| pair[0].days_since(pair[1]).abs())
        .filter(|gap| *gap > MIN_PLAUSIBLE_GAP && *gap < MAX_PLAUSIBLE_GAP)
        .collect();

    if plausible.is_empty() {
        return None;
    }

    let count = plausible.len() as i64;
    let total: i64 = plausible.iter().sum();
    // round half up
    let mean = (2 * total + count) / (2 * count);

    u32::try_from(mean).ok().and_then(|days| CycleLength::new(days).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{DietPreference, Language, OnboardingDetails};
    use proptest::prelude::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse_iso(s).unwrap()
    }

    fn profile_starting(s: &str) -> UserProfile {
        UserProfile::onboard(OnboardingDetails {
            name: None,
            last_period_date: date(s),
            diet_preference: DietPreference::Vegetarian,
            language: Language::English,
        })
    }

    #[test]
    fn second_date_thirty_days_later_sets_length_to_thirty() {
        let mut profile = profile_starting("2024-01-01");

        let outcome = record_period_start(&mut profile, date("2024-01-31"));

        assert!(outcome.inserted);
        assert!(outcome.cycle_length_changed());
        assert_eq!(profile.cycle_length().days(), 30);
        assert_eq!(profile.last_period_date(), date("2024-01-31"));
    }

    #[test]
    fn single_date_history_keeps_length() {
        let mut profile = profile_starting("2024-01-01");

        let outcome = record_period_start(&mut profile, date("2024-01-01"));

        assert!(!outcome.inserted);
        assert!(!outcome.cycle_length_changed());
        assert_eq!(profile.cycle_length().days(), 28);
        assert_eq!(profile.period_history().len(), 1);
    }

    #[test]
    fn implausible_gap_is_discarded() {
        // gaps: 28, 28, 120 (most recent first)
        let mut profile = profile_starting("2023-05-01");
        record_period_start(&mut profile, date("2023-08-29"));
        record_period_start(&mut profile, date("2023-09-26"));
        record_period_start(&mut profile, date("2023-10-24"));

        assert_eq!(profile.period_history().len(), 4);
        assert_eq!(profile.cycle_length().days(), 28);
    }

    #[test]
    fn only_four_most_recent_dates_are_used() {
        let history = vec![
            date("2024-04-30"),
            date("2024-04-01"),
            date("2024-03-03"),
            date("2024-02-03"),
            date("2024-01-01"), // fifth date, 33-day gap ignored
        ];
        // gaps 29, 29, 29
        assert_eq!(estimate_cycle_length(&history).unwrap().days(), 29);
    }

    #[test]
    fn mean_rounds_half_up() {
        // gaps 29 and 30 -> 29.5 -> 30
        let history = vec![date("2024-03-01"), date("2024-01-31"), date("2024-01-02")];
        assert_eq!(estimate_cycle_length(&history).unwrap().days(), 30);
    }

    #[test]
    fn band_edges_are_exclusive() {
        let fifteen = vec![date("2024-01-16"), date("2024-01-01")];
        let forty_five = vec![date("2024-02-15"), date("2024-01-01")];
        let sixteen = vec![date("2024-01-17"), date("2024-01-01")];

        assert!(estimate_cycle_length(&fifteen).is_none());
        assert!(estimate_cycle_length(&forty_five).is_none());
        assert_eq!(estimate_cycle_length(&sixteen).unwrap().days(), 16);
    }

    #[test]
    fn no_plausible_gap_keeps_previous_length() {
        let mut profile = profile_starting("2024-01-01");
        let outcome = record_period_start(&mut profile, date("2024-01-05"));

        assert!(outcome.inserted);
        assert_eq!(profile.cycle_length().days(), 28);
        assert_eq!(profile.period_history().len(), 2);
    }

    #[test]
    fn backfilled_older_date_keeps_latest_anchor() {
        let mut profile = profile_starting("2024-03-01");
        record_period_start(&mut profile, date("2024-01-31"));

        assert_eq!(profile.last_period_date(), date("2024-03-01"));
        assert_eq!(
            profile.period_history(),
            &[date("2024-03-01"), date("2024-01-31")]
        );
        assert_eq!(profile.cycle_length().days(), 30);
    }

    #[test]
    fn correction_replaces_latest_entry() {
        let mut profile = profile_starting("2024-01-01");
        record_period_start(&mut profile, date("2024-01-29"));

        correct_latest_period(&mut profile, date("2024-01-30"));

        assert_eq!(
            profile.period_history(),
            &[date("2024-01-30"), date("2024-01-01")]
        );
        assert_eq!(profile.last_period_date(), date("2024-01-30"));
        assert_eq!(profile.cycle_length().days(), 28);
    }

    #[test]
    fn correction_onto_existing_date_collapses_duplicate() {
        let mut profile = profile_starting("2024-01-01");
        record_period_start(&mut profile, date("2024-01-29"));

        correct_latest_period(&mut profile, date("2024-01-01"));

        assert_eq!(profile.period_history(), &[date("2024-01-01")]);
        assert_eq!(profile.last_period_date(), date("2024-01-01"));
    }

    #[test]
    fn override_sets_explicit_length() {
        let mut profile = profile_starting("2024-01-01");
        override_cycle_length(&mut profile, CycleLength::from_settings(32).unwrap());
        assert_eq!(profile.cycle_length().days(), 32);
    }

    fn arb_dates() -> impl Strategy<Value = Vec<CalendarDate>> {
        prop::collection::vec(0i64..3_000, 1..12)
            .prop_map(|offsets| offsets.into_iter().map(|o| date("2018-01-01").plus_days(o)).collect())
    }

    proptest! {
        #[test]
        fn history_stays_strictly_descending(dates in arb_dates()) {
            let mut profile = profile_starting("2018-01-01");
            for d in &dates {
                record_period_start(&mut profile, *d);
                let history = profile.period_history();
                prop_assert!(history.windows(2).all(|pair| pair[0] > pair[1]));
                prop_assert_eq!(history[0], profile.last_period_date());
            }
        }

        #[test]
        fn recording_same_date_twice_is_idempotent(dates in arb_dates(), extra in 0i64..3_000) {
            let mut profile = profile_starting("2018-01-01");
            for d in &dates {
                record_period_start(&mut profile, *d);
            }
            let new_date = date("2018-01-01").plus_days(extra);

            let mut once = profile.clone();
            record_period_start(&mut once, new_date);
            let mut twice = once.clone();
            let outcome = record_period_start(&mut twice, new_date);

            prop_assert_eq!(&once, &twice);
            prop_assert!(!outcome.inserted);
        }

        #[test]
        fn estimate_stays_in_band(dates in arb_dates()) {
            let mut history = dates;
            history.sort_unstable_by(|a, b| b.cmp(a));
            history.dedup();
            if let Some(length) = estimate_cycle_length(&history) {
                prop_assert!(length.days() > 15 && length.days() < 45);
            }
        }
    }
}
