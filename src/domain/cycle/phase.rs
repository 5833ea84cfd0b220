//! Cycle phases and the fixed table mapping cycle days onto them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named sub-range of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
}

/// One contiguous row of the phase table. `last_day` of `None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseRange {
    pub phase: Phase,
    pub first_day: u32,
    pub last_day: Option<u32>,
}

impl PhaseRange {
    /// Returns true if `day` falls inside this range.
    pub fn contains(&self, day: u32) -> bool {
        day >= self.first_day && self.last_day.map_or(true, |last| day <= last)
    }
}

/// Nominal 28-day boundaries. They are not scaled to the personal cycle
/// length; every day from 17 onward is Luteal however long the cycle runs.
pub const PHASE_TABLE: [PhaseRange; 4] = [
    PhaseRange {
        phase: Phase::Menstrual,
        first_day: 1,
        last_day: Some(5),
    },
    PhaseRange {
        phase: Phase::Follicular,
        first_day: 6,
        last_day: Some(13),
    },
    PhaseRange {
        phase: Phase::Ovulation,
        first_day: 14,
        last_day: Some(16),
    },
    PhaseRange {
        phase: Phase::Luteal,
        first_day: 17,
        last_day: None,
    },
];

impl Phase {
    /// Looks up the phase for a 1-based cycle day.
    ///
    /// Day 0 is never produced by the status calculator; it maps to
    /// Menstrual so the lookup stays total.
    pub fn for_day(day: u32) -> Phase {
        PHASE_TABLE
            .iter()
            .find(|range| range.contains(day))
            .map(|range| range.phase)
            .unwrap_or(Phase::Menstrual)
    }

    /// Returns the table row for this phase.
    pub fn range(&self) -> PhaseRange {
        match self {
            Phase::Menstrual => PHASE_TABLE[0],
            Phase::Follicular => PHASE_TABLE[1],
            Phase::Ovulation => PHASE_TABLE[2],
            Phase::Luteal => PHASE_TABLE[3],
        }
    }

    /// Longer label used on the home screen.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Menstrual => "Menstruation",
            Phase::Follicular => "Follicular Phase",
            Phase::Ovulation => "Ovulation",
            Phase::Luteal => "Luteal Phase",
        }
    }

    /// All phases in cycle order.
    pub fn all() -> [Phase; 4] {
        [
            Phase::Menstrual,
            Phase::Follicular,
            Phase::Ovulation,
            Phase::Luteal,
        ]
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Menstrual => "Menstrual",
            Phase::Follicular => "Follicular",
            Phase::Ovulation => "Ovulation",
            Phase::Luteal => "Luteal",
        };
        write!(f, "{}", s)
    }
}
