//! Cycle module - the date arithmetic and history reconciliation engine.
//!
//! - `phase` - fixed table of cycle-day ranges
//! - `status` - current day, phase and next period prediction
//! - `reconciler` - period history and cycle length estimation
//! - `symptom` - cycle-day-tagged symptom log
//! - `insight` - daily tip text per phase
//!
//! Everything here is synchronous and takes "today" as an argument.

mod cycle_length;
pub mod insight;
mod phase;
pub mod reconciler;
mod status;
pub mod symptom;

pub use cycle_length::CycleLength;
pub use phase::{Phase, PhaseRange, PHASE_TABLE};
pub use reconciler::{record_period_start, ReconcileOutcome};
pub use status::{compute_status, get_status, CycleStatus, DayCounting};
pub use symptom::{log_symptom, SymptomEntry};
