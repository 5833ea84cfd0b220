//! Cycle handlers: status, period starts and symptoms.

mod get_cycle_status;
mod log_symptom;
mod record_period_start;

pub use get_cycle_status::{CycleStatusView, GetCycleStatusHandler};
pub use log_symptom::{LogSymptomCommand, LogSymptomHandler};
pub use record_period_start::{
    RecordPeriodStartCommand, RecordPeriodStartHandler, RecordPeriodStartResult,
};
