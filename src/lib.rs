//! Sakhi - menstrual cycle tracking engine
//!
//! Turns a remembered last period date, a rolling history of period starts
//! and a symptom log into the current cycle day and phase, a predicted next
//! period, and a cycle length estimated from the observed history. An
//! external chat assistant can record periods and symptoms through two
//! declared tool calls.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
