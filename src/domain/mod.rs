//! Domain layer containing the cycle engine and its value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (dates, IDs, errors)
//! - `profile` - The persisted profile record and user preferences
//! - `cycle` - Status calculation, history reconciliation and symptom logging
//! - `conversation` - Chat history, assistant context and tool actions

pub mod conversation;
pub mod cycle;
pub mod foundation;
pub mod profile;
