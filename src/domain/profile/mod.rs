//! Profile module - the user's persisted cycle and preference record.

mod aggregate;
mod preferences;

pub use aggregate::{OnboardingDetails, UserProfile};
pub use preferences::{DietPreference, Language};
