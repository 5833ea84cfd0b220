//! Profile handlers: onboarding, settings and lookup.

mod create_profile;
mod get_profile;
mod update_settings;

pub use create_profile::{CreateProfileCommand, CreateProfileHandler};
pub use get_profile::GetProfileHandler;
pub use update_settings::{UpdateSettingsCommand, UpdateSettingsHandler};
