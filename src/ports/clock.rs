//! Clock port - where "today" comes from.

use crate::domain::foundation::CalendarDate;

/// Source of the current local calendar date.
///
/// The domain never reads the system clock; handlers ask this port and pass
/// the date down.
pub trait Clock: Send + Sync {
    fn today(&self) -> CalendarDate;
}
