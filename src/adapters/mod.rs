//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - JSON file and in-memory profile/message stores
//! - `clock` - system and fixed clocks

pub mod clock;
pub mod storage;

pub use clock::{FixedClock, SystemClock};
pub use storage::{FileMessageStorage, FileProfileStorage, InMemoryMessageStorage, InMemoryProfileStorage};
