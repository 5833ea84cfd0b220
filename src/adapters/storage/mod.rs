//! Storage Adapters
//!
//! Implementations of the `ProfileRepository` and `MessageRepository` ports.
//!
//! ## Available Adapters
//!
//! - **FileProfileStorage** / **FileMessageStorage** - JSON files on disk
//! - **InMemoryProfileStorage** / **InMemoryMessageStorage** - memory only (testing/development)
//!
//! ## Usage
//!
//! ```
//! use sakhi::adapters::storage::{FileProfileStorage, InMemoryProfileStorage};
//!
//! // Production: file-based storage
//! let storage = FileProfileStorage::new("./data/profile.json");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryProfileStorage::new();
//! ```

mod file_message_storage;
mod file_profile_storage;
mod in_memory_message_storage;
mod in_memory_profile_storage;
mod json_file;

pub use file_message_storage::FileMessageStorage;
pub use file_profile_storage::FileProfileStorage;
pub use in_memory_message_storage::InMemoryMessageStorage;
pub use in_memory_profile_storage::InMemoryProfileStorage;
