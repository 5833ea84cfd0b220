//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProfileRepository` - the persisted profile record
//! - `MessageRepository` - chat history
//! - `Clock` - the current calendar date

mod clock;
mod message_repository;
mod profile_repository;
mod storage_error;

pub use clock::Clock;
pub use message_repository::MessageRepository;
pub use profile_repository::ProfileRepository;
pub use storage_error::StorageError;
