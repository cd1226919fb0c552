//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod memory;
pub mod storage;

pub use config::Config;
pub use memory::MemoryStorage;
pub use storage::{EntryStorage, FileSystemStorage, SessionStorage};
