//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod notify;
pub mod session;
pub mod store;

pub use manage_config::ConfigService;
pub use notify::{LogNotifier, Notifier, RecordingNotifier, TerminalNotifier};
pub use session::SessionService;
pub use store::EntryStore;
