//! User notification capability
//!
//! The store and session service report outcomes here without knowing how
//! they reach the user.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error, info};

pub trait Notifier {
    fn success(&self, message: &str);
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Sends every notification to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!(kind = "success", "{}", message);
    }

    fn info(&self, message: &str) {
        info!(kind = "info", "{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}

/// Prints success and info lines to stdout. Failures are only logged at debug
/// level because the caller prints the returned error itself.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotifier {
    enabled: bool,
}

impl TerminalNotifier {
    pub fn new(enabled: bool) -> Self {
        TerminalNotifier { enabled }
    }
}

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        if self.enabled {
            println!("✓ {}", message);
        }
    }

    fn info(&self, message: &str) {
        if self.enabled {
            println!("{}", message);
        }
    }

    fn error(&self, message: &str) {
        debug!(kind = "error", "{}", message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Keeps every notification; clones share the same list
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn messages(&self, kind: NoticeKind) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message.clone())
            .collect()
    }

    fn push(&self, kind: NoticeKind, message: &str) {
        self.notices.borrow_mut().push(Notice {
            kind,
            message: message.to_string(),
        });
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.push(NoticeKind::Success, message);
    }

    fn info(&self, message: &str) {
        self.push(NoticeKind::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(NoticeKind::Error, message);
    }
}
