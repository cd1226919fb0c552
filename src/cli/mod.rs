//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_calendar, format_emotion_list, format_entry, format_entry_list, format_weekly_series,
};
