//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "emotiq")]
#[command(about = "Mood journal for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Start empty instead of with demonstration entries
        #[arg(long)]
        no_demo: bool,
    },

    /// Write a journal entry
    Log {
        /// Mood from 1 (most negative) to 5 (most positive), default 3
        #[arg(short, long, allow_negative_numbers = true)]
        mood: Option<i64>,

        /// Journal text
        #[arg(short, long)]
        text: String,

        /// Emotion tag (repeatable)
        #[arg(short, long = "emotion")]
        emotions: Vec<String>,

        /// Context tag (repeatable)
        #[arg(short, long = "context")]
        context: Vec<String>,
    },

    /// Record a mood without journaling
    Quick {
        /// Mood from 1 to 5
        #[arg(allow_negative_numbers = true)]
        mood: i64,
    },

    /// Show the newest entries
    Recent {
        /// Number of entries (default: recent_count from config)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// List entries filtered by emotion and date range
    History {
        /// Emotion tag or "all"
        #[arg(short, long, default_value = "all")]
        emotion: String,

        /// Date range (all, week, month)
        #[arg(short, long, default_value = "all")]
        range: String,
    },

    /// Mood for each of the last seven days
    Week,

    /// Calendar of a month
    Month {
        /// Any date in the month, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List emotion tags in use
    Emotions,

    /// Show the tone hint for some text without saving it
    Preview {
        /// Text to analyse
        text: String,
    },

    /// Greeting, weekly trend and latest entries
    Dashboard,

    /// Create an account (mocked)
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign in (mocked, any non-empty credentials work)
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Update name and email of the signed-in user
    Profile {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
