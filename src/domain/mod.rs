//! Domain layer - Business logic and domain models

pub mod draft;
pub mod entry;
pub mod seed;
pub mod sentiment;
pub mod trends;
pub mod user;

pub use draft::JournalDraft;
pub use entry::{MoodEntry, NewEntry};
pub use sentiment::{preview_tone, Sentiment, Tone};
pub use trends::{CalendarDay, DateRange, DayMood, EmotionFilter};
pub use user::User;
