//! Mood entry records

use crate::domain::sentiment::Sentiment;
use crate::error::{EmotiqError, Result};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Lowest valid mood score (most negative)
pub const MIN_MOOD: u8 = 1;
/// Highest valid mood score (most positive)
pub const MAX_MOOD: u8 = 5;

/// One journaling event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_score")]
    pub mood_score: u8,
    pub journal_text: String,
    pub emotions: Vec<String>,
    pub context: Vec<String>,
    pub sentiment: Sentiment,
}

impl MoodEntry {
    /// Build an entry from validated input, classifying sentiment from the score
    pub fn create(input: NewEntry, timestamp: DateTime<Utc>) -> Result<Self> {
        let mood_score = validate_score(input.mood_score)?;

        Ok(MoodEntry {
            id: generate_entry_id(),
            timestamp,
            mood_score,
            journal_text: input.journal_text,
            emotions: input.emotions,
            context: input.context,
            sentiment: Sentiment::from_score(mood_score),
        })
    }

    /// Calendar date of this entry in the local time zone
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.with_timezone(&Local).date_naive()
    }

    pub fn has_emotion(&self, tag: &str) -> bool {
        self.emotions.iter().any(|e| e == tag)
    }
}

/// Input for appending a new entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewEntry {
    /// Kept wide so out-of-range input can be reported instead of truncated
    pub mood_score: i64,
    pub journal_text: String,
    pub emotions: Vec<String>,
    pub context: Vec<String>,
}

impl NewEntry {
    pub fn new(mood_score: i64, journal_text: impl Into<String>) -> Self {
        NewEntry {
            mood_score,
            journal_text: journal_text.into(),
            emotions: Vec::new(),
            context: Vec::new(),
        }
    }

    pub fn with_emotions<I, T>(mut self, emotions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.emotions = emotions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_context<I, T>(mut self, context: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.context = context.into_iter().map(Into::into).collect();
        self
    }
}

/// Check a mood score is within `MIN_MOOD..=MAX_MOOD`
pub fn validate_score(score: i64) -> Result<u8> {
    if score < MIN_MOOD as i64 || score > MAX_MOOD as i64 {
        return Err(EmotiqError::Validation(format!(
            "mood score {} is outside {}..={}",
            score, MIN_MOOD, MAX_MOOD
        )));
    }
    Ok(score as u8)
}

/// Stored scores obey the same range as new input
fn deserialize_score<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    validate_score(raw).map_err(serde::de::Error::custom)
}

fn generate_entry_id() -> String {
    format!("entry-{}", uuid::Uuid::new_v4())
}
