//! Journal entry being composed

use crate::domain::entry::{validate_score, NewEntry};
use crate::domain::sentiment::{preview_tone, Tone};
use crate::error::{EmotiqError, Result};

/// Mood preselected when no hint is given
pub const DEFAULT_DRAFT_MOOD: u8 = 3;

/// Mutable state of the composition view before it is saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalDraft {
    mood: u8,
    text: String,
    emotions: Vec<String>,
    context: Vec<String>,
}

impl JournalDraft {
    /// Start a draft, optionally seeded with a mood picked elsewhere
    pub fn new(initial_mood: Option<u8>) -> Self {
        let mood = initial_mood
            .and_then(|m| validate_score(m as i64).ok())
            .unwrap_or(DEFAULT_DRAFT_MOOD);

        JournalDraft {
            mood,
            text: String::new(),
            emotions: Vec::new(),
            context: Vec::new(),
        }
    }

    pub fn mood(&self) -> u8 {
        self.mood
    }

    pub fn emotions(&self) -> &[String] {
        &self.emotions
    }

    pub fn context(&self) -> &[String] {
        &self.context
    }

    pub fn set_mood(&mut self, mood: i64) -> Result<()> {
        self.mood = validate_score(mood)?;
        Ok(())
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Add the emotion if missing, otherwise remove it
    pub fn toggle_emotion(&mut self, emotion: &str) {
        toggle(&mut self.emotions, emotion);
    }

    /// Add the context tag if missing, otherwise remove it
    pub fn toggle_context(&mut self, context: &str) {
        toggle(&mut self.context, context);
    }

    /// Add the emotion unless it is already selected
    pub fn add_emotion(&mut self, emotion: &str) {
        add(&mut self.emotions, emotion);
    }

    /// Add the context tag unless it is already selected
    pub fn add_context(&mut self, context: &str) {
        add(&mut self.context, context);
    }

    /// Live tone hint for the current text
    pub fn tone(&self) -> Option<Tone> {
        preview_tone(&self.text)
    }

    /// Finish the draft. Blank text is rejected.
    pub fn into_entry(self) -> Result<NewEntry> {
        if self.text.trim().is_empty() {
            return Err(EmotiqError::Validation(
                "Please write something in your journal".to_string(),
            ));
        }

        Ok(NewEntry {
            mood_score: self.mood as i64,
            journal_text: self.text,
            emotions: self.emotions,
            context: self.context,
        })
    }
}

impl Default for JournalDraft {
    fn default() -> Self {
        JournalDraft::new(None)
    }
}

fn toggle(tags: &mut Vec<String>, tag: &str) {
    if let Some(pos) = tags.iter().position(|t| t == tag) {
        tags.remove(pos);
    } else {
        tags.push(tag.to_string());
    }
}

fn add(tags: &mut Vec<String>, tag: &str) {
    if !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}
