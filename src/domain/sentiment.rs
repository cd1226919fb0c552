//! Sentiment classification
//!
//! Two separate heuristics live here. [`Sentiment::from_score`] is stored on
//! every entry when it is created. [`preview_tone`] only runs over text that
//! is still being written and is never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse three-way valence stored on each entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Classify a mood score: 4 and above is positive, 2 and below negative
    pub fn from_score(score: u8) -> Self {
        if score >= 4 {
            Sentiment::Positive
        } else if score <= 2 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        };
        f.write_str(label)
    }
}

const POSITIVE_WORDS: [&str; 7] = ["happy", "great", "good", "joy", "excited", "love", "wonderful"];
const NEGATIVE_WORDS: [&str; 7] = ["sad", "bad", "angry", "upset", "terrible", "hurt", "worried"];

/// Text must be longer than this before a tone is offered
pub const PREVIEW_MIN_CHARS: usize = 10;

/// Tone hint shown while composing a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Concerned,
    Reflective,
}

impl Tone {
    pub fn message(&self) -> &'static str {
        match self {
            Tone::Positive => "You sound positive 😊",
            Tone::Concerned => "You sound concerned 😔",
            Tone::Reflective => "You sound reflective 🤔",
        }
    }
}

/// Keyword heuristic over draft text.
///
/// Each word of the positive and negative lists counts once if it appears
/// anywhere in the lowercased text (substring match, so "goodbye" hits
/// "good"). Returns `None` for text of `PREVIEW_MIN_CHARS` characters or fewer.
pub fn preview_tone(text: &str) -> Option<Tone> {
    if text.chars().count() <= PREVIEW_MIN_CHARS {
        return None;
    }

    let lowered = text.to_lowercase();
    let positive = count_hits(&lowered, &POSITIVE_WORDS);
    let negative = count_hits(&lowered, &NEGATIVE_WORDS);

    let tone = if positive > negative {
        Tone::Positive
    } else if negative > positive {
        Tone::Concerned
    } else {
        Tone::Reflective
    };
    Some(tone)
}

fn count_hits(text: &str, words: &[&str]) -> usize {
    words.iter().filter(|word| text.contains(*word)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_classification_is_total() {
        assert_eq!(Sentiment::from_score(1), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(2), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(3), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(4), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(5), Sentiment::Positive);
    }

    #[test]
    fn test_sentiment_serializes_capitalized() {
        let json = serde_json::to_string(&Sentiment::Negative).unwrap();
        assert_eq!(json, "\"Negative\"");
    }

    #[test]
    fn test_preview_requires_minimum_length() {
        assert_eq!(preview_tone(""), None);
        assert_eq!(preview_tone("happy day"), None);
        // exactly ten characters is still too short
        assert_eq!(preview_tone("happy days"), None);
        assert_eq!(preview_tone("happy days!"), Some(Tone::Positive));
    }

    #[test]
    fn test_preview_positive_and_concerned() {
        assert_eq!(
            preview_tone("What a wonderful and great afternoon"),
            Some(Tone::Positive)
        );
        assert_eq!(
            preview_tone("I am WORRIED and upset about tomorrow"),
            Some(Tone::Concerned)
        );
    }

    #[test]
    fn test_preview_tie_is_reflective() {
        assert_eq!(
            preview_tone("Good news, bad timing really"),
            Some(Tone::Reflective)
        );
        assert_eq!(
            preview_tone("Went to the store this morning"),
            Some(Tone::Reflective)
        );
    }

    #[test]
    fn test_repeated_word_counts_once() {
        // two hits for "sad" still count once, so "happy" + "love" wins
        assert_eq!(
            preview_tone("sad sad sad but happy and in love"),
            Some(Tone::Positive)
        );
    }

    #[test]
    fn test_tone_messages() {
        assert!(Tone::Positive.message().contains("positive"));
        assert!(Tone::Concerned.message().contains("concerned"));
        assert!(Tone::Reflective.message().contains("reflective"));
    }
}
