//! Demonstration data written to a fresh journal

use crate::domain::entry::MoodEntry;
use crate::domain::sentiment::Sentiment;
use chrono::{DateTime, Duration, Utc};

struct SeedRow {
    mood: u8,
    text: &'static str,
    emotions: &'static [&'static str],
    context: &'static [&'static str],
}

const SEED_ROWS: [SeedRow; 7] = [
    SeedRow {
        mood: 4,
        text: "Had a productive day at work. Completed a major project.",
        emotions: &["Satisfied", "Proud"],
        context: &["Work"],
    },
    SeedRow {
        mood: 2,
        text: "Feeling overwhelmed with my workload today.",
        emotions: &["Stressed", "Anxious"],
        context: &["Work"],
    },
    SeedRow {
        mood: 5,
        text: "Went hiking with friends. Perfect weather and views!",
        emotions: &["Happy", "Energetic"],
        context: &["Social", "Nature"],
    },
    SeedRow {
        mood: 3,
        text: "Just an ordinary day. Nothing special happened.",
        emotions: &["Neutral"],
        context: &["Routine"],
    },
    SeedRow {
        mood: 1,
        text: "Got into an argument with my roommate. Feeling upset.",
        emotions: &["Angry", "Sad"],
        context: &["Home", "Conflict"],
    },
    SeedRow {
        mood: 3,
        text: "Watched a new movie that was just okay.",
        emotions: &["Content"],
        context: &["Entertainment"],
    },
    SeedRow {
        mood: 4,
        text: "Had dinner with family. Nice to catch up with everyone.",
        emotions: &["Happy", "Grateful"],
        context: &["Family", "Social"],
    },
];

/// Seven sample entries, one per day from yesterday back a week, newest first
pub fn demo_entries(now: DateTime<Utc>) -> Vec<MoodEntry> {
    SEED_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let days_ago = i as i64 + 1;
            MoodEntry {
                id: format!("entry-{}", days_ago),
                timestamp: now - Duration::days(days_ago),
                mood_score: row.mood,
                journal_text: row.text.to_string(),
                emotions: row.emotions.iter().map(|s| s.to_string()).collect(),
                context: row.context.iter().map(|s| s.to_string()).collect(),
                sentiment: Sentiment::from_score(row.mood),
            }
        })
        .collect()
}
