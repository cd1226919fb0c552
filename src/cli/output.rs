//! Output formatting utilities

use crate::domain::trends::{CalendarDay, DayMood};
use crate::domain::MoodEntry;
use chrono::{Datelike, Local};

const MOOD_EMOJIS: [&str; 5] = ["😢", "😔", "😐", "🙂", "😄"];

/// Emoji for a mood score, blank for the no-data sentinel
pub fn mood_emoji(score: u8) -> &'static str {
    match score {
        1..=5 => MOOD_EMOJIS[(score - 1) as usize],
        _ => " ",
    }
}

/// Format a single entry for display
pub fn format_entry(entry: &MoodEntry) -> String {
    let mut output = format!(
        "{}  {} {}/5  {}\n",
        entry
            .timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M"),
        mood_emoji(entry.mood_score),
        entry.mood_score,
        entry.sentiment
    );

    if !entry.journal_text.is_empty() {
        output.push_str(&format!("  {}\n", entry.journal_text));
    }
    if !entry.emotions.is_empty() {
        output.push_str(&format!("  Emotions: {}\n", entry.emotions.join(", ")));
    }
    if !entry.context.is_empty() {
        output.push_str(&format!("  Context: {}\n", entry.context.join(", ")));
    }
    output
}

/// Format a list of entries for display
pub fn format_entry_list(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per day with a bar as long as the score
pub fn format_weekly_series(series: &[DayMood]) -> String {
    let mut output = String::new();
    for point in series {
        let label = point.date.format("%a %Y-%m-%d");
        if point.has_data() {
            output.push_str(&format!(
                "{}  {:<5} {} {}\n",
                label,
                "█".repeat(point.mood_score as usize),
                point.mood_score,
                mood_emoji(point.mood_score)
            ));
        } else {
            output.push_str(&format!("{}  --    no entry\n", label));
        }
    }
    output
}

/// Month grid, Monday first. Each cell is `day:score`, `·` for no entry.
pub fn format_calendar(days: &[CalendarDay]) -> String {
    let Some(first) = days.first() else {
        return String::new();
    };

    let mut output = format!("{}\n", first.date.format("%B %Y"));
    output.push_str(" Mo   Tu   We   Th   Fr   Sa   Su\n");

    let offset = first.date.weekday().num_days_from_monday() as usize;
    let mut cells: Vec<String> = vec!["    ".to_string(); offset];
    cells.extend(days.iter().map(|day| {
        let mark = if day.mood_score == 0 {
            "·".to_string()
        } else {
            day.mood_score.to_string()
        };
        format!("{:>2}:{}", day.date.day(), mark)
    }));

    for week in cells.chunks(7) {
        output.push_str(week.join(" ").trim_end());
        output.push('\n');
    }
    output
}

/// Format the emotion index for display
pub fn format_emotion_list(emotions: &[String]) -> String {
    if emotions.is_empty() {
        return "No emotions recorded".to_string();
    }

    let mut output = String::new();
    for emotion in emotions {
        output.push_str(emotion);
        output.push('\n');
    }
    output
}
