//! Views derived from the entry list
//!
//! Everything here is a pure function over a slice of entries and is
//! recomputed on each call. Entries are matched to days by their calendar
//! date in the local time zone. When several entries fall on one day the
//! latest timestamp wins.

use crate::domain::entry::MoodEntry;
use crate::error::{EmotiqError, Result};
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Mood score reported for a day with no entry
pub const NO_DATA: u8 = 0;

/// Number of points in the weekly series
pub const WEEK_DAYS: usize = 7;

/// One point of the weekly trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMood {
    pub date: NaiveDate,
    /// `NO_DATA` when nothing was recorded that day
    pub mood_score: u8,
}

impl DayMood {
    pub fn has_data(&self) -> bool {
        self.mood_score != NO_DATA
    }
}

/// One cell of the monthly heatmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub mood_score: u8,
    pub entry: Option<MoodEntry>,
}

/// Most recent entry recorded on `date`
pub fn latest_on(entries: &[MoodEntry], date: NaiveDate) -> Option<&MoodEntry> {
    entries
        .iter()
        .filter(|e| e.local_date() == date)
        .fold(None, |best: Option<&MoodEntry>, e| match best {
            Some(b) if b.timestamp >= e.timestamp => Some(b),
            _ => Some(e),
        })
}

/// Seven points from six days before `today` through `today`
pub fn weekly_series(entries: &[MoodEntry], today: NaiveDate) -> Vec<DayMood> {
    (0..WEEK_DAYS as i64)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            DayMood {
                date,
                mood_score: latest_on(entries, date)
                    .map(|e| e.mood_score)
                    .unwrap_or(NO_DATA),
            }
        })
        .collect()
}

/// One cell per day of the month containing `reference`
pub fn monthly_calendar(entries: &[MoodEntry], reference: NaiveDate) -> Vec<CalendarDay> {
    let first = reference.with_day(1).unwrap_or(reference);

    first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .map(|date| {
            let entry = latest_on(entries, date).cloned();
            CalendarDay {
                date,
                mood_score: entry.as_ref().map(|e| e.mood_score).unwrap_or(NO_DATA),
                entry,
            }
        })
        .collect()
}

/// Distinct emotion tags in lexicographic order
pub fn emotion_index(entries: &[MoodEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|e| e.emotions.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Emotion criterion of the history filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmotionFilter {
    #[default]
    All,
    Tag(String),
}

impl EmotionFilter {
    /// "all" matches everything, any other text is an exact tag
    pub fn parse(tag: &str) -> Self {
        if tag == "all" {
            EmotionFilter::All
        } else {
            EmotionFilter::Tag(tag.to_string())
        }
    }

    pub fn matches(&self, entry: &MoodEntry) -> bool {
        match self {
            EmotionFilter::All => true,
            EmotionFilter::Tag(tag) => entry.has_emotion(tag),
        }
    }
}

/// Date criterion of the history filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    All,
    /// Last seven days
    Week,
    /// Last calendar month
    Month,
}

impl DateRange {
    /// Earliest timestamp kept, or `None` when unbounded
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            DateRange::All => None,
            DateRange::Week => Some(now - Duration::days(7)),
            DateRange::Month => Some(
                now.checked_sub_months(Months::new(1))
                    .unwrap_or(now - Duration::days(31)),
            ),
        }
    }
}

impl FromStr for DateRange {
    type Err = EmotiqError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "all" => Ok(DateRange::All),
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            _ => Err(EmotiqError::Validation(format!(
                "Invalid date range: '{}'. Must be one of: all, week, month",
                s
            ))),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DateRange::All => "all",
            DateRange::Week => "week",
            DateRange::Month => "month",
        };
        f.write_str(label)
    }
}

/// Entries matching both criteria, order preserved
pub fn filter_entries(
    entries: &[MoodEntry],
    emotion: &EmotionFilter,
    range: DateRange,
    now: DateTime<Utc>,
) -> Vec<MoodEntry> {
    let cutoff = range.cutoff(now);

    entries
        .iter()
        .filter(|e| emotion.matches(e))
        .filter(|e| cutoff.map_or(true, |c| e.timestamp >= c))
        .cloned()
        .collect()
}
