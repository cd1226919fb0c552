//! Entry store
//!
//! Owns the newest-first list of mood entries and keeps it mirrored to an
//! [`EntryStorage`]. All mutation goes through [`EntryStore::append`]; a
//! failed write leaves the in-memory list untouched.

use crate::application::notify::{LogNotifier, Notifier};
use crate::domain::seed::demo_entries;
use crate::domain::trends::{self, CalendarDay, DateRange, DayMood, EmotionFilter};
use crate::domain::{MoodEntry, NewEntry};
use crate::error::Result;
use crate::infrastructure::EntryStorage;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, error, info};

/// Text recorded for a one-tap check-in
pub const QUICK_CHECK_IN_TEXT: &str = "Quick mood check-in";
/// Context tag recorded for a one-tap check-in
pub const QUICK_CHECK_IN_CONTEXT: &str = "Quick Check";

/// Handle returned by [`EntryStore::on_change`]
pub type ListenerId = usize;

type Listener = Box<dyn FnMut(&[MoodEntry])>;

pub struct EntryStore<S: EntryStorage> {
    storage: S,
    notifier: Box<dyn Notifier>,
    entries: Vec<MoodEntry>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: ListenerId,
    seed_demo: bool,
}

impl<S: EntryStorage> EntryStore<S> {
    /// Create an empty store. Call [`initialize`](Self::initialize) before use.
    pub fn new(storage: S) -> Self {
        EntryStore {
            storage,
            notifier: Box::new(LogNotifier),
            entries: Vec::new(),
            listeners: Vec::new(),
            next_listener: 0,
            seed_demo: true,
        }
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Whether an empty storage gets the demonstration entries
    pub fn with_seed_demo(mut self, seed_demo: bool) -> Self {
        self.seed_demo = seed_demo;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the stored list, seeding and persisting it if nothing is stored.
    pub fn initialize(&mut self) -> Result<&[MoodEntry]> {
        let loaded = match self.storage.load_entries() {
            Ok(loaded) => loaded,
            Err(e) => {
                error!(error = %e, "failed to load entries");
                self.notifier.error("Failed to load your mood data");
                self.entries.clear();
                return Err(e);
            }
        };

        let entries = match loaded {
            Some(entries) => entries,
            None => {
                let seed = if self.seed_demo {
                    demo_entries(Utc::now())
                } else {
                    Vec::new()
                };
                if let Err(e) = self.storage.save_entries(&seed) {
                    error!(error = %e, "failed to persist initial entries");
                    self.notifier.error("Failed to save your mood data");
                    return Err(e);
                }
                info!(count = seed.len(), "seeded entry storage");
                seed
            }
        };

        debug!(count = entries.len(), "store initialized");
        self.entries = entries;
        self.emit();
        Ok(&self.entries)
    }

    /// Validate, classify and persist a new entry at the front of the list.
    pub fn append(&mut self, input: NewEntry) -> Result<MoodEntry> {
        let entry = MoodEntry::create(input, Utc::now())?;

        let mut updated = Vec::with_capacity(self.entries.len() + 1);
        updated.push(entry.clone());
        updated.extend(self.entries.iter().cloned());

        if let Err(e) = self.storage.save_entries(&updated) {
            error!(error = %e, id = %entry.id, "failed to save entry");
            self.notifier.error("Failed to save your entry");
            return Err(e);
        }

        self.entries = updated;
        info!(id = %entry.id, mood = entry.mood_score, sentiment = %entry.sentiment, "entry added");
        self.notifier.success("Entry added successfully!");
        self.emit();
        Ok(entry)
    }

    /// Record a mood without journaling
    pub fn quick_check_in(&mut self, mood_score: i64) -> Result<MoodEntry> {
        self.append(
            NewEntry::new(mood_score, QUICK_CHECK_IN_TEXT).with_context([QUICK_CHECK_IN_CONTEXT]),
        )
    }

    /// Up to `count` newest entries
    pub fn recent_entries(&self, count: usize) -> &[MoodEntry] {
        &self.entries[..count.min(self.entries.len())]
    }

    pub fn all_entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn weekly_series(&self, today: NaiveDate) -> Vec<DayMood> {
        trends::weekly_series(&self.entries, today)
    }

    pub fn monthly_calendar(&self, reference: NaiveDate) -> Vec<CalendarDay> {
        trends::monthly_calendar(&self.entries, reference)
    }

    pub fn emotion_index(&self) -> Vec<String> {
        trends::emotion_index(&self.entries)
    }

    pub fn filter(
        &self,
        emotion: &EmotionFilter,
        range: DateRange,
        now: DateTime<Utc>,
    ) -> Vec<MoodEntry> {
        trends::filter_entries(&self.entries, emotion, range, now)
    }

    /// Register a listener called with the full list after every change
    pub fn on_change(&mut self, listener: impl FnMut(&[MoodEntry]) + 'static) -> ListenerId {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the id was not registered
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn emit(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::notify::{NoticeKind, RecordingNotifier};
    use crate::domain::Sentiment;
    use crate::error::EmotiqError;
    use crate::infrastructure::MemoryStorage;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn empty_store() -> EntryStore<MemoryStorage> {
        let mut store = EntryStore::new(MemoryStorage::new()).with_seed_demo(false);
        store.initialize().unwrap();
        store
    }

    #[test]
    fn test_initialize_seeds_and_persists() {
        let mut store = EntryStore::new(MemoryStorage::new());
        let count = store.initialize().unwrap().len();

        assert_eq!(count, 7);
        assert_eq!(store.all_entries()[0].id, "entry-1");
        let persisted = store.storage().load_entries().unwrap().unwrap();
        assert_eq!(persisted, store.all_entries());
    }

    #[test]
    fn test_initialize_without_seed_persists_empty_list() {
        let store = empty_store();
        assert!(store.all_entries().is_empty());
        assert_eq!(store.storage().raw_entries().as_deref(), Some("[]"));
    }

    #[test]
    fn test_initialize_rejects_stored_scores_out_of_range() {
        let stamp = Utc::now().to_rfc3339();
        let raw = format!(
            r#"[
                {{"id":"a","timestamp":"{stamp}","moodScore":0,"journalText":"","emotions":[],"context":[],"sentiment":"Negative"}},
                {{"id":"b","timestamp":"{stamp}","moodScore":9,"journalText":"","emotions":[],"context":[],"sentiment":"Positive"}}
            ]"#
        );
        let notifier = RecordingNotifier::new();
        let mut store =
            EntryStore::new(MemoryStorage::with_raw_entries(raw)).with_notifier(notifier.clone());

        match store.initialize() {
            Err(EmotiqError::PersistenceRead(msg)) => assert!(msg.contains("mood score")),
            other => panic!("Expected PersistenceRead, got {:?}", other),
        }
        assert!(store.all_entries().is_empty());
        assert_eq!(notifier.messages(NoticeKind::Error).len(), 1);
    }

    #[test]
    fn test_initialize_reports_corrupt_data() {
        let notifier = RecordingNotifier::new();
        let mut store = EntryStore::new(MemoryStorage::with_raw_entries("[{oops"))
            .with_notifier(notifier.clone());

        assert!(matches!(
            store.initialize(),
            Err(EmotiqError::PersistenceRead(_))
        ));
        assert!(store.all_entries().is_empty());
        assert_eq!(
            notifier.messages(NoticeKind::Error),
            vec!["Failed to load your mood data".to_string()]
        );
        // stored text is left for the user to recover
        assert_eq!(store.storage().raw_entries().as_deref(), Some("[{oops"));
    }

    #[test]
    fn test_append_prepends_and_notifies() {
        let notifier = RecordingNotifier::new();
        let mut store = EntryStore::new(MemoryStorage::new()).with_notifier(notifier.clone());
        store.initialize().unwrap();

        let entry = store
            .append(
                NewEntry::new(5, "Great day")
                    .with_emotions(["Happy"])
                    .with_context(["Work"]),
            )
            .unwrap();

        assert_eq!(store.all_entries().len(), 8);
        assert_eq!(store.all_entries()[0], entry);
        assert_eq!(entry.sentiment, Sentiment::Positive);
        assert_eq!(
            notifier.messages(NoticeKind::Success),
            vec!["Entry added successfully!".to_string()]
        );
    }

    #[test]
    fn test_append_rejects_invalid_score_without_change() {
        let mut store = empty_store();
        store.append(NewEntry::new(3, "ok")).unwrap();
        let raw_before = store.storage().raw_entries();

        assert!(matches!(
            store.append(NewEntry::new(6, "too happy")),
            Err(EmotiqError::Validation(_))
        ));
        assert_eq!(store.all_entries().len(), 1);
        assert_eq!(store.storage().raw_entries(), raw_before);
    }

    #[test]
    fn test_failed_write_keeps_memory_unchanged() {
        let notifier = RecordingNotifier::new();
        let mut store = EntryStore::new(MemoryStorage::new())
            .with_seed_demo(false)
            .with_notifier(notifier.clone());
        store.initialize().unwrap();
        store.append(NewEntry::new(4, "first")).unwrap();

        store.storage().set_fail_writes(true);
        assert!(matches!(
            store.append(NewEntry::new(2, "second")),
            Err(EmotiqError::PersistenceWrite(_))
        ));

        assert_eq!(store.all_entries().len(), 1);
        assert_eq!(store.all_entries()[0].journal_text, "first");
        assert_eq!(
            notifier.messages(NoticeKind::Error),
            vec!["Failed to save your entry".to_string()]
        );
    }

    #[test]
    fn test_quick_check_in() {
        let mut store = empty_store();
        let entry = store.quick_check_in(2).unwrap();

        assert_eq!(entry.journal_text, QUICK_CHECK_IN_TEXT);
        assert!(entry.emotions.is_empty());
        assert_eq!(entry.context, vec![QUICK_CHECK_IN_CONTEXT.to_string()]);
        assert_eq!(entry.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_recent_entries_bounds() {
        let mut store = empty_store();
        assert!(store.recent_entries(3).is_empty());

        store.append(NewEntry::new(3, "a")).unwrap();
        store.append(NewEntry::new(3, "b")).unwrap();

        assert_eq!(store.recent_entries(0).len(), 0);
        assert_eq!(store.recent_entries(5).len(), 2);
        assert_eq!(store.recent_entries(1)[0].journal_text, "b");
    }

    #[test]
    fn test_listeners_receive_updates() {
        let mut store = EntryStore::new(MemoryStorage::new()).with_seed_demo(false);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let id = store.on_change(move |entries| sink.borrow_mut().push(entries.len()));

        store.initialize().unwrap();
        store.append(NewEntry::new(4, "one")).unwrap();
        assert!(store.append(NewEntry::new(0, "bad")).is_err());
        store.append(NewEntry::new(4, "two")).unwrap();
        assert_eq!(*seen.borrow(), vec![0, 1, 2]);

        assert!(store.remove_listener(id));
        assert!(!store.remove_listener(id));
        store.append(NewEntry::new(4, "three")).unwrap();
        assert_eq!(seen.borrow().len(), 3);
    }
}
