//! Persistence for entries and the session user

use crate::domain::{MoodEntry, User};
use crate::error::{EmotiqError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the data directory inside a journal root
pub const DATA_DIR: &str = ".emotiq";
/// File holding the full entry list, newest first
pub const ENTRIES_FILE: &str = "entries.json";
/// File holding the signed-in user
pub const USER_FILE: &str = "user.json";

/// Load/save contract for the entry list
///
/// Calls are synchronous and run to completion on the caller's thread. A
/// remote or async backend implements this trait by blocking on its own
/// runtime inside `load_entries`/`save_entries`, so `EntryStore` and its
/// callers stay unchanged.
pub trait EntryStorage {
    /// Load the stored list. `Ok(None)` means nothing has been stored yet.
    fn load_entries(&self) -> Result<Option<Vec<MoodEntry>>>;

    /// Replace the stored list with `entries` in one step
    fn save_entries(&self, entries: &[MoodEntry]) -> Result<()>;
}

/// Load/save contract for the session user
pub trait SessionStorage {
    fn load_user(&self) -> Result<Option<User>>;

    fn save_user(&self, user: &User) -> Result<()>;

    fn clear_user(&self) -> Result<()>;
}

/// Journal directory with a `.emotiq/` folder of JSON files
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    pub root: PathBuf,
}

impl FileSystemStorage {
    /// Create a new storage with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemStorage { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks EMOTIQ_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("EMOTIQ_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(FileSystemStorage::new(path));
            } else {
                return Err(EmotiqError::Config(format!(
                    "EMOTIQ_ROOT is set to '{}' but no .emotiq directory found. \
                    Run 'emotiq init' in that directory or unset EMOTIQ_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_data_dir(&current) {
                return Ok(FileSystemStorage::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(EmotiqError::NotEmotiqDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    /// Create the `.emotiq` directory. Fails if it already exists.
    pub fn initialize(&self) -> Result<()> {
        let data_dir = self.data_dir();

        if data_dir.exists() {
            return Err(EmotiqError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&data_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Read a data file, `Ok(None)` if it does not exist
    fn read_data_file(&self, name: &str) -> Result<Option<String>> {
        let path = self.data_dir().join(name);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(EmotiqError::PersistenceRead(format!(
                "{}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Best-effort atomic replace: write a temp file next to the target,
    /// then rename it into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_data_file_atomic(&self, name: &str, contents: &str) -> Result<()> {
        let path = self.data_dir().join(name);
        let tmp_path = path.with_file_name(format!("{}.emotiq-tmp-{}", name, std::process::id()));

        let write = || -> std::io::Result<()> {
            fs::write(&tmp_path, contents)?;
            if cfg!(windows) && path.exists() {
                fs::remove_file(&path)?;
            }
            fs::rename(&tmp_path, &path)
        };

        write().map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            warn!(path = %path.display(), error = %e, "write failed");
            EmotiqError::PersistenceWrite(format!("{}: {}", path.display(), e))
        })
    }
}

impl EntryStorage for FileSystemStorage {
    fn load_entries(&self) -> Result<Option<Vec<MoodEntry>>> {
        let Some(contents) = self.read_data_file(ENTRIES_FILE)? else {
            debug!(root = %self.root.display(), "no stored entries");
            return Ok(None);
        };

        let entries: Vec<MoodEntry> = serde_json::from_str(&contents)
            .map_err(|e| EmotiqError::PersistenceRead(format!("{}: {}", ENTRIES_FILE, e)))?;
        debug!(count = entries.len(), "loaded entries");
        Ok(Some(entries))
    }

    fn save_entries(&self, entries: &[MoodEntry]) -> Result<()> {
        let contents = serde_json::to_string_pretty(entries)?;
        self.write_data_file_atomic(ENTRIES_FILE, &contents)?;
        debug!(count = entries.len(), "saved entries");
        Ok(())
    }
}

impl SessionStorage for FileSystemStorage {
    fn load_user(&self) -> Result<Option<User>> {
        let Some(contents) = self.read_data_file(USER_FILE)? else {
            return Ok(None);
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| EmotiqError::PersistenceRead(format!("{}: {}", USER_FILE, e)))
    }

    fn save_user(&self, user: &User) -> Result<()> {
        let contents = serde_json::to_string_pretty(user)?;
        self.write_data_file_atomic(USER_FILE, &contents)
    }

    fn clear_user(&self) -> Result<()> {
        let path = self.data_dir().join(USER_FILE);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(EmotiqError::PersistenceWrite(format!(
                "{}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewEntry;
    use chrono::Utc;
    use tempfile::TempDir;

    fn initialized() -> (TempDir, FileSystemStorage) {
        let temp = TempDir::new().unwrap();
        let storage = FileSystemStorage::new(temp.path().to_path_buf());
        storage.initialize().unwrap();
        (temp, storage)
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (_temp, storage) = initialized();
        assert!(storage.is_initialized());
        assert!(storage.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let (temp, _storage) = initialized();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = FileSystemStorage::discover_from(&nested).unwrap();
        assert_eq!(found.root(), temp.path());
    }

    #[test]
    fn test_discover_from_uninitialized_fails() {
        let temp = TempDir::new().unwrap();
        match FileSystemStorage::discover_from(temp.path()) {
            Err(EmotiqError::NotEmotiqDirectory(_)) => {}
            other => panic!("Expected NotEmotiqDirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_entries_is_none() {
        let (_temp, storage) = initialized();
        assert!(storage.load_entries().unwrap().is_none());
    }

    #[test]
    fn test_entries_round_trip() {
        let (_temp, storage) = initialized();
        let entries = vec![
            MoodEntry::create(NewEntry::new(5, "Great day").with_emotions(["Happy"]), Utc::now())
                .unwrap(),
            MoodEntry::create(NewEntry::new(1, "Awful"), Utc::now()).unwrap(),
        ];

        storage.save_entries(&entries).unwrap();
        assert_eq!(storage.load_entries().unwrap(), Some(entries));

        // no temp files left behind
        let leftovers: Vec<_> = fs::read_dir(storage.data_dir())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("emotiq-tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_corrupt_entries_is_read_error() {
        let (_temp, storage) = initialized();
        fs::write(storage.data_dir().join(ENTRIES_FILE), "{not json").unwrap();

        match storage.load_entries() {
            Err(EmotiqError::PersistenceRead(msg)) => assert!(msg.contains(ENTRIES_FILE)),
            other => panic!("Expected PersistenceRead, got {:?}", other),
        }
    }

    #[test]
    fn test_stored_score_out_of_range_is_read_error() {
        let (_temp, storage) = initialized();
        let entry = MoodEntry::create(NewEntry::new(3, "ok"), Utc::now()).unwrap();
        let json = serde_json::to_string(&vec![entry])
            .unwrap()
            .replace("\"moodScore\":3", "\"moodScore\":0");
        fs::write(storage.data_dir().join(ENTRIES_FILE), json).unwrap();

        match storage.load_entries() {
            Err(EmotiqError::PersistenceRead(msg)) => assert!(msg.contains("mood score")),
            other => panic!("Expected PersistenceRead, got {:?}", other),
        }
    }

    #[test]
    fn test_write_into_missing_dir_is_write_error() {
        let temp = TempDir::new().unwrap();
        let storage = FileSystemStorage::new(temp.path().to_path_buf());

        match storage.save_entries(&[]) {
            Err(EmotiqError::PersistenceWrite(_)) => {}
            other => panic!("Expected PersistenceWrite, got {:?}", other),
        }
    }

    #[test]
    fn test_user_save_load_clear() {
        let (_temp, storage) = initialized();
        assert!(storage.load_user().unwrap().is_none());

        let user = User::new("user-1", "Demo User", "demo@example.com");
        storage.save_user(&user).unwrap();
        assert_eq!(storage.load_user().unwrap(), Some(user));

        storage.clear_user().unwrap();
        assert!(storage.load_user().unwrap().is_none());
        // clearing again is fine
        storage.clear_user().unwrap();
    }
}
