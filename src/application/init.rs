//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemStorage};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new journal at the specified path.
///
/// Entries are not written here; the first store load seeds them according
/// to `seed_demo`.
pub fn init(path: &Path, seed_demo: bool) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let storage = FileSystemStorage::new(path.to_path_buf());
    storage.initialize()?;

    let config = Config {
        seed_demo,
        ..Config::default()
    };
    storage.save_config(&config)?;
    info!(root = %path.display(), "journal initialized");

    println!("Initialized emotiq journal at {}", path.display());
    if !seed_demo {
        println!("Starting with an empty journal");
    }

    Ok(())
}
