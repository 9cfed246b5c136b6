//! Common test utilities

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary home directory to act as the pattern store's root
pub fn temp_home() -> TempDir {
    TempDir::new().unwrap()
}

/// Write a raw pattern file into `<home>/.gf`
pub fn seed_pattern(home: &Path, name: &str, body: &str) -> PathBuf {
    let store = home.join(".gf");
    fs::create_dir_all(&store).unwrap();

    let path = store.join(format!("{}.json", name));
    fs::write(&path, body).unwrap();
    path
}
