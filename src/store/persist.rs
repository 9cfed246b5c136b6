//! Pattern file persistence
//!
//! Save, read, and enumerate pattern definition files. Each pattern is an
//! independent JSON file named `<name>.json`; files are never rewritten after
//! creation.

use crate::error::{StoreError, StoreResult};
use crate::store::dir::{pattern_dir, Environment};
use crate::store::types::Pattern;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Save a new pattern under the user's pattern directory
///
/// Fails if a pattern with the same name already exists. The pattern
/// directory is created on first save.
pub fn save_pattern(
    env: &dyn Environment,
    name: &str,
    flags: &str,
    pattern: &str,
) -> StoreResult<PathBuf> {
    let dir = pattern_dir(env)?;
    save_pattern_in(&dir, name, flags, pattern)
}

/// Save a new pattern inside a specific directory
pub fn save_pattern_in(
    dir: &Path,
    name: &str,
    flags: &str,
    pattern: &str,
) -> StoreResult<PathBuf> {
    if name.is_empty() {
        return Err(StoreError::EmptyName);
    }
    if pattern.is_empty() {
        return Err(StoreError::EmptyPattern);
    }

    let def = Pattern::new(flags, pattern);

    // First save may run before the directory exists
    fs::create_dir_all(dir)?;

    let path = dir.join(format!("{}.json", name));

    // Exclusive create: a concurrent save of the same name loses here
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                StoreError::AlreadyExists(name.to_string())
            } else {
                StoreError::Io(e)
            }
        })?;

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    def.serialize(&mut ser)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    buf.push(b'\n');

    file.write_all(&buf)?;

    Ok(path)
}

/// Read a pattern by name from the user's pattern directory
///
/// Returns the parsed definition together with the path it was read from.
pub fn read_pattern(env: &dyn Environment, name: &str) -> StoreResult<(Pattern, PathBuf)> {
    let dir = pattern_dir(env)?;
    read_pattern_in(&dir, name)
}

/// Read a pattern by name from a specific directory
pub fn read_pattern_in(dir: &Path, name: &str) -> StoreResult<(Pattern, PathBuf)> {
    let path = dir.join(format!("{}.json", name));

    let contents = fs::read_to_string(&path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound(name.to_string())
        } else {
            StoreError::Io(e)
        }
    })?;

    let def: Pattern = serde_json::from_str(&contents).map_err(|error| StoreError::Malformed {
        path: path.clone(),
        error,
    })?;

    Ok((def, path))
}

/// List the names of all saved patterns
///
/// Names come back in filesystem enumeration order, with the `.json` suffix
/// stripped. An empty or missing pattern directory yields an empty list.
pub fn list_patterns(env: &dyn Environment) -> StoreResult<Vec<String>> {
    let dir = pattern_dir(env)?;
    list_patterns_in(&dir)
}

/// List the names of all pattern files inside a specific directory
pub fn list_patterns_in(dir: &Path) -> StoreResult<Vec<String>> {
    let glob_pattern = dir.join("*.json");
    let entries = glob::glob(&glob_pattern.to_string_lossy())
        .map_err(|e| StoreError::Directory(e.to_string()))?;

    let mut names = Vec::new();
    for entry in entries.flatten() {
        if let Some(stem) = entry.file_stem() {
            names.push(stem.to_string_lossy().into_owned());
        }
    }

    Ok(names)
}
