//! Pattern directory resolution
//!
//! Patterns live in a per-user directory: `~/.config/gf` when that directory
//! already exists, otherwise `~/.gf`.

use crate::error::{StoreError, StoreResult};
use directories::BaseDirs;
use std::path::PathBuf;

/// Access to the invoking user's environment
///
/// Injectable so directory resolution can be tested against a scratch home
/// directory instead of the real user account.
pub trait Environment {
    /// The current user's home directory, if one can be determined
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Environment backed by the real user account
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn home_dir(&self) -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }
}

/// Resolve the directory where pattern JSON files are stored
///
/// Prefers `~/.config/gf` when it exists; falls back to `~/.gf` whether or
/// not that path exists yet.
pub fn pattern_dir(env: &dyn Environment) -> StoreResult<PathBuf> {
    let home = env.home_dir().ok_or(StoreError::UserLookup)?;

    let config_dir = home.join(".config").join("gf");
    if config_dir.is_dir() {
        return Ok(config_dir);
    }

    Ok(home.join(".gf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Environment with a fixed home directory
    struct FakeHome(PathBuf);

    impl Environment for FakeHome {
        fn home_dir(&self) -> Option<PathBuf> {
            Some(self.0.clone())
        }
    }

    /// Environment with no resolvable user
    struct NoHome;

    impl Environment for NoHome {
        fn home_dir(&self) -> Option<PathBuf> {
            None
        }
    }

    #[test]
    fn test_prefers_config_dir_when_present() {
        let home = TempDir::new().unwrap();
        let config_dir = home.path().join(".config").join("gf");
        fs::create_dir_all(&config_dir).unwrap();

        let dir = pattern_dir(&FakeHome(home.path().to_path_buf())).unwrap();
        assert_eq!(dir, config_dir);
    }

    #[test]
    fn test_falls_back_to_dot_gf() {
        let home = TempDir::new().unwrap();

        let dir = pattern_dir(&FakeHome(home.path().to_path_buf())).unwrap();
        assert_eq!(dir, home.path().join(".gf"));
    }

    #[test]
    fn test_fallback_does_not_require_existing_dir() {
        let home = TempDir::new().unwrap();

        let dir = pattern_dir(&FakeHome(home.path().to_path_buf())).unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_no_home_is_an_error() {
        let result = pattern_dir(&NoHome);
        assert!(matches!(result, Err(StoreError::UserLookup)));
    }
}
