//! Isolated test environment with a temporary home directory.

#![allow(dead_code)]

use super::{JotCommand, TestNote};
use crate::common::DEFAULT_CONFIG;
use jot::domain::{OperationKind, TableName};
use jot::store::{NoteRepository, SqliteStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment whose temp directory stands in for `$HOME`.
///
/// The directory is removed on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    home: PathBuf,
}

impl TestEnv {
    /// Creates an environment with `DEFAULT_CONFIG` in place.
    pub fn new() -> Self {
        let env = Self::without_config();
        env.write_config(DEFAULT_CONFIG);
        env
    }

    /// Creates an environment with no config file.
    pub fn without_config() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let home = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            home,
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Returns `~/.config/jot` inside the temp home.
    pub fn jot_dir(&self) -> PathBuf {
        self.home.join(".config").join("jot")
    }

    pub fn config_path(&self) -> PathBuf {
        self.jot_dir().join("config.toml")
    }

    /// Returns the path where the notes database is stored by default.
    pub fn db_path(&self) -> PathBuf {
        self.jot_dir().join("jot.db")
    }

    /// Replaces the config file.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.config_path();
        std::fs::create_dir_all(self.jot_dir()).expect("Failed to create config dir");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Inserts a note into `table` directly and returns its row id.
    pub fn add_note(&self, table: &str, note: &TestNote) -> i64 {
        let table = TableName::new(table).expect("Invalid table name");
        let mut store = SqliteStore::open(&self.db_path()).expect("Failed to open store");
        store
            .ensure_table(&table, OperationKind::Write)
            .expect("Failed to create table");
        store
            .insert_note(&table, &note.to_new_note())
            .expect("Failed to insert note")
    }

    /// Creates a JotCommand running against this environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new().home(&self.home)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_writes_default_config() {
        let env = TestEnv::new();
        assert!(env.config_path().is_file());
        assert!(!env.db_path().exists(), "database is created lazily");
    }

    #[test]
    fn test_env_without_config() {
        let env = TestEnv::without_config();
        assert!(!env.config_path().exists());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.home().to_path_buf()
        };
        assert!(!path.exists(), "temp home should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_note_returns_increasing_ids() {
        let env = TestEnv::new();
        let first = env.add_note("jot", &TestNote::new("one"));
        let second = env.add_note("jot", &TestNote::new("two"));
        assert!(second > first);
        assert!(env.db_path().is_file());
    }
}
