//! Isolated test environment with temp directory.

use super::MemoCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary database and config home.
///
/// The directory is removed when the TestEnv is dropped.
pub struct TestEnv {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the database every command in this env uses.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("data").join("memo.db")
    }

    /// Returns the directory used as the config home.
    pub fn config_home(&self) -> PathBuf {
        self.root.join("config")
    }

    /// Writes `memo/config.toml` under the config home.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.config_home().join("memo");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Creates a MemoCommand bound to this env's database, config home and UTC.
    pub fn cmd(&self) -> MemoCommand {
        MemoCommand::new()
            .env("XDG_CONFIG_HOME", &self.config_home())
            .env("HOME", &self.root)
            .db(&self.db_path())
            .args(["--utc-offset", "+00:00"])
    }

    /// Adds a note as user 1 and returns its id.
    pub fn add_note(&self, content: &str, extra: &[&str]) -> i64 {
        let mut args = vec!["add", content, "--format", "json"];
        args.extend_from_slice(extra);
        let output: serde_json::Value = self.cmd().args(args).output_json();
        output["data"]["note"]["id"]
            .as_i64()
            .expect("created note should have an id")
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
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--db");
        assert_eq!(args[1], env.db_path().to_string_lossy());
    }
}
