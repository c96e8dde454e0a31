//! Fluent wrapper around assert_cmd::Command.

#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `memo` binary.
pub struct MemoCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl MemoCommand {
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    /// Sets the `--db` option.
    pub fn db(mut self, path: &Path) -> Self {
        self.args.push("--db".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Sets the `--user` option.
    pub fn user(self, id: i64) -> Self {
        self.args(["--user".to_string(), id.to_string()])
    }

    /// Sets an environment variable for the child process.
    pub fn env(mut self, key: &str, value: &Path) -> Self {
        self.envs
            .push((key.to_string(), value.to_string_lossy().to_string()));
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("memo").expect("Failed to find memo binary");
        cmd.env_remove("RUST_LOG");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    pub fn show(self, id: i64) -> Self {
        self.args(["show".to_string(), id.to_string()])
    }

    pub fn edit(self, id: i64) -> Self {
        self.args(["edit".to_string(), id.to_string()])
    }

    pub fn labels(self) -> Self {
        self.args(["labels"])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for MemoCommand {
    fn default() -> Self {
        Self::new()
    }
}
