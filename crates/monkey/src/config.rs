//! REPL configuration.
//!
//! Nothing about the language itself is configurable. This covers REPL
//! ergonomics only: the prompt string, where line history is persisted,
//! and whether evaluation errors are echoed. Resolution order, narrowest
//! wins: CLI flags > config file > built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MonkeyCliError, Result};

/// Default configuration file name, resolved via `dirs`.
pub const CONFIG_FILE_NAME: &str = "monkey.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub repl: ReplConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,

    #[serde(default = "default_history_file")]
    pub history_file: String,

    #[serde(default = "default_true")]
    pub echo_errors: bool,
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_history_file() -> String {
    "~/.monkey_history".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config { repl: ReplConfig::default() }
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: default_prompt(),
            history_file: default_history_file(),
            echo_errors: default_true(),
        }
    }
}

impl Config {
    /// Loads from the first config file found in the standard search
    /// order, or the built-in defaults if none exists.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MonkeyCliError::Config(format!("Configuration file not found: {}", path.display())));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| MonkeyCliError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// The history file path with a leading `~` expanded to the user's
    /// home directory.
    pub fn history_path(&self) -> PathBuf {
        match self.repl.history_file.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)).unwrap_or_else(|| PathBuf::from(&self.repl.history_file)),
            None => PathBuf::from(&self.repl.history_file),
        }
    }

    fn find_config_file() -> Option<PathBuf> {
        let current = PathBuf::from(CONFIG_FILE_NAME);
        if current.exists() {
            return Some(current);
        }
        dirs::config_dir().map(|dir| dir.join("monkey").join(CONFIG_FILE_NAME)).filter(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_expected_prompt_and_history() {
        let config = Config::default();
        assert_eq!(config.repl.prompt, "> ");
        assert_eq!(config.repl.history_file, "~/.monkey_history");
        assert!(config.repl.echo_errors);
    }

    #[test]
    fn load_from_path_round_trips_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("monkey.toml");
        std::fs::write(&path, "[repl]\nprompt = \"monkey> \"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.repl.prompt, "monkey> ");
        // Fields not present in the file fall back to their defaults.
        assert_eq!(config.repl.history_file, "~/.monkey_history");
    }

    #[test]
    fn load_from_missing_path_is_an_error() {
        assert!(Config::load_from_path(Path::new("/nonexistent/monkey.toml")).is_err());
    }
}
