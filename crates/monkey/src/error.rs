//! Process-level error handling for the `monkey` binary.
//!
//! The interpreter core has its own, narrower error channels: parse
//! errors accumulate as strings on the parser, runtime errors are
//! `Object::Error` values. Neither is widened into this enum — it only
//! covers failures that are specific to running the CLI/REPL shell
//! itself (bad flags, an unreadable config file, a script path that
//! doesn't exist).

use thiserror::Error;

/// Everything that can go wrong running the `monkey` binary outside of
/// the lex/parse/eval pipeline proper.
#[derive(Error, Debug)]
pub enum MonkeyCliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not read script {path}: {source}")]
    ScriptRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

pub type Result<T> = std::result::Result<T, MonkeyCliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = MonkeyCliError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn io_error_converts_via_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "nope");
        let cli_err: MonkeyCliError = io_err.into();
        assert!(matches!(cli_err, MonkeyCliError::Io(_)));
    }
}
