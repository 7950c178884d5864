//! Error types for pksite-core
//!
//! The header component itself cannot fail: every state transition is total.
//! Errors only come from the edges (config files, textual input from the CLI
//! or query strings).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pksite operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Config Errors
    // ===================
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML in {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    // ===================
    // Input Errors
    // ===================
    #[error("Unknown menu group: '{value}' (expected services, knowledge or quicklinks)")]
    UnknownGroup { value: String },

    #[error("Unknown header action: '{value}'")]
    UnknownAction { value: String },
}

impl CoreError {
    /// Actionable hint for the user, when there is an obvious one
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CoreError::ConfigRead { path, .. } => Some(format!(
                "Check the path or unset PKSITE_CONFIG: ls {}",
                path.display()
            )),
            CoreError::ConfigParse { .. } => {
                Some("Validate TOML syntax, every key belongs under [brand], [contact] or [server]".to_string())
            }
            CoreError::UnknownAction { .. } => Some(
                "Use one of: menu, enter:<group>, leave:<group>, accordion:<group>".to_string(),
            ),
            _ => None,
        }
    }

    /// True for errors caused by bad user input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CoreError::UnknownGroup { .. } | CoreError::UnknownAction { .. }
        )
    }
}
