/*!
 * Error types for the linguaflix library.
 *
 * This module contains custom error types for the different parts of the
 * sentence pipeline, using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a subtitle file
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// The file could not be opened or read
    #[error("Failed to read subtitle file {path:?}: {source}")]
    Io {
        /// Path of the subtitle file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid UTF-8 text
    #[error("Subtitle file {path:?} is not valid text (line {line})")]
    Decode {
        /// Path of the subtitle file
        path: PathBuf,
        /// 1-based line number where decoding failed
        line: usize,
    },
}

impl SubtitleError {
    /// Classify an I/O error raised while reading `path` at `line`
    pub(crate) fn from_read(path: &std::path::Path, line: usize, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::InvalidData {
            Self::Decode { path: path.to_path_buf(), line }
        } else {
            Self::Io { path: path.to_path_buf(), source: error }
        }
    }
}

/// Errors that can occur when loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config file {path:?}: {message}")]
    Read {
        /// Path of the config file
        path: PathBuf,
        /// Reason
        message: String,
    },

    /// The configuration file is not valid JSON for this schema
    #[error("Failed to parse config file {path:?}: {message}")]
    Parse {
        /// Path of the config file
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// A configuration value is out of range or inconsistent
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Error type of the command handlers, wrapping the library errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from subtitle ingestion
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// No subtitle file is registered for the show in that language
    #[error("No subtitles registered for show '{show}' in language '{language}'")]
    ShowNotFound {
        show: String,
        language: String,
    },

    /// A result could not be written as JSON
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
