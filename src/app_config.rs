use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Corpus cache config
    #[serde(default)]
    pub cache: CacheConfig,

    /// Subtitle catalog config
    #[serde(default)]
    pub subtitles: SubtitleConfig,

    /// Sentence analysis config
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Corpus cache configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CacheConfig {
    /// Whether segmented corpora are cached
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Time-to-live of a cached corpus in seconds
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Interval of the expired-entry sweep in seconds
    #[serde(default = "default_check_period_secs")]
    pub check_period_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            ttl_secs: default_ttl_secs(),
            check_period_secs: default_check_period_secs(),
        }
    }
}

/// One subtitle file registered for a show and language
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ShowSubtitle {
    /// Show identifier (e.g., "friends")
    pub show: String,

    /// Subtitle language, as a code or name (e.g., "en", "English")
    pub language: String,

    /// Subtitle file path, relative to the base directory unless absolute
    pub path: PathBuf,
}

/// Subtitle catalog configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SubtitleConfig {
    /// Directory that relative subtitle paths resolve against
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Registered subtitle files
    #[serde(default)]
    pub shows: Vec<ShowSubtitle>,
}

impl Default for SubtitleConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            shows: Vec::new(),
        }
    }
}

/// Sentence analysis configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Candidate count above which analysis is spread over blocking workers
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_ttl_secs() -> u64 {
    86_400 // one day
}

fn default_check_period_secs() -> u64 {
    120
}

fn default_base_dir() -> PathBuf {
    PathBuf::from("subtitles")
}

fn default_parallel_threshold() -> usize {
    64
}

impl Config {
    /// Load configuration from a JSON file and validate it
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config: Config = serde_json::from_reader(BufReader::new(file)).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        std::fs::write(path, json).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::Invalid("cache.ttl_secs must be greater than zero".to_string()));
        }

        if self.cache.check_period_secs == 0 {
            return Err(ConfigError::Invalid("cache.check_period_secs must be greater than zero".to_string()));
        }

        let mut seen = HashSet::new();
        for entry in &self.subtitles.shows {
            if entry.show.trim().is_empty() {
                return Err(ConfigError::Invalid("subtitle entry with an empty show name".to_string()));
            }

            let language = crate::language_utils::normalize_to_part1_or_fallback(&entry.language);
            if !seen.insert((entry.show.to_lowercase(), language.clone())) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate subtitle entry for show '{}' in language '{}'",
                    entry.show, language
                )));
            }
        }

        Ok(())
    }
}
