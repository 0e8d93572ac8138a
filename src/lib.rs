/*!
 * # Linguaflix - Learner sentences from TV subtitles
 *
 * A Rust library that extracts practice sentences for language learners
 * from SRT subtitle files.
 *
 * ## Features
 *
 * - Stream SRT files and keep only the spoken text of each cue
 * - Strip subtitle artifacts (tags, sound cues, music, credits)
 * - Split the cleaned text into sentences, aware of abbreviations
 * - Tag parts of speech with a built-in English lexicon
 * - Filter sentences by learner proficiency tier
 * - Cache segmented corpora with time-to-live expiry
 * - Resolve shows and languages to subtitle files
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: SRT ingestion
 * - `sentence`: The sentence pipeline:
 *   - `sentence::cleaner`: Line cleaning
 *   - `sentence::segmenter`: Sentence boundary detection
 *   - `sentence::analyzer`: Part-of-speech tagging
 *   - `sentence::proficiency`: Tier thresholds and filtering
 *   - `sentence::cache`: Corpus caching
 *   - `sentence::service`: Request entry point
 * - `catalog`: Show and language lookup
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod catalog;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod sentence;
pub mod subtitle_processor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use catalog::ShowCatalog;
pub use errors::{AppError, ConfigError, SubtitleError};
pub use language_utils::{normalize_to_part1, get_language_name};
pub use sentence::{ProficiencyLevel, SentenceResult, SentenceService};
pub use subtitle_processor::SubtitleReader;
