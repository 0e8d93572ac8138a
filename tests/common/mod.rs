/*!
 * Common test utilities for the linguaflix test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Two cues: a sound cue on a capitalized line, then a lowercase continuation
pub const SCENARIO_SRT: &str = "1\n00:00:01,000 --> 00:00:03,000\n[sound] Hello there.\n\n2\n00:00:04,000 --> 00:00:06,000\nhow are you today?\n";

/// Routes library logs through the test harness; safe to call from every test
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Builds SRT content with one cue per text, one second apart
pub fn srt_content(cues: &[&str]) -> String {
    let mut content = String::new();
    for (index, text) in cues.iter().enumerate() {
        let second = index + 1;
        content.push_str(&format!(
            "{}\n00:00:{:02},000 --> 00:00:{:02},500\n{}\n\n",
            index + 1,
            second,
            second,
            text
        ));
    }
    content
}

/// Creates a subtitle file holding the given cue texts
pub fn create_test_subtitle(dir: &Path, filename: &str, cues: &[&str]) -> Result<PathBuf> {
    create_test_file(dir, filename, &srt_content(cues))
}
