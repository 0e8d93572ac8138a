/*!
 * Tests for error types
 */

use std::path::PathBuf;
use linguaflix::errors::{AppError, ConfigError, SubtitleError};

#[test]
fn test_subtitleError_decode_shouldNameFileAndLine() {
    let error = SubtitleError::Decode { path: PathBuf::from("a.srt"), line: 3 };
    let message = error.to_string();
    assert!(message.contains("a.srt"));
    assert!(message.contains("line 3"));
}

#[test]
fn test_subtitleError_io_shouldExposeSource() {
    let error = SubtitleError::Io {
        path: PathBuf::from("a.srt"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_appError_fromSubtitleError_shouldWrap() {
    let error: AppError = SubtitleError::Decode { path: PathBuf::from("a.srt"), line: 1 }.into();
    assert!(matches!(error, AppError::Subtitle(_)));
}

#[test]
fn test_appError_fromConfigError_shouldWrap() {
    let error: AppError = ConfigError::Invalid("bad".to_string()).into();
    assert!(matches!(error, AppError::Config(_)));
    assert!(error.to_string().contains("bad"));
}

#[test]
fn test_appError_showNotFound_shouldNameShowAndLanguage() {
    let error = AppError::ShowNotFound { show: "friends".to_string(), language: "de".to_string() };
    let message = error.to_string();
    assert!(message.contains("friends"));
    assert!(message.contains("'de'"));
}

#[test]
fn test_appError_fromAnyhow_shouldKeepMessage() {
    let error: AppError = anyhow::anyhow!("walk failed").into();
    assert!(matches!(error, AppError::Unknown(_)));
    assert!(error.to_string().contains("walk failed"));
}
