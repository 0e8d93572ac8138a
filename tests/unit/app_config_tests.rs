/*!
 * Tests for application configuration
 */

use anyhow::Result;
use std::path::PathBuf;
use linguaflix::app_config::{Config, LogLevel, ShowSubtitle};
use linguaflix::errors::ConfigError;
use crate::common;

#[test]
fn test_default_shouldUseDocumentedValues() {
    let config = Config::default();
    assert!(config.cache.enabled);
    assert_eq!(config.cache.ttl_secs, 86_400);
    assert_eq!(config.cache.check_period_secs, 120);
    assert_eq!(config.subtitles.base_dir, PathBuf::from("subtitles"));
    assert!(config.subtitles.shows.is_empty());
    assert_eq!(config.analysis.parallel_threshold, 64);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_withValidFile_shouldParseShows() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{
            "cache": {"enabled": false},
            "subtitles": {
                "base_dir": "/srv/subs",
                "shows": [{"show": "friends", "language": "English", "path": "friends.srt"}]
            },
            "log_level": "debug"
        }"#,
    )?;

    let config = Config::load(&path)?;
    assert!(!config.cache.enabled);
    assert_eq!(config.cache.ttl_secs, 86_400);
    assert_eq!(config.subtitles.base_dir, PathBuf::from("/srv/subs"));
    assert_eq!(config.subtitles.shows[0].show, "friends");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
    Ok(())
}

#[test]
fn test_load_withMissingFile_shouldReturnReadError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let result = Config::load(temp_dir.path().join("absent.json"));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
    Ok(())
}

#[test]
fn test_load_withMalformedJson_shouldReturnParseError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;
    assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    Ok(())
}

#[test]
fn test_load_withZeroCheckPeriod_shouldReturnInvalidError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", r#"{"cache": {"check_period_secs": 0}}"#)?;
    assert!(matches!(Config::load(&path), Err(ConfigError::Invalid(_))));
    Ok(())
}

#[test]
fn test_save_thenLoad_shouldKeepShows() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.subtitles.shows.push(ShowSubtitle {
        show: "dark".to_string(),
        language: "de".to_string(),
        path: PathBuf::from("dark/s01e01.srt"),
    });
    config.save(&path)?;

    let loaded = Config::load(&path)?;
    assert_eq!(loaded.subtitles, config.subtitles);
    Ok(())
}

#[test]
fn test_validate_withSameShowInTwoLanguages_shouldPass() {
    let mut config = Config::default();
    config.subtitles.shows = vec![
        ShowSubtitle { show: "dark".into(), language: "de".into(), path: "dark.de.srt".into() },
        ShowSubtitle { show: "dark".into(), language: "en".into(), path: "dark.en.srt".into() },
    ];
    assert!(config.validate().is_ok());
}
