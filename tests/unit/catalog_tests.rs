/*!
 * Tests for the show catalog
 */

use std::path::{Path, PathBuf};
use linguaflix::app_config::{ShowSubtitle, SubtitleConfig};
use linguaflix::catalog::{show_key, ShowCatalog};

#[test]
fn test_showKey_withUnknownLanguage_shouldFallBackToTwoLetters() {
    assert_eq!(show_key("The Office", "Zzyzx"), "the office-zz");
}

#[test]
fn test_insert_withSameKey_shouldReplacePath() {
    let mut catalog = ShowCatalog::default();
    catalog.insert("friends", "en", "old.srt");
    catalog.insert("Friends", "English", "new.srt");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.resolve("friends", "en"), Some(Path::new("new.srt")));
}

#[test]
fn test_entries_shouldBeOrderedByKey() {
    let mut catalog = ShowCatalog::default();
    catalog.insert("lost", "en", "lost.srt");
    catalog.insert("dark", "de", "dark.srt");
    let keys: Vec<&str> = catalog.entries().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["dark-de", "lost-en"]);
}

#[test]
fn test_fromConfig_withEmptyShows_shouldBeEmpty() {
    let catalog = ShowCatalog::from_config(&SubtitleConfig::default());
    assert!(catalog.is_empty());
    assert_eq!(catalog.resolve("friends", "en"), None);
}

#[test]
fn test_fromConfig_shouldStoreNormalizedLanguage() {
    let config = SubtitleConfig {
        base_dir: PathBuf::from("subs"),
        shows: vec![ShowSubtitle { show: "Dark".into(), language: "ger".into(), path: "dark.srt".into() }],
    };
    let catalog = ShowCatalog::from_config(&config);
    let (_, entry) = catalog.entries().next().unwrap();
    assert_eq!(entry.show, "dark");
    assert_eq!(entry.language, "de");
    assert_eq!(entry.path, PathBuf::from("subs/dark.srt"));
}
