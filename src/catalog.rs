/*!
 * Show catalog: maps a show and language to a subtitle file.
 *
 * Shows are keyed as `<show>-<language>`, where the language is reduced
 * to its 2-letter code, so "Friends" in "English" resolves through the key
 * `friends-en`.
 */

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use log::debug;

use crate::app_config::SubtitleConfig;
use crate::file_utils::FileManager;
use crate::language_utils::normalize_to_part1_or_fallback;

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub show: String,
    pub language: String,
    pub path: PathBuf,
}

/// Registry of subtitle files by show key
#[derive(Debug, Clone, Default)]
pub struct ShowCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

/// Catalog key of a show in a language
pub fn show_key(show: &str, language: &str) -> String {
    format!("{}-{}", show.trim().to_lowercase(), normalize_to_part1_or_fallback(language))
}

impl ShowCatalog {
    /// Build the catalog from configuration, resolving paths against the base directory
    pub fn from_config(config: &SubtitleConfig) -> Self {
        let mut catalog = Self::default();
        for entry in &config.shows {
            let path = FileManager::resolve_path(&config.base_dir, &entry.path);
            catalog.insert(&entry.show, &entry.language, path);
        }
        debug!("Show catalog has {} entries", catalog.len());
        catalog
    }

    /// Register a subtitle file, replacing any entry with the same key
    pub fn insert<P: AsRef<Path>>(&mut self, show: &str, language: &str, path: P) {
        let entry = CatalogEntry {
            show: show.trim().to_lowercase(),
            language: normalize_to_part1_or_fallback(language),
            path: path.as_ref().to_path_buf(),
        };
        self.entries.insert(show_key(show, language), entry);
    }

    /// Subtitle file of a show in a language
    pub fn resolve(&self, show: &str, language: &str) -> Option<&Path> {
        self.entries
            .get(&show_key(show, language))
            .map(|entry| entry.path.as_path())
    }

    /// Entries in key order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
