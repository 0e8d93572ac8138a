/*!
 * Proficiency-based sentence filtering.
 *
 * Each tier has length bounds and a complex-word budget. A cheap
 * whitespace word count rejects sentences that cannot qualify before the
 * tagger runs; the tagger's term count is authoritative for survivors.
 * The two counts differ on contractions ("don't" is one word but two terms),
 * so a sentence near a bound can be rejected by the word count even though
 * its term count would pass.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use super::analyzer::{analyze, AnalyzedSentence};

/// Length and complexity bounds of one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProficiencyThreshold {
    pub min_length: Option<usize>,
    pub max_length: usize,
    pub max_complex_words: usize,
}

impl ProficiencyThreshold {
    fn length_in_bounds(&self, length: usize) -> bool {
        length >= self.min_length.unwrap_or(0) && length <= self.max_length
    }
}

/// Learner proficiency tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
}

impl ProficiencyLevel {
    /// Parse a tier name, case-insensitively; unknown names yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            _ => None,
        }
    }

    pub fn threshold(&self) -> ProficiencyThreshold {
        match self {
            Self::Beginner => ProficiencyThreshold {
                min_length: None,
                max_length: 8,
                max_complex_words: 2,
            },
            Self::Intermediate => ProficiencyThreshold {
                min_length: Some(9),
                max_length: 15,
                max_complex_words: 4,
            },
        }
    }

    /// Whitespace word count check run before tagging
    pub fn word_count_prefilter(&self, sentence: &str) -> bool {
        self.threshold().length_in_bounds(sentence.split_whitespace().count())
    }

    /// Full acceptance rule on an analyzed sentence
    pub fn accepts(&self, analyzed: &AnalyzedSentence) -> bool {
        let threshold = self.threshold();
        if !threshold.length_in_bounds(analyzed.term_count()) {
            return false;
        }
        if analyzed.complex_word_count() > threshold.max_complex_words {
            return false;
        }

        match self {
            Self::Beginner => {
                !analyzed.nouns.is_empty() && !analyzed.verbs.is_empty() && !analyzed.modifiers.is_empty()
            }
            // No part-of-speech requirement: only the length and complexity bounds bind
            Self::Intermediate => true,
        }
    }

    /// Pre-filter then analyze a single sentence
    pub fn qualifies(&self, sentence: &str) -> bool {
        self.word_count_prefilter(sentence) && self.accepts(&analyze(sentence))
    }
}

impl std::fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
        }
    }
}

/// Keep, in order, the sentences that qualify for `level`
pub fn filter_sentences<S: AsRef<str>>(sentences: &[S], level: ProficiencyLevel) -> Vec<String> {
    let accepted: Vec<String> = sentences
        .iter()
        .map(|sentence| sentence.as_ref())
        .filter(|sentence| level.qualifies(sentence))
        .map(str::to_string)
        .collect();

    debug!("{} of {} sentences qualify for {}", accepted.len(), sentences.len(), level);
    accepted
}

/// Filter by tier name; unknown tiers select nothing
pub fn filter_sentences_by_name<S: AsRef<str>>(sentences: &[S], level: &str) -> Vec<String> {
    match ProficiencyLevel::parse(level) {
        Some(level) => filter_sentences(sentences, level),
        None => {
            debug!("Unknown proficiency level '{}', no sentences selected", level);
            Vec::new()
        }
    }
}
