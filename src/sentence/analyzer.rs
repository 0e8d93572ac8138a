/*!
 * Linguistic analysis of candidate sentences.
 *
 * Sentences are split into terms (whitespace tokens with edge punctuation
 * removed and contractions split, so "don't" yields "do" + "n't"), then each
 * term is tagged from the built-in lexicon. Words listed as both noun and
 * verb are resolved from the surrounding terms; unknown words fall back to
 * capitalization and suffix rules.
 */

use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::lexicon::{self, Lexeme};

/// A term longer than this many characters counts as a complex word
pub const COMPLEX_WORD_LENGTH: usize = 6;

/// Coarse part-of-speech classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Conjunction,
    Determiner,
    Preposition,
    QuestionWord,
    Interjection,
    Number,
}

/// One tagged term of a sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedTerm {
    /// Surface text of the term
    pub text: String,
    /// Lowercase form used for lookups
    pub normal: String,
    /// Assigned class
    pub tag: PartOfSpeech,
}

/// Derived view of a candidate sentence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzedSentence {
    /// All terms in order
    pub terms: Vec<String>,
    /// Nouns, pronouns included
    pub nouns: Vec<String>,
    /// Verbs, auxiliaries and modals included
    pub verbs: Vec<String>,
    /// Adjectives followed by adverbs
    pub modifiers: Vec<String>,
    pub conjunctions: Vec<String>,
}

impl AnalyzedSentence {
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Number of terms longer than [`COMPLEX_WORD_LENGTH`] characters
    pub fn complex_word_count(&self) -> usize {
        self.terms
            .iter()
            .filter(|term| term.chars().count() > COMPLEX_WORD_LENGTH)
            .count()
    }
}

/// Hosts whose "'s" is a contraction of "is"/"has" rather than a possessive
static CONTRACTED_S_HOSTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "it", "he", "she", "that", "what", "there", "here", "who", "where", "how", "when", "why",
        "this", "everything", "nothing", "something", "everyone", "someone", "nobody", "let",
    ]
    .into_iter()
    .collect()
});

static SUBJECT_PRONOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["i", "you", "we", "they", "he", "she", "it", "y'all", "who", "us'"]
        .into_iter()
        .collect()
});

/// Words ending in "ly" that are nouns
static LY_NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["assembly", "italy", "july", "supply", "belly", "jelly", "bully", "ally", "rally", "anomaly", "butterfly"]
        .into_iter()
        .collect()
});

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ship", "ism", "ist", "ance", "ence", "hood", "dom",
    "er", "or", "age", "ure",
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "less", "ish", "ic", "ical", "al", "ant", "ent",
];

/// Expectation carried from one term to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    /// Sentence start or after an interjection: imperative unless a verb follows
    Start,
    Verb,
    Noun,
    Any,
}

/// Split a sentence into term surface texts
pub fn terms(sentence: &str) -> Vec<String> {
    split_terms(sentence).into_iter().map(|(text, _)| text).collect()
}

/// Split into (surface, normal) pairs
fn split_terms(sentence: &str) -> Vec<(String, String)> {
    let mut result = Vec::new();

    for token in sentence.split_whitespace() {
        let surface = token
            .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '’')
            .replace('’', "'");
        let surface = surface.trim_start_matches('\'').trim_end_matches('\'');
        if !surface.chars().any(|c| c.is_alphanumeric()) {
            continue;
        }

        let lower = surface.to_lowercase();
        match split_contraction(&lower) {
            Some((host_len, second_normal)) if surface.is_char_boundary(host_len) && host_len > 0 => {
                let (host, rest) = surface.split_at(host_len);
                result.push((host.to_string(), lower[..host_len].to_string()));
                result.push((rest.to_string(), second_normal.to_string()));
            }
            _ => result.push((surface.to_string(), lower)),
        }
    }

    result
}

/// Returns the byte length of the host and the normal form of the clitic
fn split_contraction(lower: &str) -> Option<(usize, &'static str)> {
    match lower {
        "can't" => return Some((2, "n't")),
        "won't" => return Some((2, "n't")),
        "ain't" => return Some((2, "n't")),
        _ => {}
    }

    if lower.len() > 3 && lower.ends_with("n't") {
        return Some((lower.len() - 3, "n't"));
    }

    if let Some(host) = lower.strip_suffix("'s") {
        // "let's" gets a marker normal that reads as a subject pronoun
        return if host == "let" {
            Some((host.len(), "us'"))
        } else if CONTRACTED_S_HOSTS.contains(host) {
            Some((host.len(), "'s"))
        } else {
            None
        };
    }

    for clitic in ["'m", "'re", "'ll", "'ve", "'d"] {
        if let Some(host) = lower.strip_suffix(clitic) {
            if !host.is_empty() {
                return Some((host.len(), clitic));
            }
        }
    }

    None
}

fn is_numeric(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ':' | '%' | '$'))
}

/// Tag every term of a sentence
pub fn tag(sentence: &str) -> Vec<TaggedTerm> {
    let pieces = split_terms(sentence);
    let mut tagged = Vec::with_capacity(pieces.len());
    let mut expect = Expect::Start;

    for (index, (text, normal)) in pieces.iter().enumerate() {
        let tag = if is_numeric(normal) {
            PartOfSpeech::Number
        } else if normal == "us'" {
            PartOfSpeech::Pronoun
        } else {
            match lexicon::lookup(normal) {
                Some(Lexeme::Fixed(tag)) => tag,
                Some(Lexeme::NounOrVerb) => {
                    let next = pieces.get(index + 1).map(|(_, n)| n.as_str());
                    resolve_noun_or_verb(expect, next)
                }
                None => guess(text, normal, index),
            }
        };

        expect = next_expectation(expect, tag, normal);
        tagged.push(TaggedTerm {
            text: text.clone(),
            normal: normal.clone(),
            tag,
        });
    }

    tagged
}

fn resolve_noun_or_verb(expect: Expect, next: Option<&str>) -> PartOfSpeech {
    match expect {
        Expect::Verb => PartOfSpeech::Verb,
        Expect::Start => {
            // "Work is hard." vs "Call me."
            let next_is_verb = next
                .map(|n| matches!(lexicon::lookup(n), Some(Lexeme::Fixed(PartOfSpeech::Verb))))
                .unwrap_or(false);
            if next_is_verb { PartOfSpeech::Noun } else { PartOfSpeech::Verb }
        }
        Expect::Noun | Expect::Any => PartOfSpeech::Noun,
    }
}

fn next_expectation(current: Expect, tag: PartOfSpeech, normal: &str) -> Expect {
    if lexicon::is_verb_trigger(normal) || SUBJECT_PRONOUNS.contains(normal) {
        return Expect::Verb;
    }

    match tag {
        PartOfSpeech::Adverb => current,
        PartOfSpeech::Interjection => Expect::Start,
        PartOfSpeech::Determiner
        | PartOfSpeech::Adjective
        | PartOfSpeech::Number
        | PartOfSpeech::Preposition
        | PartOfSpeech::Verb => Expect::Noun,
        PartOfSpeech::Noun => Expect::Verb,
        PartOfSpeech::Pronoun
        | PartOfSpeech::Conjunction
        | PartOfSpeech::QuestionWord => Expect::Any,
    }
}

/// Classify a word missing from the lexicon
fn guess(text: &str, normal: &str, index: usize) -> PartOfSpeech {
    let capitalized = text.chars().next().is_some_and(|c| c.is_uppercase());
    if capitalized && index > 0 {
        return PartOfSpeech::Noun;
    }

    let length = normal.chars().count();
    if normal.ends_with("ly") && length > 4 {
        return if LY_NOUNS.contains(normal) { PartOfSpeech::Noun } else { PartOfSpeech::Adverb };
    }
    if (normal.ends_with("ing") && length > 4) || (normal.ends_with("ed") && length > 3) {
        return PartOfSpeech::Verb;
    }
    if NOUN_SUFFIXES.iter().any(|suffix| normal.ends_with(suffix)) {
        return PartOfSpeech::Noun;
    }
    if ADJECTIVE_SUFFIXES.iter().any(|suffix| normal.ends_with(suffix)) {
        return PartOfSpeech::Adjective;
    }

    PartOfSpeech::Noun
}

/// Analyze a candidate sentence into its term list and POS groups
pub fn analyze(sentence: &str) -> AnalyzedSentence {
    let tagged = tag(sentence);
    let mut analyzed = AnalyzedSentence::default();
    let mut adverbs = Vec::new();

    for term in tagged {
        match term.tag {
            PartOfSpeech::Noun | PartOfSpeech::Pronoun => analyzed.nouns.push(term.text.clone()),
            PartOfSpeech::Verb => analyzed.verbs.push(term.text.clone()),
            PartOfSpeech::Adjective => analyzed.modifiers.push(term.text.clone()),
            PartOfSpeech::Adverb => adverbs.push(term.text.clone()),
            PartOfSpeech::Conjunction => analyzed.conjunctions.push(term.text.clone()),
            _ => {}
        }
        analyzed.terms.push(term.text);
    }

    analyzed.modifiers.extend(adverbs);
    analyzed
}
