/*!
 * Tests for part-of-speech tagging and sentence analysis
 */

use linguaflix::sentence::analyzer::{analyze, tag, terms, PartOfSpeech, COMPLEX_WORD_LENGTH};

fn tags(sentence: &str) -> Vec<PartOfSpeech> {
    tag(sentence).into_iter().map(|t| t.tag).collect()
}

#[test]
fn test_terms_withCurlyApostrophe_shouldSplitLikeStraightOne() {
    assert_eq!(terms("Don’t go."), vec!["Do", "n't", "go"]);
}

#[test]
fn test_tag_withLetsContraction_shouldTagMarkerAsPronoun() {
    let tagged = tag("Let's go.");
    assert_eq!(tagged.len(), 3);
    assert_eq!(tagged[0].normal, "let");
    assert_eq!(tagged[1].tag, PartOfSpeech::Pronoun);
}

#[test]
fn test_tag_withDigits_shouldTagNumber() {
    assert_eq!(tag("I have 3 dogs.")[2].tag, PartOfSpeech::Number);
}

#[test]
fn test_tag_withNounVerbAtSentenceStart_shouldUseFollowingVerb() {
    assert_eq!(tags("Love is strange."), vec![PartOfSpeech::Noun, PartOfSpeech::Verb, PartOfSpeech::Adjective]);
}

#[test]
fn test_analyze_withPronouns_shouldCountThemAsNouns() {
    let analyzed = analyze("I love you.");
    assert_eq!(analyzed.nouns, vec!["I", "you"]);
    assert_eq!(analyzed.verbs, vec!["love"]);
    assert!(analyzed.modifiers.is_empty());
}

#[test]
fn test_analyze_withContraction_shouldCountTermsNotWords() {
    let sentence = "I don't think it's a good idea.";
    assert_eq!(sentence.split_whitespace().count(), 7);
    assert_eq!(analyze(sentence).term_count(), 9);
}

#[test]
fn test_complexWordCount_shouldIgnoreWordsAtTheLimit() {
    // "Really" and "garden" are exactly six characters
    let analyzed = analyze("Really, the garden looks amazing.");
    assert_eq!(COMPLEX_WORD_LENGTH, 6);
    assert_eq!(analyzed.complex_word_count(), 1);
}

#[test]
fn test_analyze_withEmptySentence_shouldReturnEmptyGroups() {
    let analyzed = analyze("...");
    assert_eq!(analyzed.term_count(), 0);
    assert!(analyzed.nouns.is_empty() && analyzed.verbs.is_empty());
}
