/*!
 * Sentence segmentation over a cleaned corpus.
 *
 * A single pass scanner splits on `.`, `!` and `?` followed by whitespace or
 * the end of the text. A period does not end a sentence when the token in
 * front of it looks like an abbreviation:
 *
 * - dotted forms such as `e.g.` or `U.S.`
 * - a single letter, which covers initials such as `J.`
 * - a capital followed by one lowercase letter (`Mr.`, `Dr.`, `St.`)
 * - an entry of the abbreviation exception set (`Mrs.`, `Sgt.`, `etc.`)
 *
 * Boundaries are heuristic. Lowercase text after a terminator still starts a
 * new sentence, which matches how merged subtitle lines are written.
 */

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Abbreviations that never end a sentence, compared lowercase without the dot
static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "mr", "mrs", "ms", "dr", "st", "jr", "sr", "vs", "etc", "prof", "capt", "lt", "sgt",
        "det", "col", "gen", "gov", "sen", "rep", "rev", "hon", "mt", "ave", "apt",
        "approx", "dept", "est", "inc", "ltd", "co", "corp",
    ]
    .into_iter()
    .collect()
});

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Closing characters that stay attached to the sentence they end
fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '’' | '”')
}

/// Whether the period at `dot` closes an abbreviation rather than a sentence
fn is_abbreviation_dot(chars: &[char], dot: usize) -> bool {
    let start = chars[..dot]
        .iter()
        .rposition(|c| c.is_whitespace())
        .map_or(0, |p| p + 1);
    let token: String = chars[start..dot]
        .iter()
        .skip_while(|c| !c.is_alphanumeric())
        .collect();

    if token.is_empty() {
        return false;
    }

    // Dotted abbreviation: e.g, U.S, a.m
    if token.contains('.') && token.chars().all(|c| c.is_alphabetic() || c == '.') {
        return true;
    }

    let letters: Vec<char> = token.chars().collect();
    match letters.as_slice() {
        [single] if single.is_alphabetic() => return true,
        [first, second] if first.is_uppercase() && second.is_lowercase() => return true,
        _ => {}
    }

    ABBREVIATIONS.contains(token.to_lowercase().as_str())
}

/// Split a corpus into ordered, non-empty candidate sentences
pub fn segment(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_terminator(chars[i]) {
            i += 1;
            continue;
        }

        let first_mark = i;
        // Consume the whole punctuation run ("?!", "...") and closing quotes
        while i < chars.len() && is_terminator(chars[i]) {
            i += 1;
        }
        while i < chars.len() && is_closer(chars[i]) {
            i += 1;
        }

        let at_boundary = i == chars.len() || chars[i].is_whitespace();
        let single_period = chars[first_mark] == '.' && (i - first_mark == 1 || !is_terminator(chars[first_mark + 1]));
        if !at_boundary || (single_period && is_abbreviation_dot(&chars, first_mark)) {
            continue;
        }

        push_sentence(&mut sentences, &chars[start..i]);
        start = i;
    }

    push_sentence(&mut sentences, &chars[start..]);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, span: &[char]) {
    let sentence: String = span.iter().collect();
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}
