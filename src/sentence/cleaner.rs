/*!
 * Subtitle line cleaning.
 *
 * Strips annotations, markup and credit lines from raw cue texts and merges
 * lines that subtitle authors wrapped mid-sentence into one corpus string.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Bracketed annotations such as `[door slams]` or `[JOHN]`
static BRACKET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[[^\]\n]*\]").expect("Invalid bracket regex")
});

/// Markup tags such as `<i>` or `<font color="...">`
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>\n]*>").expect("Invalid tag regex")
});

/// Leading dialogue dashes on each physical line
static DIALOGUE_DASH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:-[ \t]+)+").expect("Invalid dialogue dash regex")
});

/// Physical lines holding nothing but a number
static NUMERIC_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*\d+[ \t]*$").expect("Invalid numeric line regex")
});

/// Inline timestamp ranges left over from malformed cues
static TIMESTAMP_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{1,2}:\d{2}:\d{2}[,.]\d{1,3}\s*-->\s*\d{1,2}:\d{2}:\d{2}[,.]\d{1,3}")
        .expect("Invalid timestamp range regex")
});

/// Song lyrics between music notes, then any stray note
static MUSIC_SPAN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[♪♫][^♪♫]*[♪♫]|[♪♫]").expect("Invalid music span regex")
});

/// "Previously on ..." recap marker
static PREVIOUSLY_ON_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^previously on").expect("Invalid recap regex")
});

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Invalid whitespace regex")
});

/// Credit and attribution phrases, matched case-insensitively anywhere in a line
const CREDIT_DENYLIST: &[&str] = &[
    "synced and corrected by",
    "for www.addic7ed.com",
];

/// One pass of every strip step, trimmed
fn strip_once(line: &str) -> String {
    let line = BRACKET_REGEX.replace_all(line, "");
    let line = TAG_REGEX.replace_all(&line, "");
    let line = DIALOGUE_DASH_REGEX.replace_all(&line, "");
    let line = NUMERIC_LINE_REGEX.replace_all(&line, "");
    let line = TIMESTAMP_RANGE_REGEX.replace_all(&line, "");
    let line = MUSIC_SPAN_REGEX.replace_all(&line, "");
    line.trim().to_string()
}

/// Strip noise from one raw line.
///
/// Removing one pattern can expose another (a dash behind a music span, a
/// cue number in front of a timestamp), so the steps repeat until the line
/// stops changing. Every pass only removes text, so the loop ends.
///
/// Returns `None` when nothing of the line should reach the corpus.
pub fn clean_line(raw: &str) -> Option<String> {
    let mut line = strip_once(raw);
    loop {
        let next = strip_once(&line);
        if next == line {
            break;
        }
        line = next;
    }

    if line.is_empty() || is_denied(&line) {
        return None;
    }

    Some(line)
}

fn is_denied(line: &str) -> bool {
    // Cue texts keep their physical line breaks
    let flat = normalize_whitespace(line);
    let lower = flat.to_lowercase();
    CREDIT_DENYLIST.iter().any(|phrase| lower.contains(phrase)) || PREVIOUSLY_ON_REGEX.is_match(&flat)
}

/// A line starting with a lowercase letter continues the previous one
fn is_continuation(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_lowercase())
}

/// Clean raw lines and merge them into a single space-normalized corpus.
///
/// Cleaning the returned corpus again yields the same corpus.
pub fn clean_lines<S: AsRef<str>>(raw_lines: &[S]) -> String {
    let mut corpus = merge_cleaned(raw_lines);

    // Merged fragments can form a new match, e.g. "[door" followed by "slams]"
    loop {
        let next = merge_cleaned(&[corpus.as_str()]);
        if next == corpus {
            return corpus;
        }
        corpus = next;
    }
}

fn merge_cleaned<S: AsRef<str>>(raw_lines: &[S]) -> String {
    let mut merged: Vec<String> = Vec::new();
    let mut dropped = 0;

    for raw in raw_lines {
        let Some(line) = clean_line(raw.as_ref()) else {
            dropped += 1;
            continue;
        };

        match merged.last_mut() {
            Some(previous) if is_continuation(&line) => {
                previous.push(' ');
                previous.push_str(&line);
            }
            _ => merged.push(line),
        }
    }

    // A recap or credit wrapped over several cues is only visible once merged
    let before_denylist = merged.len();
    merged.retain(|line| !is_denied(line));
    dropped += before_denylist - merged.len();

    debug!(
        "Cleaned {} raw lines into {} logical lines ({} dropped)",
        raw_lines.len(),
        merged.len(),
        dropped
    );

    normalize_whitespace(&merged.join(" "))
}

/// Collapse whitespace runs to a single space and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_string()
}
