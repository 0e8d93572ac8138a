use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// Subtitle catalogs name languages loosely ("en", "eng", "en-US",
/// "English"). These helpers reduce such values to the ISO 639-1
/// (2-letter) code used in show keys.
/// Map an ISO 639-2/B code to its ISO 639-2/T form
fn part2b_to_part2t(code: &str) -> &str {
    match code {
        "fre" => "fra",
        "ger" => "deu",
        "dut" => "nld",
        "gre" => "ell",
        "chi" => "zho",
        "cze" => "ces",
        "ice" => "isl",
        "alb" => "sqi",
        "arm" => "hye",
        "baq" => "eus",
        "bur" => "mya",
        "per" => "fas",
        "geo" => "kat",
        "may" => "msa",
        "mac" => "mkd",
        "rum" => "ron",
        "slo" => "slk",
        "wel" => "cym",
        other => other,
    }
}

/// Resolve a code, regional tag or English language name to a language
pub fn parse_language(value: &str) -> Option<Language> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Regional tags like "en-US" or "pt_BR" carry the language first
    let primary = trimmed
        .split(['-', '_'])
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match primary.len() {
        2 => {
            if let Some(lang) = Language::from_639_1(&primary) {
                return Some(lang);
            }
        }
        3 => {
            if let Some(lang) = Language::from_639_3(part2b_to_part2t(&primary)) {
                return Some(lang);
            }
        }
        _ => {}
    }

    // English names are stored capitalized ("English", "French")
    let mut chars = trimmed.chars();
    let title_case = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect::<String>(),
        None => return None,
    };
    Language::from_name(&title_case)
}

/// Normalize a language to its ISO 639-1 (2-letter) code
pub fn normalize_to_part1(value: &str) -> Result<String> {
    let lang = parse_language(value)
        .ok_or_else(|| anyhow!("Unknown language: {}", value))?;

    lang.to_639_1()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Language has no 2-letter code: {}", value))
}

/// Normalize a language to its 2-letter code, falling back to the first two
/// characters lowercased when it is not recognized
pub fn normalize_to_part1_or_fallback(value: &str) -> String {
    match normalize_to_part1(value) {
        Ok(code) => code,
        Err(_) => value.trim().chars().take(2).collect::<String>().to_lowercase(),
    }
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let lang = parse_language(code)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))?;

    Ok(lang.to_name().to_string())
}
