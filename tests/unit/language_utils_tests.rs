/*!
 * Tests for language code utilities
 */

use linguaflix::language_utils::{
    get_language_name, normalize_to_part1, normalize_to_part1_or_fallback, parse_language,
};

#[test]
fn test_normalizeToPart1_withBibliographicCode_shouldConvert() {
    assert_eq!(normalize_to_part1("fre").unwrap(), "fr");
    assert_eq!(normalize_to_part1("dut").unwrap(), "nl");
}

#[test]
fn test_normalizeToPart1_withRegionalTag_shouldUsePrimaryLanguage() {
    assert_eq!(normalize_to_part1("pt_BR").unwrap(), "pt");
    assert_eq!(normalize_to_part1("EN-gb").unwrap(), "en");
}

#[test]
fn test_normalizeToPart1_withUnknownValue_shouldFail() {
    assert!(normalize_to_part1("zz").is_err());
    assert!(normalize_to_part1("").is_err());
}

#[test]
fn test_normalizeToPart1OrFallback_withUnknownValue_shouldTakeTwoLetters() {
    assert_eq!(normalize_to_part1_or_fallback("Zzyzx"), "zz");
    assert_eq!(normalize_to_part1_or_fallback("eng"), "en");
}

#[test]
fn test_parseLanguage_withEnglishName_shouldIgnoreCase() {
    assert_eq!(parse_language("GERMAN"), parse_language("de"));
    assert!(parse_language("German").is_some());
}

#[test]
fn test_getLanguageName_shouldReturnEnglishName() {
    assert_eq!(get_language_name("fr").unwrap(), "French");
    assert!(get_language_name("zz").is_err());
}
