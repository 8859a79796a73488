/*!
 * Tests for the supported-language set and validation
 */

use babelbot::languages::{SUPPORTED_LANGUAGES, get_language_name, is_supported, validate_lang};

/// The set is a closed enumeration and must stay sorted for lookup
#[test]
fn test_supportedLanguages_shouldBeSortedAndNonEmpty() {
    assert!(!SUPPORTED_LANGUAGES.is_empty());

    let mut sorted = SUPPORTED_LANGUAGES.to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, SUPPORTED_LANGUAGES);
}

#[test]
fn test_supportedLanguages_shouldIncludeRegionalVariants() {
    assert!(SUPPORTED_LANGUAGES.contains(&"zh-cn"));
    assert!(SUPPORTED_LANGUAGES.contains(&"zh-tw"));
    assert!(SUPPORTED_LANGUAGES.contains(&"en"));
    assert!(SUPPORTED_LANGUAGES.contains(&"fr"));
}

#[test]
fn test_isSupported_withValidCodes_shouldReturnTrue() {
    assert!(is_supported("en"));
    assert!(is_supported("zh-cn"));
    assert!(is_supported("ceb"));

    // Case and whitespace insensitivity
    assert!(is_supported("EN"));
    assert!(is_supported(" fr "));
    assert!(is_supported("ZH-CN"));
}

#[test]
fn test_isSupported_withInvalidCodes_shouldReturnFalse() {
    assert!(!is_supported("xx"));
    assert!(!is_supported("klingon"));
    assert!(!is_supported(""));
    assert!(!is_supported("zh"));
}

#[test]
fn test_validateLang_shouldReturnNormalizedCode() {
    assert_eq!(validate_lang(" FR ").unwrap(), "fr");
    assert_eq!(validate_lang("zh-CN").unwrap(), "zh-cn");
}

#[test]
fn test_validateLang_withUnsupportedCode_shouldCarryOffendingCode() {
    let err = validate_lang("xx").unwrap_err();
    assert!(err.to_string().contains("`xx`"));
    assert!(err.to_string().contains("not a supported"));
}

#[test]
fn test_getLanguageName_withCommonCodes_shouldReturnEnglishName() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("fr").unwrap(), "French");
}

#[test]
fn test_getLanguageName_withRegionalVariants_shouldUseSpecialTable() {
    assert_eq!(get_language_name("zh-cn").unwrap(), "Chinese (Simplified)");
    assert_eq!(get_language_name("zh-tw").unwrap(), "Chinese (Traditional)");
    assert_eq!(get_language_name("jw").unwrap(), "Javanese");
}

#[test]
fn test_getLanguageName_withInvalidCode_shouldReturnError() {
    assert!(get_language_name("xyz-abc").is_err());
}

/// Every supported code must resolve to a display name - the listing command
/// relies on this
#[test]
fn test_getLanguageName_forEverySupportedCode_shouldResolve() {
    for code in SUPPORTED_LANGUAGES {
        assert!(
            get_language_name(code).is_ok(),
            "no display name for supported code {}",
            code
        );
    }
}
