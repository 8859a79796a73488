use anyhow::{Result, anyhow};
use isolang::Language;

use crate::errors::LanguageError;

/// Language utilities for the fixed supported-language set
///
/// This module owns the closed enumeration of language codes the bot accepts
/// (the translation service's ISO 639-1 set plus a few regional variants such
/// as `zh-cn`/`zh-tw`), and provides validation and display-name lookup.
/// Every validation point in the application goes through this one set.
/// The full set of supported language codes, sorted ascending.
///
/// The set is a static configuration constant; it is never derived at runtime.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "af", "am", "ar", "az", "be", "bg", "bn", "bs", "ca", "ceb",
    "co", "cs", "cy", "da", "de", "el", "en", "eo", "es", "et",
    "eu", "fa", "fi", "fr", "fy", "ga", "gd", "gl", "gu", "ha",
    "haw", "he", "hi", "hmn", "hr", "ht", "hu", "hy", "id", "ig",
    "is", "it", "ja", "jw", "ka", "kk", "km", "kn", "ko", "ku",
    "ky", "la", "lb", "lo", "lt", "lv", "mg", "mi", "mk", "ml",
    "mn", "mr", "ms", "mt", "my", "ne", "nl", "no", "ny", "or",
    "pa", "pl", "ps", "pt", "ro", "ru", "rw", "sd", "si", "sk",
    "sl", "sm", "sn", "so", "sq", "sr", "st", "su", "sv", "sw",
    "ta", "te", "tg", "th", "tk", "tl", "tr", "tt", "ug", "uk",
    "ur", "uz", "vi", "xh", "yi", "yo", "zh-cn", "zh-tw", "zu",
];

/// Normalize a user-supplied code for comparison (trim + lowercase)
pub fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Check if a language code is in the supported set (case-insensitive)
pub fn is_supported(code: &str) -> bool {
    let normalized = normalize_code(code);
    SUPPORTED_LANGUAGES.binary_search(&normalized.as_str()).is_ok()
}

/// Validate a language code against the supported set
///
/// Returns the normalized code on success so callers always store and compare
/// the canonical lowercase form.
pub fn validate_lang(code: &str) -> Result<String, LanguageError> {
    let normalized = normalize_code(code);
    if SUPPORTED_LANGUAGES.binary_search(&normalized.as_str()).is_ok() {
        Ok(normalized)
    } else {
        Err(LanguageError::Unsupported {
            code: code.trim().to_string(),
        })
    }
}

/// Get the English display name for a supported language code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_code(code);

    // Regional variants and legacy codes isolang cannot resolve directly
    let special = match normalized.as_str() {
        "zh-cn" => Some("Chinese (Simplified)"),
        "zh-tw" => Some("Chinese (Traditional)"),
        "jw" => Some("Javanese"), // legacy code for 'jv'
        "hmn" => Some("Hmong"),
        "he" => Some("Hebrew"),
        _ => None,
    };
    if let Some(name) = special {
        return Ok(name.to_string());
    }

    let lang = match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(&normalized),
        _ => None,
    };

    lang.map(|l| l.to_name().to_string())
        .ok_or_else(|| anyhow!("Failed to get language name for code: {}", code))
}
