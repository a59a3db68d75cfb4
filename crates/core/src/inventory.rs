//! Code and name rules for cities and hotels.
//!
//! A city is identified by a three-character code (e.g. `ANT`). A hotel is
//! identified by a two-character local code that is only unique within its
//! city; prefixing it with the city code yields the global code used by the
//! CSV feeds (e.g. `ANT` + `01` = `ANT01`).

use crate::error::CoreError;

// ── Constants ────────────────────────────────────────────────────────

/// Exact length of a city code.
pub const CITY_CODE_LEN: usize = 3;

/// Exact length of a hotel local code.
pub const LOCAL_CODE_LEN: usize = 2;

/// Maximum length of a city or hotel display name.
pub const NAME_MAX_LEN: usize = 100;

// ── Validation ───────────────────────────────────────────────────────

/// Validate a city code: exactly [`CITY_CODE_LEN`] characters, no whitespace.
pub fn validate_city_code(code: &str) -> Result<(), CoreError> {
    validate_code("city code", code, CITY_CODE_LEN)
}

/// Validate a hotel local code: exactly [`LOCAL_CODE_LEN`] characters, no whitespace.
pub fn validate_local_code(code: &str) -> Result<(), CoreError> {
    validate_code("local_code", code, LOCAL_CODE_LEN)
}

/// Validate a display name: non-blank and at most [`NAME_MAX_LEN`] characters.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("name must not be empty".into()));
    }
    let len = name.chars().count();
    if len > NAME_MAX_LEN {
        return Err(CoreError::Validation(format!(
            "name must be at most {NAME_MAX_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

fn validate_code(field: &str, code: &str, expected: usize) -> Result<(), CoreError> {
    let len = code.chars().count();
    if len != expected {
        return Err(CoreError::Validation(format!(
            "{field} must be exactly {expected} characters, got {len}"
        )));
    }
    if code.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(format!(
            "{field} must not contain whitespace"
        )));
    }
    Ok(())
}

// ── Code derivation ──────────────────────────────────────────────────

/// Extract the hotel local code from a combined feed code.
///
/// The local code is the last [`LOCAL_CODE_LEN`] characters, so `BARA9`
/// yields `A9`. Codes shorter than that are rejected.
pub fn local_code_from_combined(combined: &str) -> Result<String, CoreError> {
    let chars: Vec<char> = combined.chars().collect();
    if chars.len() < LOCAL_CODE_LEN {
        return Err(CoreError::Validation(format!(
            "hotel code '{combined}' is shorter than {LOCAL_CODE_LEN} characters"
        )));
    }
    Ok(chars[chars.len() - LOCAL_CODE_LEN..].iter().collect())
}

/// Build the global code of a hotel from its city code and local code.
pub fn global_code(city_code: &str, local_code: &str) -> String {
    format!("{city_code}{local_code}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_code_must_be_three_chars() {
        assert!(validate_city_code("ANT").is_ok());
        assert!(validate_city_code("AN").is_err());
        assert!(validate_city_code("ANTW").is_err());
        assert!(validate_city_code("").is_err());
    }

    #[test]
    fn city_code_rejects_whitespace() {
        assert!(validate_city_code("A T").is_err());
    }

    #[test]
    fn local_code_must_be_two_chars() {
        assert!(validate_local_code("01").is_ok());
        assert!(validate_local_code("A9").is_ok());
        assert!(validate_local_code("1").is_err());
        assert!(validate_local_code("ANT01").is_err());
    }

    #[test]
    fn local_code_error_message_names_field() {
        let err = validate_local_code("123").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: local_code must be exactly 2 characters, got 3"
        );
    }

    #[test]
    fn name_limits() {
        assert!(validate_name("Hotel 1").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(NAME_MAX_LEN)).is_ok());
        assert!(validate_name(&"x".repeat(NAME_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        assert!(validate_name(&"é".repeat(NAME_MAX_LEN)).is_ok());
    }

    #[test]
    fn local_code_is_last_two_chars() {
        assert_eq!(local_code_from_combined("BARA9").unwrap(), "A9");
        assert_eq!(local_code_from_combined("ANT01").unwrap(), "01");
        assert_eq!(local_code_from_combined("01").unwrap(), "01");
    }

    #[test]
    fn local_code_from_short_code_fails() {
        assert!(local_code_from_combined("9").is_err());
        assert!(local_code_from_combined("").is_err());
    }

    #[test]
    fn global_code_reconstructs_feed_code() {
        assert_eq!(global_code("BAR", "A9"), "BARA9");
        let local = local_code_from_combined("ANT01").unwrap();
        assert_eq!(global_code("ANT", &local), "ANT01");
    }
}
