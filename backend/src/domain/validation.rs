//! Postal-code validation.
//!
//! The grammar accepts up to ten characters drawn from lowercase letters,
//! digits, hyphen, and space, followed by exactly one trailing lowercase
//! alphanumeric character. Total length is one to eleven characters and
//! matching is case sensitive: uppercase codes are rejected. This mirrors the
//! historical behaviour of the service; whether uppercase input should be
//! normalised instead is an open product question (see DESIGN.md), so the
//! literal grammar is kept.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{DomainError, ErrorCode};

/// Return true if the postal code matches the accepted grammar.
///
/// ```
/// use backend::domain::validation::is_valid_zip_code;
///
/// assert!(is_valid_zip_code("90210"));
/// assert!(is_valid_zip_code("ec1a 1bb"));
/// assert!(!is_valid_zip_code("90210 "));
/// assert!(!is_valid_zip_code("A1B2C3"));
/// ```
pub fn is_valid_zip_code(zip_code: &str) -> bool {
    static ZIP_CODE_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new("^[a-z0-9- ]{0,10}[a-z0-9]$").expect("valid regex"));
    ZIP_CODE_PATTERN.is_match(zip_code)
}

/// Validate the postal code of an inbound payload.
///
/// An absent postal code fails the same way as a malformed one: the record
/// cannot identify a location either way.
pub fn validate_zip_code(zip_code: Option<&str>) -> Result<(), DomainError> {
    match zip_code {
        Some(value) if is_valid_zip_code(value) => Ok(()),
        _ => Err(DomainError::new(
            ErrorCode::InvalidZipFormat,
            "The provided zipcode is of an invalid format.",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain_digits("90210")]
    #[case::single_character("a")]
    #[case::single_digit("7")]
    #[case::hyphenated("123-4567")]
    #[case::spaced("ec1a 1bb")]
    #[case::max_length("abcde-12345")]
    fn accepts_well_formed_codes(#[case] zip_code: &str) {
        assert!(is_valid_zip_code(zip_code), "{zip_code:?} should match");
    }

    #[rstest]
    #[case::empty("")]
    #[case::trailing_space("90210 ")]
    #[case::trailing_hyphen("90210-")]
    #[case::uppercase("A1B2C3")]
    #[case::too_long("a-b-c-d-e-f-g-h-i-j-k")]
    #[case::twelve_characters("abcdefghijkl")]
    #[case::illegal_character("90.210")]
    fn rejects_malformed_codes(#[case] zip_code: &str) {
        assert!(!is_valid_zip_code(zip_code), "{zip_code:?} should not match");
    }

    #[test]
    fn missing_zip_code_is_an_invalid_format() {
        let err = validate_zip_code(None).expect_err("absent zip must fail");
        assert_eq!(err.code(), ErrorCode::InvalidZipFormat);
    }

    #[test]
    fn present_valid_zip_code_passes() {
        assert!(validate_zip_code(Some("90210")).is_ok());
    }
}
