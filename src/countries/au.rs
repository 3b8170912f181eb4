//! Australia.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::pattern;
use crate::core::{Country, LocalizedError, LocalizedValidation};

static POSTAL: LazyLock<Regex> = LazyLock::new(|| pattern::ascii(r"^\d{4}$"));

// Full international dialling prefix, e.g. "0011 61".
static INTL_PREFIX: LazyLock<Regex> = LazyLock::new(|| pattern::ascii(r"0011\s?61"));

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| pattern::ascii(r"\s+|-|\(|\)"));

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    pattern::ascii(concat!(
        r"^(",
        r"(0|\+61)[2378]\d{8}",
        r"|((0|\+61)[45]\d{2}|1300|1800|190[02])\d{6}",
        r"|(\+61)?180\d{4}",
        r"|(\+61)?13\d{4}",
        r"|(\+61)?12[2-8]\d{1,7}",
        r"|(\+61|0)14[12357]\d{6}",
        r")$",
    ))
});

/// Check a 4-digit postcode.
pub fn postal(check: &str) -> bool {
    POSTAL.is_match(check)
}

/// Check a phone number.
///
/// `0011 61` is rewritten to `+61` and whitespace, hyphens and parentheses
/// are dropped before matching landline, mobile and special service numbers.
pub fn phone(check: &str) -> bool {
    PHONE.is_match(&normalize_phone(check))
}

fn normalize_phone(check: &str) -> String {
    let international = INTL_PREFIX.replace_all(check, "+61");
    SEPARATORS.replace_all(&international, "").into_owned()
}

/// Rule set for Australia. No national ID rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuValidation;

impl LocalizedValidation for AuValidation {
    const COUNTRY: Country = Country::Au;

    fn postal(check: &str) -> Result<bool, LocalizedError> {
        Ok(postal(check))
    }

    fn phone(check: &str) -> Result<bool, LocalizedError> {
        Ok(phone(check))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postals() {
        assert!(postal("2000"));
        assert!(!postal("200"));
        assert!(!postal("20000"));
    }

    #[test]
    fn normalization() {
        assert_eq!(normalize_phone("0011 61 2 9876 5432"), "+61298765432");
        assert_eq!(normalize_phone("(02) 9876-5432"), "0298765432");
    }

    #[test]
    fn landlines_and_mobiles() {
        assert!(phone("(02) 9876 5432"));
        assert!(phone("+61 2 9876 5432"));
        assert!(phone("0011 61 2 9876 5432"));
        assert!(phone("0412 345 678"));
        assert!(phone("+61412345678"));
        assert!(!phone("0112345678"));
        assert!(!phone("041234567"));
    }

    #[test]
    fn service_numbers() {
        assert!(phone("1300 123 456"));
        assert!(phone("1800 123 456"));
        assert!(phone("1900 123 456"));
        assert!(phone("13 12 34"));
        assert!(phone("180 1234"));
        assert!(!phone("1901 123 456"));
    }
}
