//! The Netherlands.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::pattern;
use crate::core::{Country, LocalizedError, LocalizedValidation};

// mobile (06), 2-digit area code, 3-digit area code
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    pattern::ascii(r"^0(6[\s-]?[1-9]\d{7}|[1-9]\d[\s-]?[1-9]\d{6}|[1-9]\d{2}[\s-]?[1-9]\d{5})$")
});

static POSTAL: LazyLock<Regex> =
    LazyLock::new(|| pattern::ascii(r"(?i)^[1-9]\d{3}\s?[A-Z]{2}$"));

static PERSON_ID: LazyLock<Regex> = LazyLock::new(|| pattern::ascii(r"^\d{9}$"));

/// Check a 10-digit phone number, optionally split after the area code.
pub fn phone(check: &str) -> bool {
    PHONE.is_match(check)
}

/// Check a postcode such as `1234 AB` (letters in either case).
pub fn postal(check: &str) -> bool {
    POSTAL.is_match(check)
}

/// Check the shape of a BSN (9 digits).
pub fn person_id(check: &str) -> bool {
    PERSON_ID.is_match(check)
}

/// Rule set for the Netherlands.
#[derive(Debug, Clone, Copy, Default)]
pub struct NlValidation;

impl LocalizedValidation for NlValidation {
    const COUNTRY: Country = Country::Nl;

    fn postal(check: &str) -> Result<bool, LocalizedError> {
        Ok(postal(check))
    }

    fn phone(check: &str) -> Result<bool, LocalizedError> {
        Ok(phone(check))
    }

    fn person_id(check: &str) -> Result<bool, LocalizedError> {
        Ok(person_id(check))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phones() {
        assert!(phone("0612345678"));
        assert!(phone("06-12345678"));
        assert!(phone("020 1234567"));
        assert!(phone("0591-123456"));
        assert!(!phone("0012345678"));
        assert!(!phone("+31612345678"));
    }

    #[test]
    fn postals() {
        assert!(postal("1234 AB"));
        assert!(postal("1234ab"));
        assert!(!postal("0123 AB"));
        assert!(!postal("1234 A"));
    }

    #[test]
    fn bsn_shape() {
        assert!(person_id("123456782"));
        assert!(!person_id("12345678"));
    }
}
