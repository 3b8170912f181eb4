//! Denmark.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::pattern;
use crate::core::{Country, LocalizedError, LocalizedValidation};

// CPR number, ddmmyy-ssss
static PERSON_ID: LazyLock<Regex> = LazyLock::new(|| pattern::ascii(r"^\d{6}-\d{4}$"));
static POSTAL: LazyLock<Regex> = LazyLock::new(|| pattern::ascii(r"^\d{4}$"));
static PHONE: LazyLock<Regex> = LazyLock::new(|| pattern::ascii(r"^\d{8}$"));

/// Check the shape of a CPR number (`ddmmyy-ssss`).
pub fn person_id(check: &str) -> bool {
    PERSON_ID.is_match(check)
}

/// Check a 4-digit postal code.
pub fn postal(check: &str) -> bool {
    POSTAL.is_match(check)
}

/// Check an 8-digit phone number.
pub fn phone(check: &str) -> bool {
    PHONE.is_match(check)
}

/// Rule set for Denmark.
#[derive(Debug, Clone, Copy, Default)]
pub struct DkValidation;

impl LocalizedValidation for DkValidation {
    const COUNTRY: Country = Country::Dk;

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
