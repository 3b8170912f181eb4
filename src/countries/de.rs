//! Germany.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::core::pattern;
use crate::core::{Country, LocalizedError, LocalizedValidation};

// Postleitzahlen: leading 00, 05, 43 and 62 are unassigned.
static POSTAL: LazyLock<Regex> = LazyLock::new(|| {
    pattern::ascii(r"^(0[1-46-9]\d{3}|[1-357-9]\d{4}|4[0-24-9]\d{3}|6[013-9]\d{3})$")
});

static ADDRESS1: LazyLock<Regex> =
    LazyLock::new(|| pattern::unicode(r"[a-zA-ZäöüÄÖÜß .]+ [0-9]+[a-zA-Z]?"));

static PHONE: LazyLock<Regex> = LazyLock::new(|| pattern::ascii(r"^[0-9/. \-]*$"));

static DOB: LazyLock<Regex> =
    LazyLock::new(|| pattern::ascii(r"^(\d{2})\.(\d{2})\.(\d{2}|\d{4})$"));

/// Check a Postleitzahl.
pub fn postal(check: &str) -> bool {
    POSTAL.is_match(check)
}

/// Check the first address line ("Straße und Hausnummer").
///
/// Looks for a street name followed by a house number anywhere in the value.
pub fn address1(check: &str) -> bool {
    ADDRESS1.is_match(check)
}

/// Check a phone number: digits, `/`, `.`, space and `-` only.
///
/// An empty string passes.
pub fn phone(check: &str) -> bool {
    PHONE.is_match(check)
}

/// Check a date of birth written `dd.mm.yy` or `dd.mm.yyyy`.
///
/// The date must exist in the Gregorian calendar. Two-digit years are taken
/// literally (year 85, not 1985), and year 0 is rejected.
pub fn dob(check: &str) -> bool {
    let Some(caps) = DOB.captures(check) else {
        return false;
    };
    let (Ok(day), Ok(month), Ok(year)) = (
        caps[1].parse::<u32>(),
        caps[2].parse::<u32>(),
        caps[3].parse::<i32>(),
    ) else {
        return false;
    };
    year >= 1 && NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Rule set for Germany. No national ID rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeValidation;

impl LocalizedValidation for DeValidation {
    const COUNTRY: Country = Country::De;

    fn postal(check: &str) -> Result<bool, LocalizedError> {
        Ok(postal(check))
    }

    fn phone(check: &str) -> Result<bool, LocalizedError> {
        Ok(phone(check))
    }
}
