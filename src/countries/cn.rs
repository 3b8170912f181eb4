//! People's Republic of China (mainland).

use std::sync::LazyLock;

use regex::Regex;

use crate::core::pattern;
use crate::core::{Country, LocalizedError, LocalizedValidation};

// Optional national prefix, then an 11-digit mobile number starting with 1
// or an area code and landline number with an optional extension. Loose on
// purpose: mobile prefixes are not checked.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    pattern::ascii(r"^((0086|\+86)-?)?(1\d{10}|\d{3,4}-\d{7,8}(-\d{1,6})?)$")
});

// The standard allows dropping two trailing zeros, which nobody does.
static POSTAL: LazyLock<Regex> = LazyLock::new(|| pattern::ascii(r"^\d{6}$"));

/// Check a phone number.
pub fn phone(check: &str) -> bool {
    PHONE.is_match(check)
}

/// Check a 6-digit postal code.
pub fn postal(check: &str) -> bool {
    POSTAL.is_match(check)
}

/// Check an 18-character resident identity card number (GB 11643-1999).
///
/// The first 17 characters are digits. Reading them right to left, the
/// weight starts at 2 and doubles modulo 11 per position. The last
/// character is the check value, with `X` (either case) standing for 10.
///
/// ```
/// use localized::is_valid_china_id;
///
/// assert!(is_valid_china_id("110101199003074477"));
/// assert!(!is_valid_china_id("110101199003074478"));
/// ```
pub fn is_valid_china_id(check: &str) -> bool {
    let bytes = check.as_bytes();
    if bytes.len() != 18 {
        return false;
    }

    let mut sum = 0u32;
    let mut weight = 1u32;
    for &b in bytes[..17].iter().rev() {
        weight = (weight * 2) % 11;
        if !b.is_ascii_digit() {
            return false;
        }
        sum += u32::from(b - b'0') * weight;
    }

    let check_value = match bytes[17] {
        b'x' | b'X' => 10,
        b @ b'0'..=b'9' => u32::from(b - b'0'),
        _ => return false,
    };

    check_value == (12 - sum % 11) % 11
}

/// Rule set for China.
#[derive(Debug, Clone, Copy, Default)]
pub struct CnValidation;

impl LocalizedValidation for CnValidation {
    const COUNTRY: Country = Country::Cn;

    fn postal(check: &str) -> Result<bool, LocalizedError> {
        Ok(postal(check))
    }

    fn phone(check: &str) -> Result<bool, LocalizedError> {
        Ok(phone(check))
    }

    fn person_id(check: &str) -> Result<bool, LocalizedError> {
        Ok(is_valid_china_id(check))
    }
}
