//! Italy.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::pattern;
use crate::core::{Country, LocalizedError, LocalizedValidation};

static PHONE: LazyLock<Regex> = LazyLock::new(|| pattern::ascii(r"^\d*-? ?/?\d*$"));

static POSTAL: LazyLock<Regex> = LazyLock::new(|| pattern::ascii(r"^\d{5}$"));

// surname, name, birth year, month letter, day (+40 for women), municipality, check
static CODICE_FISCALE: LazyLock<Regex> = LazyLock::new(|| {
    pattern::ascii(r"^[A-Z]{6}\d{2}[A-Z]\d{2}[A-Z]\d{3}[A-Z]$")
});

/// Weights for digits `0`–`9` at odd (1st, 3rd, …) positions.
static ODD_DIGIT_WEIGHTS: [u32; 10] = [1, 0, 5, 7, 9, 13, 15, 17, 19, 21];

/// Weights for letters `A`–`Z` at odd (1st, 3rd, …) positions.
static ODD_LETTER_WEIGHTS: [u32; 26] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

/// Check a phone number.
///
/// Digits with at most one `-`, one space and one `/` between two runs.
pub fn phone(check: &str) -> bool {
    PHONE.is_match(check)
}

/// Check a 5-digit CAP.
pub fn postal(check: &str) -> bool {
    POSTAL.is_match(check)
}

/// Check a Codice Fiscale.
///
/// An 11-digit number (the code assigned to companies) is accepted as is.
/// A 16-character personal code is uppercased and must carry the correct
/// check letter.
///
/// ```
/// use localized::is_valid_italy_codice_fiscale;
///
/// assert!(is_valid_italy_codice_fiscale("RSSMRA85T10A562S"));
/// assert!(is_valid_italy_codice_fiscale("12345678901"));
/// assert!(!is_valid_italy_codice_fiscale("RSSMRA85T10A562T"));
/// ```
pub fn is_valid_italy_codice_fiscale(check: &str) -> bool {
    if check.len() == 11 && check.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }

    let code = check.to_ascii_uppercase();
    if !CODICE_FISCALE.is_match(&code) {
        return false;
    }

    let bytes = code.as_bytes();
    let sum: u32 = bytes[..15]
        .iter()
        .enumerate()
        .map(|(i, &b)| if i % 2 == 0 { odd_weight(b) } else { even_value(b) })
        .sum();

    // sum % 26 < 26, so the cast cannot truncate.
    bytes[15] == b'A' + (sum % 26) as u8
}

fn odd_weight(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => ODD_DIGIT_WEIGHTS[usize::from(b - b'0')],
        b'A'..=b'Z' => ODD_LETTER_WEIGHTS[usize::from(b - b'A')],
        _ => 0,
    }
}

fn even_value(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => u32::from(b - b'0'),
        b'A'..=b'Z' => u32::from(b - b'A'),
        _ => 0,
    }
}

/// Rule set for Italy.
///
/// Italy has no separate national ID rule; use
/// [`is_valid_italy_codice_fiscale`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ItValidation;

impl LocalizedValidation for ItValidation {
    const COUNTRY: Country = Country::It;

    fn postal(check: &str) -> Result<bool, LocalizedError> {
        Ok(postal(check))
    }

    fn phone(check: &str) -> Result<bool, LocalizedError> {
        Ok(phone(check))
    }
}
