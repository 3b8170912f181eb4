//! Taiwan.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::pattern;
use crate::core::{Country, LocalizedError, LocalizedValidation};

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    pattern::ascii(r"^\(?(0|\+886)[-. ]?[2-9][)\-. ]?(\d[)\-. ]?){2}(\d[-. ]?){3}\d{2}\d?$")
});

// 3-digit or 3+2-digit postal codes
static POSTAL: LazyLock<Regex> = LazyLock::new(|| pattern::ascii(r"^[1-9]\d{2}(\d{2})?$"));

static NATIONAL_ID: LazyLock<Regex> = LazyLock::new(|| pattern::ascii(r"^[A-Z][12]\d{8}$"));

/// Values of the leading letter of a national ID, `A` to `Z`.
static LETTER_VALUES: [u32; 26] = [
    10, 11, 12, 13, 14, 15, 16, 17, 34, 18, 19, 20, 21, 22, 35, 23, 24, 25, 26, 27, 28, 29, 32,
    30, 31, 33,
];

static UBN_WEIGHTS: [u32; 8] = [1, 2, 1, 2, 1, 2, 4, 1];

/// Check a phone number.
pub fn phone(check: &str) -> bool {
    PHONE.is_match(check)
}

/// Check a 3- or 5-digit postal code.
pub fn postal(check: &str) -> bool {
    POSTAL.is_match(check)
}

/// Check a national identification card number.
///
/// One letter, `1` or `2` for the sex, seven serial digits and a check
/// digit. Lowercase input is accepted.
///
/// ```
/// use localized::is_valid_taiwan_national_id;
///
/// assert!(is_valid_taiwan_national_id("A123456789"));
/// assert!(!is_valid_taiwan_national_id("A123456788"));
/// ```
pub fn is_valid_taiwan_national_id(check: &str) -> bool {
    let id = check.to_ascii_uppercase();
    if !NATIONAL_ID.is_match(&id) {
        return false;
    }

    let bytes = id.as_bytes();
    let n1 = LETTER_VALUES[usize::from(bytes[0] - b'A')];
    let mut checksum = n1 / 10 + (n1 % 10) * 9;
    for (i, &b) in bytes.iter().enumerate().take(9).skip(1) {
        checksum += u32::from(b - b'0') * (9 - i as u32);
    }

    // Only the leading digit of the complement is compared: a complement
    // of 10 expects '1'.
    let complement = 10 - checksum % 10;
    let expected = if complement == 10 {
        b'1'
    } else {
        b'0' + complement as u8
    };
    bytes[9] == expected
}

/// Check a unified business number (統一編號).
///
/// Eight digits; each weighted product contributes its digit sum. The number
/// is valid when the total is a multiple of 10, or when it ends in 9 and the
/// seventh digit is `7` (whose product 28 may be counted as either 10 or 1).
///
/// ```
/// use localized::is_valid_taiwan_ubn;
///
/// assert!(is_valid_taiwan_ubn("04595257"));
/// assert!(is_valid_taiwan_ubn("12345675"));
/// assert!(!is_valid_taiwan_ubn("04595258"));
/// ```
pub fn is_valid_taiwan_ubn(check: &str) -> bool {
    let bytes = check.as_bytes();
    if bytes.len() != 8 || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let sum: u32 = bytes
        .iter()
        .zip(UBN_WEIGHTS)
        .map(|(&b, weight)| {
            let product = u32::from(b - b'0') * weight;
            product / 10 + product % 10
        })
        .sum();

    sum % 10 == 0 || (sum % 10 == 9 && bytes[6] == b'7')
}

/// Former name of [`is_valid_taiwan_national_id`].
#[deprecated(note = "use `is_valid_taiwan_national_id` instead")]
pub fn nicn(check: &str) -> bool {
    is_valid_taiwan_national_id(check)
}

/// Rule set for Taiwan.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwValidation;

impl LocalizedValidation for TwValidation {
    const COUNTRY: Country = Country::Tw;

    fn postal(check: &str) -> Result<bool, LocalizedError> {
        Ok(postal(check))
    }

    fn phone(check: &str) -> Result<bool, LocalizedError> {
        Ok(phone(check))
    }

    fn person_id(check: &str) -> Result<bool, LocalizedError> {
        Ok(is_valid_taiwan_national_id(check))
    }
}
