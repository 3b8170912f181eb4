//! France.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::pattern;
use crate::core::{Country, LocalizedError, LocalizedValidation};

/// Overseas departments whose numbers repeat the prefix after `+`.
pub const OVERSEAS_PREFIXES: [&str; 5] = ["508", "596", "590", "594", "262"];

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    let metropolitan = r"(0|\+33)(0?[1-9]|\s0?[1-9]|-0?[1-9]|\.0?[1-9])(\d{8}|(\s\d{2}){4}|(-\d{2}){4}|(\.\d{2}){4})";
    let overseas = r"0(508|596|590|594|262)(\d{6}|(\s\d{2}){3}|(-\d{2}){3}|(\.\d{2}){3})";
    let overseas_intl = OVERSEAS_PREFIXES
        .iter()
        .map(|p| {
            format!(r"\+{p}({p}\d{{6}}|\s{p}(\s\d{{2}}){{3}}|-{p}(-\d{{2}}){{3}}|\.{p}(\.\d{{2}}){{3}})")
        })
        .collect::<Vec<_>>()
        .join("|");
    pattern::ascii(&format!("^(?:{metropolitan}|{overseas}|{overseas_intl})$"))
});

static POSTAL: LazyLock<Regex> = LazyLock::new(|| pattern::ascii(r"^\d{5}$"));

// sex, year, month (00-12), department (incl. 2A/2B), commune, order, key
static NIR: LazyLock<Regex> =
    LazyLock::new(|| pattern::ascii(r"^[12]\d{2}(0\d|1[012])(\d{2}|2[AB])\d{8}$"));

/// Check a phone number, metropolitan or overseas.
///
/// Digits may be grouped in pairs with spaces, dots or hyphens.
pub fn phone(check: &str) -> bool {
    PHONE.is_match(check)
}

/// Check a postal code: five digits from 01000 to 99138.
pub fn postal(check: &str) -> bool {
    if !POSTAL.is_match(check) {
        return false;
    }
    check
        .parse::<u32>()
        .is_ok_and(|value| (1000..=99138).contains(&value))
}

/// Check a social security number (NIR, "numéro INSEE").
///
/// The 13-character body is reduced modulo 97; the 2-digit key must equal
/// `97 - body % 97`. Corsican departments `2A`/`2B` read as `20` minus one
/// or two million.
///
/// ```
/// use localized::is_valid_france_nir;
///
/// assert!(is_valid_france_nir("180010101000183"));
/// assert!(!is_valid_france_nir("180010101000184"));
/// ```
pub fn is_valid_france_nir(check: &str) -> bool {
    if !NIR.is_match(check) {
        return false;
    }

    // The pattern guarantees 15 ASCII characters.
    let (body, key) = check.split_at(13);
    let offset = match body.as_bytes()[6] {
        b'A' => 1_000_000,
        b'B' => 2_000_000,
        _ => 0,
    };

    let Ok(number) = body.replace(['A', 'B'], "0").parse::<i64>() else {
        return false;
    };
    let Ok(key) = key.parse::<i64>() else {
        return false;
    };

    key == 97 - (number - offset).rem_euclid(97)
}

/// Rule set for France.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrValidation;

impl LocalizedValidation for FrValidation {
    const COUNTRY: Country = Country::Fr;

    fn postal(check: &str) -> Result<bool, LocalizedError> {
        Ok(postal(check))
    }

    fn phone(check: &str) -> Result<bool, LocalizedError> {
        Ok(phone(check))
    }

    fn person_id(check: &str) -> Result<bool, LocalizedError> {
        Ok(is_valid_france_nir(check))
    }
}
