//! Locale-aware date, date-time and decimal checks.
//!
//! Each supported locale carries the numeric date layouts it writes and its
//! decimal and grouping symbols. Dates are parsed strictly with `chrono`
//! (no day or month roll-over). Decimal checks are purely syntactic;
//! [`parse_decimal`] converts a checked value to a `rust_decimal::Decimal`.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// Date layouts and number symbols for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    /// Locale identifier (e.g. "de_DE").
    pub locale: &'static str,
    /// `chrono` date layouts accepted for this locale, most common first.
    pub date_formats: &'static [&'static str],
    /// Decimal separator.
    pub decimal_separator: char,
    /// Characters accepted as thousands separators.
    pub group_separators: &'static [char],
}

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];
const DATE_TIME_SEPARATORS: &[&str] = &[" ", ", "];

static LOCALES: &[LocaleFormat] = &[
    LocaleFormat {
        locale: "da_DK",
        date_formats: &["%d.%m.%Y", "%d/%m/%Y", "%d-%m-%Y"],
        decimal_separator: ',',
        group_separators: &['.'],
    },
    LocaleFormat {
        locale: "de_DE",
        date_formats: &["%d.%m.%Y"],
        decimal_separator: ',',
        group_separators: &['.'],
    },
    LocaleFormat {
        locale: "en_AU",
        date_formats: &["%d/%m/%Y"],
        decimal_separator: '.',
        group_separators: &[','],
    },
    LocaleFormat {
        locale: "en_US",
        date_formats: &["%m/%d/%Y"],
        decimal_separator: '.',
        group_separators: &[','],
    },
    LocaleFormat {
        locale: "fr_FR",
        date_formats: &["%d/%m/%Y"],
        decimal_separator: ',',
        group_separators: &['\u{202f}', '\u{a0}', ' '],
    },
    LocaleFormat {
        locale: "it_IT",
        date_formats: &["%d/%m/%Y"],
        decimal_separator: ',',
        group_separators: &['.'],
    },
    LocaleFormat {
        locale: "nl_NL",
        date_formats: &["%d-%m-%Y"],
        decimal_separator: ',',
        group_separators: &['.'],
    },
    LocaleFormat {
        locale: "ro_RO",
        date_formats: &["%d.%m.%Y"],
        decimal_separator: ',',
        group_separators: &['.'],
    },
    LocaleFormat {
        locale: "zh_CN",
        date_formats: &["%Y/%m/%d", "%Y-%m-%d", "%Y年%m月%d日"],
        decimal_separator: '.',
        group_separators: &[','],
    },
    LocaleFormat {
        locale: "zh_TW",
        date_formats: &["%Y/%m/%d", "%Y年%m月%d日"],
        decimal_separator: '.',
        group_separators: &[','],
    },
];

const FALLBACK_LOCALE: &str = "en_US";

/// Look up the format table for `locale`.
///
/// Accepts both `de_DE` and `de-DE`. Unknown locales fall back to `en_US`.
pub fn locale_format(locale: &str) -> &'static LocaleFormat {
    LOCALES
        .iter()
        .find(|f| same_locale(f.locale, locale))
        .unwrap_or_else(|| {
            log::debug!("no format table for locale '{locale}', using {FALLBACK_LOCALE}");
            fallback()
        })
}

// `de_DE` and `de-DE` name the same locale.
fn same_locale(known: &str, requested: &str) -> bool {
    known.len() == requested.len()
        && known
            .bytes()
            .zip(requested.bytes())
            .all(|(k, r)| k == r || (k == b'_' && r == b'-'))
}

fn fallback() -> &'static LocaleFormat {
    // en_US is always present in LOCALES.
    &LOCALES[3]
}

/// Check a date written in the numeric format of `locale`.
pub fn date(locale: &str, value: &str) -> bool {
    if !is_trimmed(value) {
        return false;
    }
    locale_format(locale)
        .date_formats
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
}

/// Check a date followed by a time of day, in the format of `locale`.
pub fn date_time(locale: &str, value: &str) -> bool {
    if !is_trimmed(value) {
        return false;
    }
    let format = locale_format(locale);
    for date_fmt in format.date_formats {
        for sep in DATE_TIME_SEPARATORS {
            for time_fmt in TIME_FORMATS {
                let fmt = format!("{date_fmt}{sep}{time_fmt}");
                if NaiveDateTime::parse_from_str(value, &fmt).is_ok() {
                    return true;
                }
            }
        }
    }
    false
}

/// Check a decimal number written with the symbols of `locale`.
///
/// An optional leading sign is allowed. Grouping separators may only appear
/// in the integer part, with every group after the first exactly three
/// digits long. The magnitude is not limited.
pub fn decimal(locale: &str, value: &str) -> bool {
    normalize_decimal(locale_format(locale), value).is_some()
}

/// Parse a decimal number written with the symbols of `locale`.
///
/// Returns `None` when the value is malformed or outside the range of
/// [`Decimal`]; use [`decimal`] for a pure format check.
pub fn parse_decimal(locale: &str, value: &str) -> Option<Decimal> {
    let normalized = normalize_decimal(locale_format(locale), value)?;
    Decimal::from_str(&normalized).ok()
}

/// Rewrite a localized number into the plain `-1234.56` form.
fn normalize_decimal(format: &LocaleFormat, value: &str) -> Option<String> {
    let sign = if value.starts_with('-') { "-" } else { "" };
    let unsigned = value.strip_prefix(['-', '+']).unwrap_or(value);

    let (int_part, frac_part) = match unsigned.split_once(format.decimal_separator) {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    if let Some(frac) = frac_part {
        if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    } else if int_part.is_empty() {
        return None;
    }

    let digits = strip_grouping(int_part, format.group_separators)?;
    let int_digits = if digits.is_empty() { "0" } else { &digits };

    Some(match frac_part {
        Some(frac) => format!("{sign}{int_digits}.{frac}"),
        None => format!("{sign}{int_digits}"),
    })
}

fn strip_grouping(int_part: &str, separators: &[char]) -> Option<String> {
    let groups: Vec<&str> = int_part.split(separators).collect();
    let all_digits = |g: &str| g.bytes().all(|b| b.is_ascii_digit());

    if groups.len() == 1 {
        return all_digits(int_part).then(|| int_part.to_string());
    }

    let (first, rest) = groups.split_first()?;
    let first_ok = (1..=3).contains(&first.len()) && all_digits(first);
    let rest_ok = rest.iter().all(|g| g.len() == 3 && all_digits(g));
    (first_ok && rest_ok).then(|| groups.concat())
}

fn is_trimmed(value: &str) -> bool {
    !value.is_empty() && value.trim() == value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_en_us() {
        assert_eq!(fallback().locale, "en_US");
        assert_eq!(locale_format("xx_XX").locale, "en_US");
    }

    #[test]
    fn hyphenated_locale() {
        assert_eq!(locale_format("de-DE").locale, "de_DE");
    }

    #[test]
    fn locale_table_sorted() {
        for window in LOCALES.windows(2) {
            assert!(window[0].locale < window[1].locale);
        }
    }

    #[test]
    fn german_date() {
        assert!(date("de_DE", "24.12.2024"));
        assert!(!date("de_DE", "31.02.2024"));
        assert!(!date("de_DE", "12/24/2024"));
    }

    #[test]
    fn us_date() {
        assert!(date("en_US", "12/24/2024"));
        assert!(!date("en_US", "24/12/2024"));
    }

    #[test]
    fn chinese_dates() {
        assert!(date("zh_CN", "2024-12-24"));
        assert!(date("zh_CN", "2024/12/24"));
        assert!(date("zh_CN", "2024年12月24日"));
    }

    #[test]
    fn surrounding_whitespace_rejected() {
        assert!(!date("de_DE", " 24.12.2024"));
        assert!(!date("de_DE", ""));
    }

    #[test]
    fn date_times() {
        assert!(date_time("de_DE", "24.12.2024 18:30"));
        assert!(date_time("fr_FR", "24/12/2024 18:30:15"));
        assert!(date_time("en_AU", "24/12/2024, 09:05"));
        assert!(!date_time("de_DE", "24.12.2024 25:00"));
        assert!(!date_time("de_DE", "24.12.2024"));
    }

    #[test]
    fn german_decimals() {
        assert!(decimal("de_DE", "1.234,56"));
        assert!(decimal("de_DE", "-0,5"));
        assert!(decimal("de_DE", "1234"));
        assert!(decimal("de_DE", ",5"));
        assert!(!decimal("de_DE", "1,234.56"));
        assert!(!decimal("de_DE", "12.34"));
    }

    #[test]
    fn english_decimals() {
        assert!(decimal("en_US", "1,234.56"));
        assert!(decimal("en_US", "+42"));
        assert!(!decimal("en_US", "1,23.4"));
    }

    #[test]
    fn french_grouping() {
        assert!(decimal("fr_FR", "1\u{202f}234,5"));
        assert!(decimal("fr_FR", "1 234 567"));
    }

    #[test]
    fn malformed_decimals() {
        for value in ["", "-", ".", "1.", "abc", "1e5", "--1", "1..2"] {
            assert!(!decimal("en_US", value), "{value:?} should be rejected");
        }
    }

    #[test]
    fn locale_names_without_allocation() {
        assert!(same_locale("de_DE", "de_DE"));
        assert!(same_locale("de_DE", "de-DE"));
        assert!(!same_locale("de_DE", "de_D"));
        assert!(!same_locale("de_DE", "fr_FR"));
        assert!(!same_locale("de-DE", "de_DE"));
    }

    #[test]
    fn normalized_form() {
        let de = locale_format("de_DE");
        assert_eq!(normalize_decimal(de, "-1.234,50").as_deref(), Some("-1234.50"));
        assert_eq!(normalize_decimal(de, ",5").as_deref(), Some("0.5"));
    }
}
