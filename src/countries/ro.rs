//! Romania.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::pattern;
use crate::core::{Country, LocalizedError, LocalizedValidation};

static POSTAL: LazyLock<Regex> = LazyLock::new(|| pattern::ascii(r"^\d{6}$"));

/// Check a 6-digit postal code.
pub fn postal(check: &str) -> bool {
    POSTAL.is_match(check)
}

/// Rule set for Romania. Only the postal code rule is implemented.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoValidation;

impl LocalizedValidation for RoValidation {
    const COUNTRY: Country = Country::Ro;

    fn postal(check: &str) -> Result<bool, LocalizedError> {
        Ok(postal(check))
    }
}
