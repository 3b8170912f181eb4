//! Supported countries and their validation locales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::LocalizedError;

/// A country with a localized rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    /// Australia.
    Au,
    /// People's Republic of China (mainland).
    Cn,
    /// Germany.
    De,
    /// Denmark.
    Dk,
    /// France.
    Fr,
    /// Italy.
    It,
    /// The Netherlands.
    Nl,
    /// Romania.
    Ro,
    /// Taiwan.
    Tw,
}

impl Country {
    /// Every supported country, sorted by code.
    pub const ALL: [Country; 9] = [
        Self::Au,
        Self::Cn,
        Self::De,
        Self::Dk,
        Self::Fr,
        Self::It,
        Self::Nl,
        Self::Ro,
        Self::Tw,
    ];

    /// ISO 3166-1 alpha-2 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Au => "AU",
            Self::Cn => "CN",
            Self::De => "DE",
            Self::Dk => "DK",
            Self::Fr => "FR",
            Self::It => "IT",
            Self::Nl => "NL",
            Self::Ro => "RO",
            Self::Tw => "TW",
        }
    }

    /// Locale used for date and number parsing.
    pub fn locale(&self) -> &'static str {
        match self {
            Self::Au => "en_AU",
            Self::Cn => "zh_CN",
            Self::De => "de_DE",
            Self::Dk => "da_DK",
            Self::Fr => "fr_FR",
            Self::It => "it_IT",
            Self::Nl => "nl_NL",
            Self::Ro => "ro_RO",
            Self::Tw => "zh_TW",
        }
    }

    /// Parse from an alpha-2 code, ignoring ASCII case.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = LocalizedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| LocalizedError::UnknownCountry(s.into()))
    }
}
