//! Names of the checks a country rule set can provide.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::LocalizedError;

/// A single localized check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Postal code.
    Postal,
    /// Phone number.
    Phone,
    /// National identification number.
    PersonId,
    /// First address line (street and house number).
    Address1,
    /// Date of birth in the national written format.
    Dob,
    /// Italian Codice Fiscale.
    CodiceFiscale,
    /// Taiwanese unified business number.
    Ubn,
    /// Date in the country's locale.
    Date,
    /// Date and time in the country's locale.
    DateTime,
    /// Decimal number in the country's locale.
    Decimal,
}

impl Rule {
    /// Every rule.
    pub const ALL: [Rule; 10] = [
        Self::Postal,
        Self::Phone,
        Self::PersonId,
        Self::Address1,
        Self::Dob,
        Self::CodiceFiscale,
        Self::Ubn,
        Self::Date,
        Self::DateTime,
        Self::Decimal,
    ];

    /// Canonical snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Postal => "postal",
            Self::Phone => "phone",
            Self::PersonId => "person_id",
            Self::Address1 => "address1",
            Self::Dob => "dob",
            Self::CodiceFiscale => "codice_fiscale",
            Self::Ubn => "ubn",
            Self::Date => "date",
            Self::DateTime => "date_time",
            Self::Decimal => "decimal",
        }
    }

    /// Parse a rule name.
    ///
    /// Accepts the canonical snake_case names plus the camelCase and short
    /// aliases form builders commonly use (`personId`, `dateTime`, `cf`,
    /// `nicn`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "postal" => Some(Self::Postal),
            "phone" => Some(Self::Phone),
            "person_id" | "personId" | "nicn" => Some(Self::PersonId),
            "address1" => Some(Self::Address1),
            "dob" => Some(Self::Dob),
            "codice_fiscale" | "cf" => Some(Self::CodiceFiscale),
            "ubn" => Some(Self::Ubn),
            "date" => Some(Self::Date),
            "date_time" | "dateTime" => Some(Self::DateTime),
            "decimal" => Some(Self::Decimal),
            _ => None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = LocalizedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| LocalizedError::UnknownRule(s.into()))
    }
}
