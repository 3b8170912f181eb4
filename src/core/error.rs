use thiserror::Error;

use super::country::Country;
use super::rule::Rule;

/// Errors raised by the rule registry.
///
/// Validators themselves never fail: a value that does not pass a check is
/// reported as `false`. These errors only describe requests the registry
/// cannot route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LocalizedError {
    /// The country has no implementation for the requested rule.
    #[error("{rule} is not implemented for {country}")]
    NotImplemented {
        /// Country the rule was requested for.
        country: Country,
        /// The requested rule.
        rule: Rule,
    },

    /// The country code is not one of the supported countries.
    #[error("unknown country code '{0}'")]
    UnknownCountry(String),

    /// The rule name does not correspond to any known rule.
    #[error("unknown rule '{0}'")]
    UnknownRule(String),
}

impl LocalizedError {
    /// Shorthand for [`LocalizedError::NotImplemented`].
    pub fn not_implemented(country: Country, rule: Rule) -> Self {
        Self::NotImplemented { country, rule }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_implemented_message() {
        let err = LocalizedError::not_implemented(Country::Au, Rule::PersonId);
        assert_eq!(err.to_string(), "person_id is not implemented for AU");
    }

    #[test]
    fn unknown_country_message() {
        let err = LocalizedError::UnknownCountry("XX".into());
        assert_eq!(err.to_string(), "unknown country code 'XX'");
    }
}
