use super::country::Country;
use super::error::LocalizedError;
use super::locale;
use super::rule::Rule;

/// Rule set shared by every country.
///
/// Country types override the format checks they implement. Checks a country
/// does not have report [`LocalizedError::NotImplemented`]. Date and number
/// checks are routed through the country's locale.
pub trait LocalizedValidation {
    /// Country this rule set validates for.
    const COUNTRY: Country;

    /// Check a postal code.
    fn postal(_check: &str) -> Result<bool, LocalizedError> {
        Err(LocalizedError::not_implemented(Self::COUNTRY, Rule::Postal))
    }

    /// Check a phone number.
    fn phone(_check: &str) -> Result<bool, LocalizedError> {
        Err(LocalizedError::not_implemented(Self::COUNTRY, Rule::Phone))
    }

    /// Check a national identification number.
    fn person_id(_check: &str) -> Result<bool, LocalizedError> {
        Err(LocalizedError::not_implemented(Self::COUNTRY, Rule::PersonId))
    }

    /// Check a date in the country's locale.
    fn date(check: &str) -> bool {
        locale::date(Self::COUNTRY.locale(), check)
    }

    /// Check a date and time in the country's locale.
    fn date_time(check: &str) -> bool {
        locale::date_time(Self::COUNTRY.locale(), check)
    }

    /// Check a decimal number in the country's locale.
    fn decimal(check: &str) -> bool {
        locale::decimal(Self::COUNTRY.locale(), check)
    }
}
