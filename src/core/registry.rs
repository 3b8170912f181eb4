//! Route `(country, rule)` pairs to the matching check.

use crate::countries::{au, cn, de, dk, fr, it, nl, ro, tw};

use super::country::Country;
use super::error::LocalizedError;
use super::localized::LocalizedValidation;
use super::rule::Rule;

/// Run `rule` for `country` against `value`.
///
/// Returns `Ok(true)` / `Ok(false)` for the check's verdict, or
/// [`LocalizedError::NotImplemented`] when the country has no such rule.
pub fn validate(country: Country, rule: Rule, value: &str) -> Result<bool, LocalizedError> {
    log::trace!("running {rule} for {country}");

    let result = match country {
        Country::Au => check::<au::AuValidation>(rule, value),
        Country::Cn => check::<cn::CnValidation>(rule, value),
        Country::De => match rule {
            Rule::Address1 => Ok(de::address1(value)),
            Rule::Dob => Ok(de::dob(value)),
            _ => check::<de::DeValidation>(rule, value),
        },
        Country::Dk => check::<dk::DkValidation>(rule, value),
        Country::Fr => check::<fr::FrValidation>(rule, value),
        Country::It => match rule {
            Rule::CodiceFiscale => Ok(it::is_valid_italy_codice_fiscale(value)),
            _ => check::<it::ItValidation>(rule, value),
        },
        Country::Nl => check::<nl::NlValidation>(rule, value),
        Country::Ro => check::<ro::RoValidation>(rule, value),
        Country::Tw => match rule {
            Rule::Ubn => Ok(tw::is_valid_taiwan_ubn(value)),
            _ => check::<tw::TwValidation>(rule, value),
        },
    };

    if let Err(err) = &result {
        log::debug!("{err}");
    }
    result
}

/// Like [`validate`], with the country code and rule given by name.
///
/// ```
/// use localized::validate_code;
///
/// assert_eq!(validate_code("tw", "ubn", "04595257"), Ok(true));
/// assert!(validate_code("xx", "postal", "12345").is_err());
/// ```
pub fn validate_code(country: &str, rule: &str, value: &str) -> Result<bool, LocalizedError> {
    let country: Country = country
        .parse()
        .inspect_err(|_| log::warn!("unknown country code '{country}'"))?;
    let rule: Rule = rule
        .parse()
        .inspect_err(|_| log::warn!("unknown rule '{rule}'"))?;
    validate(country, rule, value)
}

/// Rules implemented for `country`.
pub fn supported_rules(country: Country) -> &'static [Rule] {
    use Rule::*;

    match country {
        Country::Au => &[Postal, Phone, Date, DateTime, Decimal],
        Country::Cn => &[Postal, Phone, PersonId, Date, DateTime, Decimal],
        Country::De => &[Postal, Phone, Address1, Dob, Date, DateTime, Decimal],
        Country::Dk => &[Postal, Phone, PersonId, Date, DateTime, Decimal],
        Country::Fr => &[Postal, Phone, PersonId, Date, DateTime, Decimal],
        Country::It => &[Postal, Phone, CodiceFiscale, Date, DateTime, Decimal],
        Country::Nl => &[Postal, Phone, PersonId, Date, DateTime, Decimal],
        Country::Ro => &[Postal, Date, DateTime, Decimal],
        Country::Tw => &[Postal, Phone, PersonId, Ubn, Date, DateTime, Decimal],
    }
}

fn check<V: LocalizedValidation>(rule: Rule, value: &str) -> Result<bool, LocalizedError> {
    match rule {
        Rule::Postal => V::postal(value),
        Rule::Phone => V::phone(value),
        Rule::PersonId => V::person_id(value),
        Rule::Date => Ok(V::date(value)),
        Rule::DateTime => Ok(V::date_time(value)),
        Rule::Decimal => Ok(V::decimal(value)),
        Rule::Address1 | Rule::Dob | Rule::CodiceFiscale | Rule::Ubn => {
            Err(LocalizedError::not_implemented(V::COUNTRY, rule))
        }
    }
}
