//! # localized
//!
//! Per-country field validators: postal codes, phone numbers, national
//! identification numbers and business numbers, plus locale-aware date and
//! decimal checks.
//!
//! Every check is a pure `&str -> bool` function. Input that does not have
//! the required shape is simply invalid; no check panics.
//!
//! ## Quick Start
//!
//! ```rust
//! use localized::*;
//!
//! assert!(is_valid_china_id("110101199003074477"));
//! assert!(is_valid_france_nir("180010101000183"));
//! assert!(is_valid_italy_codice_fiscale("RSSMRA85T10A562S"));
//! assert!(is_valid_taiwan_national_id("A123456789"));
//! assert!(is_valid_taiwan_ubn("04595257"));
//!
//! // Table-driven access by country and rule
//! assert_eq!(validate(Country::De, Rule::Postal, "10115"), Ok(true));
//! assert_eq!(validate_code("nl", "postal", "1234 AB"), Ok(true));
//! assert!(validate(Country::Au, Rule::PersonId, "x").is_err());
//! ```
//!
//! ## Countries
//!
//! | Country | Rules |
//! |---------|-------|
//! | AU | postal, phone |
//! | CN | postal, phone, person_id (GB 11643-1999 checksum) |
//! | DE | postal, phone, address1, dob |
//! | DK | postal, phone, person_id (CPR shape) |
//! | FR | postal, phone, person_id (NIR checksum) |
//! | IT | postal, phone, codice_fiscale (checksum) |
//! | NL | postal, phone, person_id (BSN shape) |
//! | RO | postal |
//! | TW | postal, phone, person_id (checksum), ubn (checksum) |
//!
//! Every country also supports `date`, `date_time` and `decimal` in its own
//! locale.

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod countries;

#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "core")]
pub use crate::countries::cn::is_valid_china_id;
#[cfg(feature = "core")]
pub use crate::countries::fr::is_valid_france_nir;
#[cfg(feature = "core")]
pub use crate::countries::it::is_valid_italy_codice_fiscale;
#[cfg(feature = "core")]
pub use crate::countries::tw::{is_valid_taiwan_national_id, is_valid_taiwan_ubn};
