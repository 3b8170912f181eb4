//! Country registry, rule dispatch and the locale adapter.
//!
//! The per-country checks live in [`crate::countries`]; this module holds the
//! shared trait they implement and the registry that routes
//! `(country, rule)` pairs to them.

mod country;
mod error;
pub mod locale;
mod localized;
pub(crate) mod pattern;
mod registry;
mod rule;

pub use country::*;
pub use error::*;
pub use localized::*;
pub use registry::*;
pub use rule::*;
