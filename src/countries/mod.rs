//! Per-country rule sets.
//!
//! Each module exposes its checks as free functions plus a unit type
//! implementing [`LocalizedValidation`](crate::core::LocalizedValidation).

pub mod au;
pub mod cn;
pub mod de;
pub mod dk;
pub mod fr;
pub mod it;
pub mod nl;
pub mod ro;
pub mod tw;

pub use au::AuValidation;
pub use cn::CnValidation;
pub use de::DeValidation;
pub use dk::DkValidation;
pub use fr::FrValidation;
pub use it::ItValidation;
pub use nl::NlValidation;
pub use ro::RoValidation;
pub use tw::TwValidation;
