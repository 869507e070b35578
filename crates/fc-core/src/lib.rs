//! fc-core: shared foundation for the field-card toolkit.
//!
//! Contains:
//! - units (uom SI types + constructors for field measurements)
//! - numeric (Real + input guards + mean)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::FcError;
pub use numeric::*;
pub use units::*;
