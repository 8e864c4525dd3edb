//! ddgs-core: stable foundation for the DDGS balance workspace.
//!
//! Contains:
//! - units (uom SI types + t/h and percent constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
