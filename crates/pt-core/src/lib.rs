//! pt-core: stable foundation for pidtune.
//!
//! Contains:
//! - numeric (Real + rounding/formatting helpers)
//! - params (the shared gain-triple snapshot type)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod params;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use params::ParameterSet;
