//! Wire protocol for the simulation executable's stdout.
//!
//! The executable prints a line-oriented report: two labelled metric lines
//! (`overshoot:`, `time_settle:`) and any number of two-column data lines
//! forming the response curve. This crate decodes that text into a typed
//! [`SimulationResponse`].
//!
//! Decoding is total: malformed lines are dropped and missing metrics default
//! to zero, so the parser itself never fails. Process-level failures are the
//! invoker's concern, not this crate's.

pub mod parse;
pub mod response;

pub use parse::parse;
pub use response::SimulationResponse;
