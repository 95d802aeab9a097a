//! Parameter store for the three tunable PID gains.
//!
//! Each gain lives in two representations at once: a canonical `f64` and the
//! text shown in its entry field. The store owns both, keeps them in sync,
//! enforces the per-gain domain bounds, and notifies subscribers after every
//! mutation so the control loop can react.
//!
//! # Design Principles
//!
//! - **One source of truth**: display text is always re-rendered from the
//!   canonical value after a mutation, never the other way around
//! - **Silent correction**: out-of-range input clamps to the nearest bound,
//!   unparsable text resets the gain to zero
//! - **Unconditional notification**: every mutator call emits a change event,
//!   even when the resulting value is numerically identical

pub mod gain;
pub mod store;

pub use gain::{Gain, GainKind};
pub use store::{ChangeEvent, ParameterStore};
