//! Application service layer: the loop tying parameter changes to
//! simulation runs and render calls.
//!
//! Front ends (CLI or GUI) push widget events into the loop and implement
//! [`RenderSink`] to receive the resulting curve and metrics. The loop
//! guarantees exactly one render call per parameter change, never propagates
//! a failure outward, and never runs two invocations concurrently.

pub mod control_loop;
pub mod error;
pub mod render;

pub use control_loop::{ControlLoop, LoopState};
pub use error::{AppError, AppResult};
pub use render::RenderSink;
