//! Boundary to the external simulation executable.
//!
//! One invocation = one synchronous child process run: build the argument
//! vector from a parameter snapshot, capture stdout and stderr, classify the
//! exit, and hand successful stdout to the protocol parser. The child handle
//! and its buffers live only for the duration of the call; the process is
//! reaped before `invoke` returns.
//!
//! The executable's location is resolved once at startup and treated as
//! immutable configuration; a missing binary at resolution time is a fatal
//! startup condition, not a per-invocation error.

pub mod error;
pub mod invoker;
pub mod resolve;

pub use error::{InvokeError, InvokeResult};
pub use invoker::{Invoker, Simulate};
pub use resolve::{SIM_ENV_VAR, resolve_executable};
