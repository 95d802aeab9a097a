//! Synchronous child-process invocation.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use pt_core::{ParameterSet, numeric::Real};
use pt_protocol::SimulationResponse;

use crate::error::{InvokeError, InvokeResult};
use crate::resolve;

/// The simulation capability consumed by the control loop.
///
/// Seam for tests and alternative backends; the production implementation is
/// [`Invoker`].
pub trait Simulate {
    fn simulate(&self, params: ParameterSet) -> InvokeResult<SimulationResponse>;
}

/// Runs the external simulation binary, one blocking call per snapshot.
#[derive(Debug, Clone)]
pub struct Invoker {
    exe: PathBuf,
}

impl Invoker {
    pub fn new(exe: PathBuf) -> Self {
        Self { exe }
    }

    /// Resolve the binary once and build the invoker around it.
    pub fn from_environment() -> InvokeResult<Self> {
        resolve::resolve_executable().map(Self::new)
    }

    pub fn executable(&self) -> &Path {
        &self.exe
    }

    /// One full invocation: spawn, block until exit, classify, parse.
    pub fn invoke(&self, params: ParameterSet) -> InvokeResult<SimulationResponse> {
        tracing::debug!(
            kp = params.kp,
            ki = params.ki,
            kd = params.kd,
            "invoking simulation"
        );

        let output = Command::new(&self.exe)
            .arg(gain_arg(params.kp))
            .arg(gain_arg(params.ki))
            .arg(gain_arg(params.kd))
            .stdin(Stdio::null())
            .output()
            .map_err(|source| InvokeError::Launch {
                path: self.exe.clone(),
                source,
            })?;

        if !output.status.success() {
            // Operator diagnostic channel: stderr is logged, never stored.
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!(
                status = %output.status,
                stderr = %stderr.trim(),
                "simulation process failed"
            );
            return Err(InvokeError::ProcessFailed {
                status: output.status,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(pt_protocol::parse(&stdout))
    }
}

impl Simulate for Invoker {
    fn simulate(&self, params: ParameterSet) -> InvokeResult<SimulationResponse> {
        self.invoke(params)
    }
}

/// Decimal argument string for one gain.
fn gain_arg(v: Real) -> String {
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gain_arg_is_plain_decimal() {
        assert_eq!(gain_arg(0.0), "0");
        assert_eq!(gain_arg(1.235), "1.235");
        assert_eq!(gain_arg(0.5), "0.5");
    }

    #[test]
    fn launch_failure_on_missing_binary() {
        let invoker = Invoker::new(PathBuf::from("/nonexistent/pid_simulation"));
        let err = invoker.invoke(ParameterSet::default()).unwrap_err();
        assert!(matches!(err, InvokeError::Launch { .. }));
    }
}
