//! Decoded simulation output.

use pt_core::numeric::Real;
use serde::{Deserialize, Serialize};

/// One decoded simulation run: the response curve plus two summary metrics.
///
/// `times` and `outputs` are pairwise corresponding and always equal length.
/// Metrics default to 0.0 when the report omits them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub times: Vec<Real>,
    pub outputs: Vec<Real>,
    /// Overshoot, percent.
    pub overshoot: Real,
    /// Settle time, seconds.
    pub settle_time: Real,
}

impl SimulationResponse {
    /// True when there is no curve to display.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Number of (time, output) samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }
}
