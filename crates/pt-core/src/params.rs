//! The gain-triple snapshot passed to the simulation boundary.

use serde::{Deserialize, Serialize};

use crate::numeric::Real;

/// One immutable snapshot of the three PID gains.
///
/// Passed by value to the invocation boundary: a snapshot taken for one
/// invocation cannot be mutated for that invocation's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ParameterSet {
    pub kp: Real,
    pub ki: Real,
    pub kd: Real,
}

impl ParameterSet {
    pub fn new(kp: Real, ki: Real, kd: Real) -> Self {
        Self { kp, ki, kd }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        let p = ParameterSet::default();
        assert_eq!(p, ParameterSet::new(0.0, 0.0, 0.0));
    }
}
