//! Single-gain state: canonical value plus display text.

use pt_core::numeric::{DISPLAY_DECIMALS, Real, display_text, ensure_finite, round_to};
use serde::{Deserialize, Serialize};

/// Identifies one of the three tunable gains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GainKind {
    Kp,
    Ki,
    Kd,
}

impl GainKind {
    pub const ALL: [GainKind; 3] = [GainKind::Kp, GainKind::Ki, GainKind::Kd];

    /// Fixed domain bounds for this gain.
    pub fn bounds(self) -> (Real, Real) {
        match self {
            GainKind::Kp => (0.0, 2.0),
            GainKind::Ki => (0.0, 1.0),
            GainKind::Kd => (0.0, 2.0),
        }
    }

    /// Slider step used by interactive front ends.
    pub fn slider_step(self) -> Real {
        match self {
            GainKind::Kp | GainKind::Kd => 0.01,
            GainKind::Ki => 0.001,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GainKind::Kp => "Kp",
            GainKind::Ki => "Ki",
            GainKind::Kd => "Kd",
        }
    }
}

impl std::fmt::Display for GainKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for GainKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kp" => Ok(GainKind::Kp),
            "ki" => Ok(GainKind::Ki),
            "kd" => Ok(GainKind::Kd),
            other => Err(format!("unknown gain: {other} (expected kp, ki or kd)")),
        }
    }
}

/// One gain in both representations.
///
/// Invariants after any mutator returns:
/// - `value` lies within the kind's bounds
/// - `text` equals `value` rendered to exactly three fractional digits
#[derive(Debug, Clone, PartialEq)]
pub struct Gain {
    kind: GainKind,
    value: Real,
    text: String,
}

impl Gain {
    /// Create the gain at its session-start value of 0.0.
    pub fn new(kind: GainKind) -> Self {
        Self {
            kind,
            value: 0.0,
            text: display_text(0.0),
        }
    }

    pub fn kind(&self) -> GainKind {
        self.kind
    }

    pub fn value(&self) -> Real {
        self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Accept a raw slider position. Clamping is silent; never fails.
    pub fn set_from_slider(&mut self, raw: Real) {
        self.commit(raw);
    }

    /// Accept committed entry text.
    ///
    /// Unparsable (or non-finite) text is not preserved: the gain resets to
    /// 0.0 and the field re-renders as "0.000". Parsable out-of-range values
    /// snap to the nearest bound, exactly as the slider path.
    pub fn set_from_text(&mut self, raw: &str) {
        match raw.trim().parse::<Real>() {
            Ok(v) if ensure_finite(v, "gain text").is_ok() => self.commit(v),
            _ => self.commit(0.0),
        }
    }

    fn commit(&mut self, raw: Real) {
        let (min, max) = self.kind.bounds();
        self.value = round_to(raw.clamp(min, max), DISPLAY_DECIMALS);
        self.text = display_text(self.value);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn value_stays_in_bounds(raw in -10.0_f64..10.0_f64, idx in 0usize..3) {
            let kind = GainKind::ALL[idx];
            let (min, max) = kind.bounds();
            let mut g = Gain::new(kind);
            g.set_from_slider(raw);
            prop_assert!(g.value() >= min && g.value() <= max);
        }

        #[test]
        fn text_always_renders_canonical_value(raw in -10.0_f64..10.0_f64, idx in 0usize..3) {
            let kind = GainKind::ALL[idx];
            let mut g = Gain::new(kind);
            g.set_from_slider(raw);
            prop_assert_eq!(g.text(), format!("{:.3}", g.value()));
        }

        #[test]
        fn text_commit_matches_slider_commit(raw in -10.0_f64..10.0_f64, idx in 0usize..3) {
            let kind = GainKind::ALL[idx];
            let mut from_slider = Gain::new(kind);
            let mut from_text = Gain::new(kind);
            from_slider.set_from_slider(raw);
            from_text.set_from_text(&format!("{raw}"));
            prop_assert_eq!(from_slider, from_text);
        }
    }
}
