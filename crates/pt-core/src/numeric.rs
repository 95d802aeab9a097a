use crate::{CoreError, CoreResult};

/// Floating point type used throughout system
pub type Real = f64;

/// Fractional digits used for gain display and commit rounding.
pub const DISPLAY_DECIMALS: u32 = 3;

/// Round to a fixed number of fractional digits.
pub fn round_to(v: Real, decimals: u32) -> Real {
    let scale = 10f64.powi(decimals as i32);
    (v * scale).round() / scale
}

/// Render a value with the fixed gain display precision.
pub fn display_text(v: Real) -> String {
    format!("{v:.prec$}", prec = DISPLAY_DECIMALS as usize)
}

pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}
