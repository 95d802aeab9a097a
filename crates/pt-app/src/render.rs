//! Render boundary consumed by the control loop.

use pt_core::numeric::Real;

/// Display collaborator: a plot canvas, a terminal table, a test recorder.
///
/// `render` delivers a non-empty curve with its metrics; `render_empty`
/// clears the curve and zeroes the metrics (shown as 0.00% / 0.00s).
pub trait RenderSink {
    fn render(&mut self, times: &[Real], outputs: &[Real], overshoot: Real, settle_time: Real);

    fn render_empty(&mut self);
}
