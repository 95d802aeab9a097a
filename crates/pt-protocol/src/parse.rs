//! Line classifier for the simulation report.

use pt_core::numeric::Real;

use crate::response::SimulationResponse;

const OVERSHOOT_LABEL: &str = "overshoot:";
const SETTLE_LABEL: &str = "time_settle:";

/// Decode raw stdout into a [`SimulationResponse`].
///
/// Each line is classified independently, in order. Metric lines that fail to
/// parse leave the metric at 0.0; data lines that are not exactly two floats
/// contribute nothing to the series. Empty input yields an empty response.
pub fn parse(raw: &str) -> SimulationResponse {
    let mut resp = SimulationResponse::default();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with(OVERSHOOT_LABEL) {
            resp.overshoot = metric_value(line, |tok| tok.trim_end_matches('%'));
            continue;
        }

        if line.starts_with(SETTLE_LABEL) {
            resp.settle_time = metric_value(line, |tok| tok);
            continue;
        }

        let mut tokens = line.split_whitespace();
        if let (Some(a), Some(b), None) = (tokens.next(), tokens.next(), tokens.next())
            && let (Ok(t), Ok(out)) = (a.parse::<Real>(), b.parse::<Real>())
        {
            resp.times.push(t);
            resp.outputs.push(out);
        }
        // Any other shape is data attrition: dropped without comment.
    }

    resp
}

/// Value of a labelled metric line: the token after the label, optionally
/// cleaned up first. Missing or unparsable tokens read as 0.0.
fn metric_value(line: &str, clean: impl Fn(&str) -> &str) -> Real {
    line.split_whitespace()
        .nth(1)
        .and_then(|tok| clean(tok).parse::<Real>().ok())
        .unwrap_or(0.0)
}
