//! End-to-end: store -> loop -> real child process -> render sink.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use pt_app::{ControlLoop, RenderSink};
use pt_invoke::Invoker;
use pt_params::{GainKind, ParameterStore};

fn stub_script(tag: &str, body: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pt-app-e2e-{tag}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("pid_simulation");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[derive(Default)]
struct CountingSink {
    curves: usize,
    empties: usize,
    last_metrics: Option<(f64, f64)>,
}

impl RenderSink for CountingSink {
    fn render(&mut self, _times: &[f64], _outputs: &[f64], overshoot: f64, settle_time: f64) {
        self.curves += 1;
        self.last_metrics = Some((overshoot, settle_time));
    }

    fn render_empty(&mut self) {
        self.empties += 1;
    }
}

#[test]
fn slider_change_runs_child_and_renders_curve() {
    let exe = stub_script(
        "curve",
        r#"echo "overshoot: 8.0%"
echo "time_settle: 1.25"
echo "0.0 0.0"
echo "0.1 0.2""#,
    );
    let mut cl = ControlLoop::new(
        ParameterStore::new(),
        Invoker::new(exe),
        CountingSink::default(),
    );

    cl.set_from_slider(GainKind::Kp, 1.0);
    assert_eq!(cl.sink().curves, 1);
    assert_eq!(cl.sink().empties, 0);
    assert_eq!(cl.sink().last_metrics, Some((8.0, 1.25)));
}

#[test]
fn failing_child_clears_display_exactly_once_per_change() {
    let exe = stub_script("fail", "echo 'diverged' >&2\nexit 1");
    let mut cl = ControlLoop::new(
        ParameterStore::new(),
        Invoker::new(exe),
        CountingSink::default(),
    );

    cl.set_from_slider(GainKind::Kp, 1.0);
    assert_eq!(cl.sink().empties, 1);

    // No retry: only the next change attempts again.
    cl.set_from_slider(GainKind::Kp, 1.1);
    assert_eq!(cl.sink().empties, 2);
    assert_eq!(cl.sink().curves, 0);
}
