use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use pt_app::{AppError, AppResult, ControlLoop, RenderSink};
use pt_invoke::Invoker;
use pt_params::{GainKind, ParameterStore};
use pt_protocol::SimulationResponse;

#[derive(Parser)]
#[command(name = "pt-cli")]
#[command(about = "pidtune CLI - headless PID gain tuning front end", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the simulation executable and report where it lives
    Check,
    /// Run one simulation for a gain triple
    Run {
        /// Proportional gain (clamped to [0, 2])
        #[arg(long, default_value_t = 0.0)]
        kp: f64,
        /// Integral gain (clamped to [0, 1])
        #[arg(long, default_value_t = 0.0)]
        ki: f64,
        /// Derivative gain (clamped to [0, 2])
        #[arg(long, default_value_t = 0.0)]
        kd: f64,
        /// Print the full response as JSON instead of a summary
        #[arg(long)]
        json: bool,
        /// Write the response curve as CSV (use "-" for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Step one gain across a range, one simulation per step
    Sweep {
        /// Gain to sweep: kp, ki or kd
        gain: GainKind,
        /// Range start (clamped per gain)
        #[arg(long)]
        from: f64,
        /// Range end (clamped per gain)
        #[arg(long)]
        to: f64,
        /// Number of steps, endpoints included. Defaults to one step per
        /// slider tick across the range.
        #[arg(long)]
        steps: Option<usize>,
    },
}

/// Sink that keeps the last rendered state for printing after the run.
#[derive(Default)]
struct CaptureSink {
    last: Option<SimulationResponse>,
}

impl RenderSink for CaptureSink {
    fn render(&mut self, times: &[f64], outputs: &[f64], overshoot: f64, settle_time: f64) {
        self.last = Some(SimulationResponse {
            times: times.to_vec(),
            outputs: outputs.to_vec(),
            overshoot,
            settle_time,
        });
    }

    fn render_empty(&mut self) {
        self.last = Some(SimulationResponse::default());
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check => cmd_check(),
        Commands::Run {
            kp,
            ki,
            kd,
            json,
            output,
        } => cmd_run(kp, ki, kd, json, output.as_deref()),
        Commands::Sweep {
            gain,
            from,
            to,
            steps,
        } => cmd_sweep(gain, from, to, steps),
    }
}

fn cmd_check() -> AppResult<()> {
    let invoker = Invoker::from_environment()?;
    println!("✓ Simulation executable: {}", invoker.executable().display());
    Ok(())
}

fn cmd_run(kp: f64, ki: f64, kd: f64, json: bool, output: Option<&Path>) -> AppResult<()> {
    let invoker = Invoker::from_environment()?;

    // Values go through the same clamp/round path as interactive edits.
    let mut store = ParameterStore::new();
    store.set_from_slider(GainKind::Kp, kp);
    store.set_from_slider(GainKind::Ki, ki);
    store.set_from_slider(GainKind::Kd, kd);
    let params = store.snapshot();

    let mut control = ControlLoop::new(store, invoker, CaptureSink::default());
    control.refresh();

    let resp = control
        .sink()
        .last
        .clone()
        .unwrap_or_default();

    if json {
        let text = serde_json::to_string_pretty(&resp)
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;
        println!("{text}");
    } else {
        println!("Kp={} Ki={} Kd={}", params.kp, params.ki, params.kd);
        println!("  overshoot:   {:.2}%", resp.overshoot);
        println!("  settle time: {:.2}s", resp.settle_time);
        println!("  samples:     {}", resp.len());
    }

    if let Some(path) = output {
        export_csv(&resp, path)?;
    }
    Ok(())
}

fn cmd_sweep(gain: GainKind, from: f64, to: f64, steps: Option<usize>) -> AppResult<()> {
    let invoker = Invoker::from_environment()?;
    let mut control = ControlLoop::new(ParameterStore::new(), invoker, CaptureSink::default());

    println!("{:>8}  {:>10}  {:>12}", gain.label(), "overshoot", "settle time");
    let steps = steps
        .unwrap_or_else(|| ((to - from).abs() / gain.slider_step()).round() as usize + 1)
        .max(2);
    for i in 0..steps {
        let frac = i as f64 / (steps - 1) as f64;
        let raw = from + frac * (to - from);
        // One invocation per tick, serially, in order.
        control.set_from_slider(gain, raw);

        let value = control.store().gain(gain).value();
        let resp = control.sink().last.clone().unwrap_or_default();
        if resp.is_empty() {
            println!("{value:>8.3}  {:>10}  {:>12}", "-", "-");
        } else {
            println!(
                "{value:>8.3}  {:>9.2}%  {:>11.2}s",
                resp.overshoot, resp.settle_time
            );
        }
    }
    Ok(())
}

fn export_csv(resp: &SimulationResponse, path: &Path) -> AppResult<()> {
    let mut out: Box<dyn Write> = if path == Path::new("-") {
        Box::new(io::stdout())
    } else {
        Box::new(std::fs::File::create(path)?)
    };

    writeln!(out, "time,output")?;
    for (t, y) in resp.times.iter().zip(&resp.outputs) {
        writeln!(out, "{t},{y}")?;
    }
    Ok(())
}
