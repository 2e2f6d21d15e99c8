//! Integrates the Stuart-Landau oscillator from x = 1 + 0i over [0, 10] with
//! dt = 0.1 and streams `t  re(x)  im(x)` lines to stdout.
//!
//! Run with `RUST_LOG=debug` to see the driver's log lines on stderr.

use anyhow::{Context, Result};
use drift_core::{integrate_fixed, IntegrationSettings, StreamingObserver, StuartLandau, RK4};
use num_complex::Complex;
use std::io::{self, BufWriter};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let system = StuartLandau::default();
    let settings = IntegrationSettings::default();
    let mut state = [Complex::new(1.0, 0.0)];

    let stdout = io::stdout();
    let mut observer = StreamingObserver::new(BufWriter::new(stdout.lock()));
    let steps = integrate_fixed(
        &mut RK4::new(state.len()),
        system,
        &mut state,
        settings.t_start,
        settings.t_end,
        settings.dt,
        &mut observer,
    )?;
    observer.finish().context("failed to write trajectory")?;

    tracing::info!(steps, "done");
    Ok(())
}
