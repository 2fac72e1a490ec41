//! Command-line entry point: run both outstar simulations and save their
//! plots as `A.jpg` and `B.jpg` in the current directory.

use anyhow::Context;
use outstar::{plot, EulerIntegrator, OutstarState, Regime};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Euler step size for the activities.
const H1: f64 = 0.00035;
/// Euler step size for the weights.
const H2: f64 = 0.1;
/// Inclusive step bound.
const TB: u64 = 10_000;

fn main() -> anyhow::Result<()> {
    // Log to stderr so redirected stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("{}", outstar::version());

    let integrator = EulerIntegrator::new(H1, H2, TB);

    for regime in [Regime::A, Regime::B] {
        let history = integrator.run(regime, OutstarState::initial());

        let path = PathBuf::from(format!("{}.jpg", regime.label()));
        let title = format!("X(red), W(green), Theta(yellow) - regime {}", regime.label());
        plot::render(&history, &title, &path)
            .with_context(|| format!("rendering regime {} to {}", regime.label(), path.display()))?;
    }

    Ok(())
}
