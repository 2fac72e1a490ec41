//! Outstar - Fixed-step simulation of Grossberg's outstar circuit.
//!
//! An outstar is a small associative-learning network: one source node
//! broadcasts to four sink nodes through adaptable synaptic weights, and
//! learning drives the normalized weight pattern toward a fixed target
//! ratio vector. This crate advances the coupled source/sink/weight
//! system with explicit multi-rate forward Euler integration and renders
//! the sampled trajectories as time-series plots.
//!
//! # Architecture
//!
//! The crate is built around three pieces:
//!
//! - **Signal generators** ([`signal`]): pure functions mapping an
//!   integer step to the external drive on the source and sink nodes,
//!   in two hardcoded regimes.
//! - **Update rules** ([`rules`]): pure derivative functions for the
//!   source activity, the sink activities, and the weights.
//! - **Integrator** ([`integrator`]): the fixed-step Euler loop with
//!   separate step sizes for activities and weights, periodic sampling
//!   into a [`History`], and strict sequential update order.
//!
//! Plotting ([`plot`]) is a thin sink over the sampled history.
//!
//! # Examples
//!
//! ```
//! use outstar::{EulerIntegrator, OutstarState, Regime};
//!
//! let integrator = EulerIntegrator::new(0.00035, 0.1, 10_000);
//! let history = integrator.run(Regime::A, OutstarState::initial());
//!
//! assert_eq!(history.len(), 101);
//! // Normalized activities sum to 1 once the network is active.
//! let last: f64 = history.activity.last().unwrap().iter().sum();
//! assert!((last - 1.0).abs() < 1e-9);
//! ```
//!
//! # Determinism
//!
//! Every run is a closed-form computation over a fixed step count: no
//! randomness, no shared state between runs. Identical parameters yield
//! bit-identical histories.

// Module declarations
pub mod error;
pub mod integrator;
pub mod plot;
pub mod rules;
pub mod signal;
pub mod state;

// Re-exports for convenient access
pub use error::{OutstarError, Result};
pub use integrator::{EulerIntegrator, History, SAMPLE_INTERVAL};
pub use signal::{base_drive, regime_a, regime_b, regime_b_intended, Regime};
pub use state::{normalize, OutstarState, SinkVec, NUM_SINKS, THETA};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "Outstar";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(ver.contains("Outstar"));
        assert!(ver.contains("1.0.0"));
    }

    #[test]
    fn test_re_exports() {
        // Verify re-exports are accessible
        let _state = OutstarState::initial();
        let _result: Result<()> = Ok(());
        assert_eq!(NUM_SINKS, 4);
        assert_eq!(SAMPLE_INTERVAL, 100);
    }
}
