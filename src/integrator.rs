//! Multi-rate forward Euler integrator for the outstar circuit.
//!
//! Advances the coupled source/sink/weight system in fixed integer steps
//! with two step sizes: `h1` for the activities and `h2` for the weights.
//! The update order within a step is sequential, not simultaneous: the
//! sink update reads the already-advanced source activity, and the weight
//! update reads the already-advanced source and sink activities. This
//! ordering is part of the numerical contract and must not be reordered.
//!
//! Every `sample_interval` steps the normalized activity and weight
//! vectors are appended to a [`History`] for later rendering.
//!
//! # Examples
//!
//! ```
//! use outstar::{EulerIntegrator, OutstarState, Regime};
//!
//! let integrator = EulerIntegrator::new(0.00035, 0.1, 10_000);
//! let history = integrator.run(Regime::A, OutstarState::initial());
//!
//! // Steps 0, 100, 200, ..., 10000.
//! assert_eq!(history.len(), 101);
//! ```

use crate::rules::{update_w, update_x, update_x0};
use crate::signal::{base_drive, Regime};
use crate::state::{normalize, OutstarState, SinkVec, THETA};
use itertools::izip;
use tracing::{debug, info};

/// Default sampling period, in integration steps.
pub const SAMPLE_INTERVAL: u64 = 100;

/// Sampled trajectory of one simulation run.
///
/// Three index-aligned series of normalized 4-vectors plus the step
/// number each sample was taken at. The theta series is constant but
/// recorded per sample so the plotting sink can treat all three series
/// uniformly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    /// Step numbers at which samples were taken (0, 100, 200, …).
    pub steps: Vec<u64>,
    /// Normalized sink activity vectors `X`.
    pub activity: Vec<SinkVec>,
    /// Normalized weight vectors `W`.
    pub weight: Vec<SinkVec>,
    /// Target ratios, replicated per sample.
    pub theta: Vec<SinkVec>,
}

impl History {
    fn with_capacity(n: usize) -> Self {
        Self {
            steps: Vec::with_capacity(n),
            activity: Vec::with_capacity(n),
            weight: Vec::with_capacity(n),
            theta: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, t: u64, activity: SinkVec, weight: SinkVec) {
        self.steps.push(t);
        self.activity.push(activity);
        self.weight.push(weight);
        self.theta.push(THETA);
    }

    /// Number of samples recorded. All four buffers share this length.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when no samples have been recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Fixed-step multi-rate Euler integrator.
///
/// Holds the two step sizes, the inclusive step bound, and the sampling
/// period. Running it consumes an initial [`OutstarState`] and produces a
/// [`History`]; the integrator itself carries no mutable state and can
/// drive any number of runs.
#[derive(Debug, Clone, Copy)]
pub struct EulerIntegrator {
    /// Step size for the source and sink activities.
    h1: f64,
    /// Step size for the weights.
    h2: f64,
    /// Inclusive upper step bound.
    tb: u64,
    /// Sampling period in steps.
    sample_interval: u64,
}

impl EulerIntegrator {
    /// Create an integrator with the default sampling period of
    /// [`SAMPLE_INTERVAL`] steps.
    ///
    /// # Arguments
    ///
    /// * `h1` - Euler step size for `x0` and `x`
    /// * `h2` - Euler step size for `w`
    /// * `tb` - inclusive upper bound on the step counter
    ///
    /// # Panics
    ///
    /// Panics if `h1` or `h2` is not strictly positive.
    pub fn new(h1: f64, h2: f64, tb: u64) -> Self {
        Self::with_sample_interval(h1, h2, tb, SAMPLE_INTERVAL)
    }

    /// Create an integrator with an explicit sampling period.
    ///
    /// # Panics
    ///
    /// Panics if `h1` or `h2` is not strictly positive, or if
    /// `sample_interval` is zero.
    pub fn with_sample_interval(h1: f64, h2: f64, tb: u64, sample_interval: u64) -> Self {
        assert!(h1 > 0.0, "h1 must be strictly positive");
        assert!(h2 > 0.0, "h2 must be strictly positive");
        assert!(sample_interval > 0, "sample_interval must be nonzero");

        Self {
            h1,
            h2,
            tb,
            sample_interval,
        }
    }

    /// Activity step size.
    pub fn h1(&self) -> f64 {
        self.h1
    }

    /// Weight step size.
    pub fn h2(&self) -> f64 {
        self.h2
    }

    /// Inclusive step bound.
    pub fn tb(&self) -> u64 {
        self.tb
    }

    /// Run one simulation from `state` under the given drive regime.
    ///
    /// Executes steps `0..=tb`. Each step computes the base drive and the
    /// regime drive for the current step, advances `x0`, then each sink
    /// activity against the new `x0`, then each weight against the new
    /// `x0` and `x`, normalizes, and samples every `sample_interval`
    /// steps. Deterministic: identical inputs produce a bit-identical
    /// [`History`].
    pub fn run(&self, regime: Regime, state: OutstarState) -> History {
        let OutstarState { mut x0, mut x, mut w } = state;

        let capacity = (self.tb / self.sample_interval + 1) as usize;
        let mut history = History::with_capacity(capacity);

        info!(
            regime = regime.label(),
            h1 = self.h1,
            h2 = self.h2,
            tb = self.tb,
            "starting outstar run"
        );

        for t in 0..=self.tb {
            let i0 = base_drive(t);
            let i = regime.drive(t);

            // Sequential Euler step: x0 first, then x against the new
            // x0, then w against the new x0 and x.
            x0 += self.h1 * update_x0(x0, i0);

            for (xk, wk, ik) in izip!(x.iter_mut(), &w, &i) {
                *xk += self.h1 * update_x(*xk, x0, *wk, *ik);
            }

            for (wk, xk) in izip!(w.iter_mut(), &x) {
                *wk += self.h2 * update_w(x0, *wk, *xk);
            }

            if t % self.sample_interval == 0 {
                history.push(t, normalize(x), normalize(w));
                debug!(t, x0, "sampled state");
            }
        }

        info!(
            regime = regime.label(),
            samples = history.len(),
            "outstar run complete"
        );

        history
    }
}
