//! Network state for the outstar circuit.
//!
//! The outstar network has one source node with activity `x0` broadcasting
//! to [`NUM_SINKS`] sink nodes through adaptable synaptic weights. Sink
//! activities, weights, and the fixed target ratios `THETA` are all
//! index-aligned fixed-size arrays, so the "exactly four elements"
//! invariant holds by construction.

/// Number of sink nodes driven by the single source node.
pub const NUM_SINKS: usize = 4;

/// A 4-vector indexed by sink node.
pub type SinkVec = [f64; NUM_SINKS];

/// Target activity ratios the network is trained to reproduce.
///
/// Normalized pattern (sums to 1.0); never mutated.
pub const THETA: SinkVec = [0.4, 0.3, 0.2, 0.1];

/// Full mutable state of one simulation run.
///
/// Holds the source activity, the sink activities, and the synaptic
/// weights. Each run starts from [`OutstarState::initial`] and the state
/// is discarded once the run's history has been sampled.
///
/// # Examples
///
/// ```
/// use outstar::state::OutstarState;
///
/// let state = OutstarState::initial();
/// assert_eq!(state.x0, 0.0);
/// assert_eq!(state.x[0], 0.8);
/// assert_eq!(state.w[3], 0.12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutstarState {
    /// Source node activity.
    pub x0: f64,
    /// Sink node activities, index-aligned with `w` and [`THETA`].
    pub x: SinkVec,
    /// Synaptic strengths from the source to each sink node.
    pub w: SinkVec,
}

impl OutstarState {
    /// The standard initial condition used by both simulation runs.
    pub fn initial() -> Self {
        Self {
            x0: 0.0,
            x: [0.8, 0.6, 0.28, 0.15],
            w: [0.9, 0.7, 0.25, 0.12],
        }
    }

    /// Create a state from explicit components.
    pub fn new(x0: f64, x: SinkVec, w: SinkVec) -> Self {
        Self { x0, x, w }
    }
}

/// Normalize a sink vector by its element sum.
///
/// Returns `v / sum(v)` elementwise, or the all-zero vector when the sum
/// is exactly `0.0` (guards the divide; note that a sum that cancels to
/// zero from mixed signs collapses to zero the same way).
///
/// # Examples
///
/// ```
/// use outstar::state::normalize;
///
/// let n = normalize([2.0, 1.0, 1.0, 0.0]);
/// assert_eq!(n, [0.5, 0.25, 0.25, 0.0]);
///
/// assert_eq!(normalize([0.0; 4]), [0.0; 4]);
/// ```
pub fn normalize(v: [f64; NUM_SINKS]) -> [f64; NUM_SINKS] {
    let sum: f64 = v.iter().sum();
    if sum == 0.0 {
        return [0.0; NUM_SINKS];
    }
    v.map(|vi| vi / sum)
}
