//! External drive signals for the outstar network.
//!
//! Two kinds of forcing act on the circuit every step: the base drive
//! `I0` on the source node, and a per-sink drive vector `I` produced by
//! one of two hardcoded regimes. All signals are pure functions of the
//! integer step number; nothing here carries state.
//!
//! # Regimes
//!
//! - **Regime A**: a shared base pulse of 2 on steps congruent to 2 or 3
//!   modulo 10, scaled per sink by the target ratios [`THETA`].
//! - **Regime B**: a full pattern vector on steps congruent to 2 modulo
//!   10, all-zero otherwise. The reference implementation meant to
//!   alternate two patterns with a 20-step period but an operator
//!   precedence slip makes the selector degenerate; see [`Regime::B`]
//!   and [`regime_b_intended`].

use crate::state::{SinkVec, NUM_SINKS, THETA};

/// Drive amplitude shared by the base pulse and regime A.
const PULSE: f64 = 2.0;

/// First regime-B drive pattern (steps 2, 22, 42, … under the intended
/// alternation).
pub const PATTERN_HIGH: SinkVec = [0.8, 0.6, 0.4, 0.2];

/// Second regime-B drive pattern (steps 12, 32, 52, … under the intended
/// alternation).
pub const PATTERN_ALT: SinkVec = [0.5, 0.5, 0.3, 0.7];

/// Base drive on the source node.
///
/// Returns 2.0 for the first two steps of every ten (`t mod 10` in
/// {0, 1}), 0.0 otherwise.
///
/// # Examples
///
/// ```
/// use outstar::signal::base_drive;
///
/// assert_eq!(base_drive(0), 2.0);
/// assert_eq!(base_drive(1), 2.0);
/// assert_eq!(base_drive(2), 0.0);
/// assert_eq!(base_drive(10), 2.0);
/// ```
pub fn base_drive(t: u64) -> f64 {
    if t % 10 <= 1 {
        PULSE
    } else {
        0.0
    }
}

/// The two hardcoded sink-drive policies.
///
/// A regime maps a step number to the external drive vector applied to
/// the sink nodes that step. Both are pure and total over `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Base pulse of 2 on steps 2, 3, 12, 13, 22, 23, …, scaled per sink
    /// by [`THETA`]; zero elsewhere.
    A,
    /// Pattern drive on steps 2, 12, 22, …; zero elsewhere.
    ///
    /// Reproduces the reference implementation literally: its selector
    /// `t - 2 % 20 != 0` parses as `t - (2 % 20) != 0`, i.e. `t != 2`,
    /// so [`PATTERN_ALT`] fires only at `t == 2` and every later trigger
    /// step emits [`PATTERN_HIGH`]. The intended 20-step alternation is
    /// available as [`regime_b_intended`].
    B,
}

impl Regime {
    /// Sink drive vector for step `t`.
    pub fn drive(&self, t: u64) -> SinkVec {
        match self {
            Regime::A => regime_a(t),
            Regime::B => regime_b(t),
        }
    }

    /// Short label used for log events and output file names.
    pub fn label(&self) -> &'static str {
        match self {
            Regime::A => "A",
            Regime::B => "B",
        }
    }
}

/// Regime-A drive: `THETA[i] * base` where the base pulse is 2 on steps
/// congruent to 2 or 3 modulo 10 and 0 otherwise.
pub fn regime_a(t: u64) -> SinkVec {
    let base = if t % 10 == 2 || t % 10 == 3 {
        PULSE
    } else {
        0.0
    };
    THETA.map(|theta_i| theta_i * base)
}

/// Regime-B drive, literal reference behavior.
///
/// On trigger steps (`t mod 10 == 2`) emits [`PATTERN_ALT`] at `t == 2`
/// and [`PATTERN_HIGH`] on every later trigger; zero off-trigger.
pub fn regime_b(t: u64) -> SinkVec {
    if t % 10 != 2 {
        return [0.0; NUM_SINKS];
    }
    if t != 2 {
        PATTERN_HIGH
    } else {
        PATTERN_ALT
    }
}

/// Regime-B drive as documented in the reference's comments: alternate
/// between the two patterns with a 20-step period, [`PATTERN_HIGH`] at
/// t = 2, 22, 42, … and [`PATTERN_ALT`] at t = 12, 32, 52, ….
///
/// Not wired into the shipped simulation; provided so the intended
/// behavior stays testable alongside the literal one.
pub fn regime_b_intended(t: u64) -> SinkVec {
    if t % 10 != 2 {
        return [0.0; NUM_SINKS];
    }
    if (t - 2) % 20 == 0 {
        PATTERN_HIGH
    } else {
        PATTERN_ALT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_drive_period() {
        for t in 0..100 {
            let expected = if t % 10 <= 1 { 2.0 } else { 0.0 };
            assert_eq!(base_drive(t), expected, "t = {}", t);
        }
    }

    #[test]
    fn test_regime_labels() {
        assert_eq!(Regime::A.label(), "A");
        assert_eq!(Regime::B.label(), "B");
    }

    #[test]
    fn test_regime_dispatch() {
        assert_eq!(Regime::A.drive(2), regime_a(2));
        assert_eq!(Regime::B.drive(12), regime_b(12));
    }
}
