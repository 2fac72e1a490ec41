//! Tests for the pure update rules.
//!
//! Tests cover:
//! - Hand-computed derivative values
//! - Multiplicative gating of weight change by the source activity
//! - Statelessness (identical inputs always give identical outputs)

use approx::assert_relative_eq;
use outstar::rules::{update_w, update_x, update_x0, ACTIVITY_DECAY, WEIGHT_DECAY};
use proptest::prelude::*;

#[test]
fn test_rate_constants() {
    assert_eq!(ACTIVITY_DECAY, 5.0);
    assert_eq!(WEIGHT_DECAY, 0.1);
}

#[test]
fn test_update_x0_values() {
    // Pure decay toward zero with no drive.
    assert_relative_eq!(update_x0(1.0, 0.0), -5.0);
    // Drive alone from rest.
    assert_relative_eq!(update_x0(0.0, 2.0), 2.0);
    // Equilibrium at x0 = i0 / 5.
    assert_relative_eq!(update_x0(0.4, 2.0), 0.0);
}

#[test]
fn test_update_x_values() {
    assert_relative_eq!(update_x(0.0, 0.0, 0.0, 0.0), 0.0);
    assert_relative_eq!(update_x(0.8, 0.0, 0.9, 0.0), -4.0);
    // Weighted source input adds on top of decay and direct drive.
    assert_relative_eq!(update_x(0.8, 0.4, 0.9, 0.8), -2.84, epsilon = 1e-12);
}

#[test]
fn test_update_w_values() {
    assert_relative_eq!(update_w(1.0, 0.9, 0.8), 0.71, epsilon = 1e-12);
    assert_relative_eq!(update_w(0.4, 0.25, 0.28), 0.102, epsilon = 1e-12);
}

#[test]
fn test_update_w_source_gating() {
    // A silent source freezes every weight no matter the sink activity.
    for (wi, xi) in [(0.9, 0.8), (0.0, 1.0), (-0.5, 0.3), (100.0, -100.0)] {
        assert_eq!(update_w(0.0, wi, xi), 0.0);
    }
}

proptest! {
    #[test]
    fn prop_update_x0_is_stateless(x0 in -1e6f64..1e6, i0 in -1e6f64..1e6) {
        prop_assert_eq!(update_x0(x0, i0), update_x0(x0, i0));
        prop_assert_eq!(update_x0(x0, i0), -5.0 * x0 + i0);
    }

    #[test]
    fn prop_update_x_is_stateless(
        xi in -1e6f64..1e6,
        x0 in -1e6f64..1e6,
        wi in -1e6f64..1e6,
        ii in -1e6f64..1e6,
    ) {
        prop_assert_eq!(update_x(xi, x0, wi, ii), update_x(xi, x0, wi, ii));
        prop_assert_eq!(update_x(xi, x0, wi, ii), -5.0 * xi + x0 * wi + ii);
    }

    #[test]
    fn prop_update_w_is_stateless(
        x0 in -1e6f64..1e6,
        wi in -1e6f64..1e6,
        xi in -1e6f64..1e6,
    ) {
        prop_assert_eq!(update_w(x0, wi, xi), update_w(x0, wi, xi));
        prop_assert_eq!(update_w(x0, wi, xi), x0 * (-0.1 * wi + xi));
    }

    #[test]
    fn prop_silent_source_freezes_weights(wi in -1e6f64..1e6, xi in -1e6f64..1e6) {
        prop_assert_eq!(update_w(0.0, wi, xi), 0.0);
    }
}
