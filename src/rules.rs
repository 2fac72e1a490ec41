//! Differential update rules for the outstar circuit.
//!
//! Three pure functions computing instantaneous derivatives: source
//! activity, sink activity, and synaptic weight. Each is called once per
//! unit per integration step by [`crate::integrator::EulerIntegrator`].
//!
//! Weight change is gated multiplicatively by the source activity, so
//! weights are inert whenever the source is silent.

/// Decay rate for the source and sink activities.
pub const ACTIVITY_DECAY: f64 = 5.0;

/// Decay rate for the synaptic weights.
pub const WEIGHT_DECAY: f64 = 0.1;

/// Derivative of the source activity: decay plus external base drive.
///
/// `dx0/dt = -ACTIVITY_DECAY * x0 + i0`
#[inline]
pub fn update_x0(x0: f64, i0: f64) -> f64 {
    -ACTIVITY_DECAY * x0 + i0
}

/// Derivative of one sink activity: decay, weighted input from the
/// source, and direct external drive.
///
/// `dxi/dt = -ACTIVITY_DECAY * xi + x0 * wi + ii`
#[inline]
pub fn update_x(xi: f64, x0: f64, wi: f64, ii: f64) -> f64 {
    -ACTIVITY_DECAY * xi + x0 * wi + ii
}

/// Derivative of one synaptic weight: decay plus Hebbian correlation,
/// gated by the source activity.
///
/// `dwi/dt = x0 * (-WEIGHT_DECAY * wi + xi)`
#[inline]
pub fn update_w(x0: f64, wi: f64, xi: f64) -> f64 {
    x0 * (-WEIGHT_DECAY * wi + xi)
}
