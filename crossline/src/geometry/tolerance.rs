// Tolerances for the exact (orientation-based) intersection mode.
// The literal slope scan uses none: it compares slopes with `==`.

pub const EPS_POS: f64 = 1e-9;            // endpoint coincidence threshold (units)
pub const EPS_DENOM: f64 = 1e-12;         // cross-product guard for parallel directions

#[inline] pub fn near_zero(x: f64, eps: f64) -> bool { x.abs() <= eps }
#[inline] pub fn clamp01(x: f64) -> f64 { x.max(0.0).min(1.0) }
