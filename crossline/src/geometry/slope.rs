// Slope/intercept form used by the literal intersection scan.
// All arithmetic is plain IEEE-754: vertical lines give infinite slopes,
// zero-length segments NaN, and those values are allowed to flow through.

use crate::model::{Point, Segment};

/// y-intercept `b` of the line `y = k*x + b` through the segment start.
#[inline]
pub fn intercept(s: &Segment, k: f64) -> f64 { s.y1 - k * s.x1 }

/// Crossing point of two lines in slope/intercept form. Callers must have
/// rejected `k1 == k2` already; otherwise the result is non-finite.
#[inline]
pub fn line_crossing(k1: f64, b1: f64, k2: f64, b2: f64) -> Point {
    let x = (b2 - b1) / (k1 - k2);
    let y = (k1 * (b2 - b1) / (k1 - k2)) + b1;
    Point::new(x, y)
}

/// Strict span test on the x axis: `x` lies strictly between the two endpoint
/// x-coordinates in either ordering. NaN never passes.
#[inline]
pub fn strictly_spans_x(s: &Segment, x: f64) -> bool {
    (x < s.x2 && s.x1 < x) || (x < s.x1 && s.x2 < x)
}
