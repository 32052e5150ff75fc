// Exact segment-segment intersection using orientation tests.
// Classifies proper crossings, endpoint touches, parallel lines and collinear overlaps.

use super::tolerance::{clamp01, near_zero, EPS_DENOM, EPS_POS};
use crate::model::{Point, Segment};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossing {
    None,
    // Interior crossing (not at an endpoint of either segment)
    Proper { t: f64, u: f64, at: Point },
    // Meets at an endpoint of at least one segment; t/u clamped to [0,1]
    Touch { t: f64, u: f64, at: Point },
    // Distinct parallel lines
    Parallel,
    // Same line with a shared span: parameter ranges on each segment (ordered)
    CollinearOverlap { t0: f64, t1: f64, u0: f64, u1: f64 },
}

impl Crossing {
    pub fn point(&self) -> Option<Point> {
        match *self {
            Crossing::Proper { at, .. } | Crossing::Touch { at, .. } => Some(at),
            _ => None,
        }
    }

    pub fn is_parallel(&self) -> bool {
        matches!(self, Crossing::Parallel | Crossing::CollinearOverlap { .. })
    }
}

#[inline]
fn orient(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

// Parameter of `p` along `s` projected on the dominant axis of `s`.
fn param_on(s: &Segment, p: Point) -> f64 {
    let dx = s.x2 - s.x1;
    let dy = s.y2 - s.y1;
    if dx.abs() >= dy.abs() {
        if near_zero(dx, EPS_POS) { 0.0 } else { (p.x - s.x1) / dx }
    } else {
        (p.y - s.y1) / dy
    }
}

fn point_on_segment(s: &Segment, p: Point) -> Option<f64> {
    if !near_zero(orient(s.start(), s.end(), p), EPS_POS) {
        return None;
    }
    if s.is_degenerate() {
        return if near_zero(p.x - s.x1, EPS_POS) && near_zero(p.y - s.y1, EPS_POS) { Some(0.0) } else { None };
    }
    let t = param_on(s, p);
    if t >= -EPS_POS && t <= 1.0 + EPS_POS { Some(clamp01(t)) } else { None }
}

fn collinear_overlap(a: &Segment, b: &Segment) -> Crossing {
    let t_c = param_on(a, b.start());
    let t_d = param_on(a, b.end());
    let lo = t_c.min(t_d);
    let hi = t_c.max(t_d);
    if hi < -EPS_POS || lo > 1.0 + EPS_POS {
        return Crossing::Parallel;
    }
    let t0 = lo.max(0.0);
    let t1 = hi.min(1.0);
    let at = |t: f64| Point::new(a.x1 + t * (a.x2 - a.x1), a.y1 + t * (a.y2 - a.y1));
    let u0 = param_on(b, at(t0));
    let u1 = param_on(b, at(t1));
    let (u0, u1) = if u0 <= u1 { (u0, u1) } else { (u1, u0) };
    Crossing::CollinearOverlap { t0, t1, u0, u1 }
}

pub fn intersect_segments(a: &Segment, b: &Segment) -> Crossing {
    if !a.is_finite() || !b.is_finite() {
        return Crossing::None;
    }
    // A zero-length segment is a point: it touches the other segment or misses it.
    if a.is_degenerate() || b.is_degenerate() {
        let (pt, other, point_is_a) = if a.is_degenerate() { (a.start(), b, true) } else { (b.start(), a, false) };
        return match point_on_segment(other, pt) {
            Some(p) if point_is_a => Crossing::Touch { t: 0.0, u: p, at: pt },
            Some(p) => Crossing::Touch { t: p, u: 0.0, at: pt },
            None => Crossing::None,
        };
    }

    let (p, p2, q, q2) = (a.start(), a.end(), b.start(), b.end());
    let r_x = p2.x - p.x; let r_y = p2.y - p.y;
    let s_x = q2.x - q.x; let s_y = q2.y - q.y;
    let rxs = r_x * s_y - r_y * s_x;

    if near_zero(rxs, EPS_DENOM) {
        let o1 = orient(p, p2, q);
        let o2 = orient(p, p2, q2);
        if near_zero(o1, EPS_POS) && near_zero(o2, EPS_POS) {
            return collinear_overlap(a, b);
        }
        return Crossing::Parallel;
    }

    let qp_x = q.x - p.x; let qp_y = q.y - p.y;
    let t = (qp_x * s_y - qp_y * s_x) / rxs;
    let u = (qp_x * r_y - qp_y * r_x) / rxs;
    if t < -EPS_POS || t > 1.0 + EPS_POS || u < -EPS_POS || u > 1.0 + EPS_POS {
        return Crossing::None;
    }
    let at = Point::new(p.x + t * r_x, p.y + t * r_y);
    let is_touch = near_zero(t, EPS_POS) || near_zero(1.0 - t, EPS_POS) || near_zero(u, EPS_POS) || near_zero(1.0 - u, EPS_POS);
    if is_touch {
        Crossing::Touch { t: clamp01(t), u: clamp01(u), at }
    } else {
        Crossing::Proper { t, u, at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proper_cross() {
        let r = intersect_segments(&Segment::new(0.0, 0.0, 2.0, 2.0), &Segment::new(0.0, 2.0, 2.0, 0.0));
        match r { Crossing::Proper { t, u, at } => { assert!((t - 0.5).abs() < 1e-12 && (u - 0.5).abs() < 1e-12); assert_eq!(at, Point::new(1.0, 1.0)); }, _ => panic!("expected proper") }
    }

    #[test]
    fn endpoint_touch() {
        let r = intersect_segments(&Segment::new(0.0, 0.0, 1.0, 0.0), &Segment::new(1.0, 0.0, 1.0, 1.0));
        match r { Crossing::Touch { t, u, at } => { assert_eq!(at, Point::new(1.0, 0.0)); assert!((t - 1.0).abs() < 1e-9); assert!(u.abs() < 1e-9); }, _ => panic!("expected touch") }
    }

    #[test]
    fn vertical_against_horizontal() {
        let r = intersect_segments(&Segment::new(30.0, 0.0, 30.0, 100.0), &Segment::new(0.0, 50.0, 100.0, 50.0));
        assert_eq!(r.point(), Some(Point::new(30.0, 50.0)));
    }

    #[test]
    fn collinear_and_parallel() {
        let r = intersect_segments(&Segment::new(0.0, 0.0, 3.0, 0.0), &Segment::new(1.0, 0.0, 2.0, 0.0));
        match r { Crossing::CollinearOverlap { t0, t1, .. } => { assert!(t0 >= 0.33 && t1 <= 0.67); }, _ => panic!("expected overlap") }
        let p = intersect_segments(&Segment::new(0.0, 0.0, 3.0, 0.0), &Segment::new(0.0, 1.0, 3.0, 1.0));
        assert_eq!(p, Crossing::Parallel);
    }

    #[test]
    fn point_segment_on_line_touches() {
        let r = intersect_segments(&Segment::new(5.0, 5.0, 5.0, 5.0), &Segment::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(r.point(), Some(Point::new(5.0, 5.0)));
        let miss = intersect_segments(&Segment::new(5.0, 6.0, 5.0, 6.0), &Segment::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(miss, Crossing::None);
    }
}
