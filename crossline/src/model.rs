use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point { Point { x, y } }
    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

/// Stable handle for a committed segment. Ids are handed out in creation
/// order and never reused by the scene that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SegmentId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment { Segment { x1, y1, x2, y2 } }

    pub fn between(a: Point, b: Point) -> Segment { Segment::new(a.x, a.y, b.x, b.y) }

    pub fn start(&self) -> Point { Point::new(self.x1, self.y1) }
    pub fn end(&self) -> Point { Point::new(self.x2, self.y2) }

    /// Line slope `dy/dx`. Vertical segments yield +/-inf, zero-length ones NaN.
    pub fn slope(&self) -> f64 { (self.y2 - self.y1) / (self.x2 - self.x1) }

    pub fn is_finite(&self) -> bool { self.start().is_finite() && self.end().is_finite() }

    pub fn is_degenerate(&self) -> bool { self.x1 == self.x2 && self.y1 == self.y2 }

    /// Swap endpoints so that `x1 <= x2`.
    pub fn normalize(&mut self) {
        if self.x1 > self.x2 {
            std::mem::swap(&mut self.x1, &mut self.x2);
            std::mem::swap(&mut self.y1, &mut self.y2);
        }
    }
}
