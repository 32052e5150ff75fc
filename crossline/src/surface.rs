use crate::config::SceneConfig;
use crate::model::{Point, Segment};
use serde::{Deserialize, Serialize};

/// Immediate-mode 2D drawing target. Implementations are not reentrant and
/// are only driven from a pointer callback or a frame tick.
pub trait RenderSurface {
    fn clear(&mut self);
    fn draw_segment(&mut self, s: &Segment);
    fn draw_marker(&mut self, at: Point);
    /// Pick up new size/style settings. Surfaces without styling ignore it.
    fn configure(&mut self, _cfg: &SceneConfig) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    Clear,
    Segment(Segment),
    Marker(Point),
}

/// Surface that keeps the ops it was asked to perform.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    /// Ops since the most recent clear, i.e. what is visible right now.
    pub fn visible(&self) -> &[DrawOp] {
        let from = self.ops.iter().rposition(|op| *op == DrawOp::Clear).map_or(0, |i| i + 1);
        &self.ops[from..]
    }

    pub fn visible_markers(&self) -> Vec<Point> {
        self.visible().iter().filter_map(|op| match op { DrawOp::Marker(p) => Some(*p), _ => None }).collect()
    }

    pub fn visible_segments(&self) -> Vec<Segment> {
        self.visible().iter().filter_map(|op| match op { DrawOp::Segment(s) => Some(*s), _ => None }).collect()
    }

    pub fn clear_count(&self) -> usize { self.ops.iter().filter(|op| **op == DrawOp::Clear).count() }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self) { self.ops.push(DrawOp::Clear); }
    fn draw_segment(&mut self, s: &Segment) { self.ops.push(DrawOp::Segment(*s)); }
    fn draw_marker(&mut self, at: Point) { self.ops.push(DrawOp::Marker(at)); }
}
