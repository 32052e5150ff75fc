use crate::algorithms::intersections;
use crate::config::ScanOptions;
use crate::model::{Point, Segment, SegmentId};
use crate::pointer::PointerState;
use crate::surface::RenderSurface;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentSlot {
    pub id: SegmentId,
    pub segment: Segment,
}

/// The single owner of drawn geometry for one surface.
pub struct Scene {
    pub(crate) slots: Vec<SegmentSlot>,  // creation order
    pub(crate) next_id: u32,
    pub(crate) pointer: PointerState,
    pub(crate) scan: ScanOptions,
    pub(crate) geom_ver: u64,
}

impl Default for Scene {
    fn default() -> Self { Scene::new(ScanOptions::default()) }
}

impl Scene {
    pub fn new(scan: ScanOptions) -> Scene {
        Scene { slots: Vec::new(), next_id: 0, pointer: PointerState::default(), scan, geom_ver: 1 }
    }

    /// Monotonic geometry version; increments on any segment change.
    pub fn geom_version(&self) -> u64 { self.geom_ver }

    fn bump(&mut self) { self.geom_ver = self.geom_ver.wrapping_add(1); }

    pub fn set_scan_options(&mut self, scan: ScanOptions) { self.scan = scan; }

    pub fn pointer(&self) -> &PointerState { &self.pointer }

    pub fn segment_count(&self) -> usize { self.slots.len() }
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    pub fn slots(&self) -> &[SegmentSlot] { &self.slots }

    pub fn segments(&self) -> Vec<Segment> { self.slots.iter().map(|s| s.segment).collect() }

    pub fn ids(&self) -> Vec<SegmentId> { self.slots.iter().map(|s| s.id).collect() }

    pub fn segment(&self, id: SegmentId) -> Option<Segment> {
        self.slots.iter().find(|s| s.id == id).map(|s| s.segment)
    }

    pub fn contains(&self, id: SegmentId) -> bool { self.slots.iter().any(|s| s.id == id) }

    pub fn add_segment(&mut self, segment: Segment) -> SegmentId {
        let id = SegmentId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.slots.push(SegmentSlot { id, segment });
        self.bump();
        id
    }

    /// Apply `f` to the segment in place. Returns what `f` returned, or None
    /// if the segment is gone.
    pub fn update_segment<R>(&mut self, id: SegmentId, f: impl FnOnce(&mut Segment) -> R) -> Option<R> {
        let slot = self.slots.iter_mut().find(|s| s.id == id)?;
        let r = f(&mut slot.segment);
        self.bump();
        Some(r)
    }

    pub fn remove_segment(&mut self, id: SegmentId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|s| s.id != id);
        let removed = self.slots.len() != before;
        if removed {
            self.bump();
        }
        removed
    }

    /// Drop every segment and any pending gesture point.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.pointer.reset();
        self.bump();
    }

    /// Intersection points of the committed segments, without drawing.
    pub fn markers(&self) -> Vec<Point> { intersections::scan(&self.segments(), self.scan) }

    /// Draw every committed segment then its markers, on top of whatever the surface holds.
    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> Vec<Point> {
        let segments = self.segments();
        for s in &segments {
            surface.draw_segment(s);
        }
        intersections::draw_intersections(&segments, self.scan, surface)
    }

    /// Clear the surface and redraw the whole scene.
    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> Vec<Point> {
        surface.clear();
        self.draw(surface)
    }

    /// Redraw with a provisional segment appended after the committed ones.
    /// The provisional segment takes part in the intersection pass but is not stored.
    pub fn render_preview<S: RenderSurface + ?Sized>(&self, preview: Segment, surface: &mut S) -> Vec<Point> {
        surface.clear();
        let mut segments = self.segments();
        for s in &segments {
            surface.draw_segment(s);
        }
        surface.draw_segment(&preview);
        segments.push(preview);
        intersections::draw_intersections(&segments, self.scan, surface)
    }
}
