// Per-segment collapse animation.
//
// Each task shrinks one segment toward its rounded horizontal midpoint, one
// unit of x per frame on each end, and removes it once both ends sit on the
// midpoint. Slope and target are fixed when the task starts. Tasks run in
// registration order, once per `tick`; a finished task is simply not kept.

use crate::model::{Segment, SegmentId};
use crate::scene::Scene;
use crate::surface::RenderSurface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollapseTask {
    pub id: SegmentId,
    pub slope: f64,
    pub target_x: f64,
}

// Move one end toward `target` by at most one unit, carrying y along the slope.
// An infinite/NaN slope never touches y.
#[inline]
fn advance(x: &mut f64, y: &mut f64, target: f64, k: f64) {
    if *x == target {
        return;
    }
    let dx = (target - *x).clamp(-1.0, 1.0);
    // Land exactly on the target for the last (possibly partial) step, and
    // wherever a unit step is lost to f64 precision.
    let next = *x + dx;
    if (target - *x).abs() <= 1.0 || next == *x { *x = target; } else { *x = next; }
    if k.is_finite() {
        *y += k * dx;
    }
}

impl CollapseTask {
    pub fn new(id: SegmentId, s: &Segment) -> CollapseTask {
        // round() is half away from zero
        CollapseTask { id, slope: s.slope(), target_x: ((s.x1 + s.x2) / 2.0).round() }
    }

    /// One frame: clear, normalize, advance both ends, redraw everything, then
    /// remove the segment if it reached its midpoint.
    pub fn step<S: RenderSurface + ?Sized>(&self, scene: &mut Scene, surface: &mut S) -> TaskStatus {
        if !scene.contains(self.id) {
            log::debug!("collapse of {:?} cancelled: segment no longer in scene", self.id);
            return TaskStatus::Done;
        }
        surface.clear();
        let (target, k) = (self.target_x, self.slope);
        let collapsed = scene.update_segment(self.id, |s| {
            s.normalize();
            if !s.x1.is_finite() || !s.x2.is_finite() || !target.is_finite() {
                // No finite midpoint to walk to.
                return None;
            }
            advance(&mut s.x1, &mut s.y1, target, k);
            advance(&mut s.x2, &mut s.y2, target, k);
            Some(s.x1 == target && s.x2 == target)
        });
        match collapsed {
            Some(Some(false)) => {
                scene.draw(surface);
                log::trace!("collapse of {:?} advanced", self.id);
                TaskStatus::Pending
            }
            Some(Some(true)) => {
                scene.draw(surface);
                scene.remove_segment(self.id);
                log::debug!("segment {:?} collapsed at x={}", self.id, target);
                TaskStatus::Done
            }
            Some(None) => {
                scene.remove_segment(self.id);
                scene.draw(surface);
                log::debug!("segment {:?} removed: non-finite x", self.id);
                TaskStatus::Done
            }
            None => TaskStatus::Done,
        }
    }
}

/// Frame scheduler for collapse tasks.
#[derive(Debug, Default)]
pub struct CollapseAnimator {
    tasks: Vec<CollapseTask>,
    frames: u64,
}

impl CollapseAnimator {
    pub fn new() -> Self { Self::default() }

    /// Register a task for every segment currently in the scene that is not
    /// already collapsing. Returns how many tasks were added.
    pub fn start(&mut self, scene: &Scene) -> usize {
        let mut added = 0;
        for slot in scene.slots() {
            if self.tasks.iter().any(|t| t.id == slot.id) {
                continue;
            }
            self.tasks.push(CollapseTask::new(slot.id, &slot.segment));
            added += 1;
        }
        log::debug!("collapse started for {} segments ({} active)", added, self.tasks.len());
        added
    }

    /// Run every registered task once, in registration order. Returns the
    /// number of tasks still pending.
    pub fn tick<S: RenderSurface + ?Sized>(&mut self, scene: &mut Scene, surface: &mut S) -> usize {
        if self.tasks.is_empty() {
            return 0;
        }
        self.frames += 1;
        self.tasks.retain(|t| t.step(&mut *scene, &mut *surface) == TaskStatus::Pending);
        self.tasks.len()
    }

    pub fn is_idle(&self) -> bool { self.tasks.is_empty() }
    pub fn active(&self) -> usize { self.tasks.len() }
    pub fn is_collapsing(&self, id: SegmentId) -> bool { self.tasks.iter().any(|t| t.id == id) }

    /// Frame ticks that ran at least one task.
    pub fn frames(&self) -> u64 { self.frames }
}
