// Pointer-event handling over a `Scene`.
//
// Gesture per segment: Idle -(primary press)-> AwaitingSecondPoint -(primary press)-> Idle.
// While awaiting the second point, moves after a primary release render a live preview.
// A secondary press clears the scene from any state.

use crate::model::{Point, Segment, SegmentId};
use crate::pointer::Gesture;
use crate::scene::Scene;
use crate::surface::RenderSurface;

/// What a pointer event did to the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerOutcome {
    Ignored,
    FirstPointRecorded(Point),
    SegmentCommitted(SegmentId),
    Previewed { markers: usize },
    Cleared,
}

pub fn primary_press<S: RenderSurface + ?Sized>(scene: &mut Scene, surface: &mut S, at: Point) -> PointerOutcome {
    scene.pointer.press_primary();
    match scene.pointer.gesture {
        Gesture::Idle => {
            scene.pointer.gesture = Gesture::AwaitingSecondPoint { first: at };
            PointerOutcome::FirstPointRecorded(at)
        }
        Gesture::AwaitingSecondPoint { first } => {
            scene.pointer.gesture = Gesture::Idle;
            let id = scene.add_segment(Segment::between(first, at));
            log::debug!("segment {:?} committed: ({}, {}) -> ({}, {})", id, first.x, first.y, at.x, at.y);
            scene.render(surface);
            PointerOutcome::SegmentCommitted(id)
        }
    }
}

pub fn primary_release(scene: &mut Scene) {
    scene.pointer.release_primary();
}

pub fn secondary_press<S: RenderSurface + ?Sized>(scene: &mut Scene, surface: &mut S) -> PointerOutcome {
    let dropped = scene.segment_count();
    scene.clear();
    scene.render(surface);
    log::debug!("scene cleared ({} segments dropped)", dropped);
    PointerOutcome::Cleared
}

pub fn pointer_move<S: RenderSurface + ?Sized>(scene: &mut Scene, surface: &mut S, at: Point) -> PointerOutcome {
    if !scene.pointer.previewing() {
        return PointerOutcome::Ignored;
    }
    let Some(first) = scene.pointer.pending_first_point() else {
        return PointerOutcome::Ignored;
    };
    let markers = scene.render_preview(Segment::between(first, at), surface);
    PointerOutcome::Previewed { markers: markers.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    #[test]
    fn two_presses_commit_one_segment() {
        let mut sc = Scene::default();
        let mut r = RecordingSurface::new();
        assert_eq!(primary_press(&mut sc, &mut r, Point::new(10.0, 10.0)), PointerOutcome::FirstPointRecorded(Point::new(10.0, 10.0)));
        primary_release(&mut sc);
        assert!(matches!(primary_press(&mut sc, &mut r, Point::new(50.0, 50.0)), PointerOutcome::SegmentCommitted(_)));
        assert_eq!(sc.segments(), vec![Segment::new(10.0, 10.0, 50.0, 50.0)]);
        assert!(sc.pointer().awaiting_first_point());
    }

    #[test]
    fn move_without_pending_point_is_ignored() {
        let mut sc = Scene::default();
        let mut r = RecordingSurface::new();
        assert_eq!(pointer_move(&mut sc, &mut r, Point::new(3.0, 3.0)), PointerOutcome::Ignored);
        assert!(r.ops.is_empty());
    }

    #[test]
    fn preview_is_not_persisted() {
        let mut sc = Scene::default();
        let mut r = RecordingSurface::new();
        primary_press(&mut sc, &mut r, Point::new(0.0, 0.0));
        // held down, not yet released: no preview
        assert_eq!(pointer_move(&mut sc, &mut r, Point::new(5.0, 5.0)), PointerOutcome::Ignored);
        primary_release(&mut sc);
        assert_eq!(pointer_move(&mut sc, &mut r, Point::new(5.0, 5.0)), PointerOutcome::Previewed { markers: 0 });
        assert_eq!(sc.segment_count(), 0);
        assert_eq!(r.visible_segments(), vec![Segment::new(0.0, 0.0, 5.0, 5.0)]);
    }
}
