use crossline::model::{Point, Segment};
use crossline::pointer::Button;
use crossline::scene::Scene;
use crossline::surface::RecordingSurface;
use crossline::algorithms::collapse::CollapseAnimator;
use crossline::Sketch;
use proptest::prelude::*;

fn sketch_with(segs: &[Segment]) -> Sketch<RecordingSurface> {
    let mut sk = Sketch::new(RecordingSurface::new());
    for s in segs {
        sk.pointer_down(Button::Primary, s.start());
        sk.pointer_up(Button::Primary);
        sk.pointer_down(Button::Primary, s.end());
        sk.pointer_up(Button::Primary);
    }
    sk
}

#[test]
fn horizontal_segment_collapses_in_fifty_frames() {
    let mut sk = sketch_with(&[Segment::new(0.0, 0.0, 100.0, 0.0)]);
    assert_eq!(sk.collapse(), 1);
    for frame in 1..50 {
        assert!(sk.frame(), "finished early at frame {}", frame);
        let s = sk.segments()[0];
        assert_eq!(s, Segment::new(frame as f64, 0.0, 100.0 - frame as f64, 0.0));
    }
    // terminal frame draws the fully collapsed segment, then removes it
    assert!(!sk.frame());
    assert_eq!(sk.segment_count(), 0);
    assert_eq!(sk.surface().visible_segments(), vec![Segment::new(50.0, 0.0, 50.0, 0.0)]);
    assert_eq!(sk.animator().frames(), 50);
    assert!(!sk.is_animating());
}

#[test]
fn vertical_segment_finishes_on_first_frame() {
    let mut sk = sketch_with(&[Segment::new(30.0, 0.0, 30.0, 100.0)]);
    sk.collapse();
    assert!(!sk.frame());
    assert_eq!(sk.segment_count(), 0);
    // endpoints were never stepped along the infinite slope
    assert_eq!(sk.surface().visible_segments(), vec![Segment::new(30.0, 0.0, 30.0, 100.0)]);
}

#[test]
fn sloped_segment_walks_along_its_line() {
    let mut sk = sketch_with(&[Segment::new(10.0, 0.0, 0.0, 20.0)]);
    sk.collapse();
    // normalized: (0,20) -> (10,0), slope -2, target 5
    assert!(sk.frame());
    assert_eq!(sk.segments()[0], Segment::new(1.0, 18.0, 9.0, 2.0));
    let mut frames = 1;
    while sk.frame() {
        frames += 1;
    }
    assert_eq!(frames + 1, 5);
    assert_eq!(sk.segment_count(), 0);
}

#[test]
fn odd_length_rounds_midpoint_and_ends_move_unevenly() {
    let mut sk = sketch_with(&[Segment::new(0.0, 0.0, 101.0, 0.0)]);
    sk.collapse();
    let mut frames = 0;
    loop {
        frames += 1;
        let more = sk.frame();
        if let Some(s) = sk.segments().first() {
            assert!(s.x1 <= 51.0 && s.x2 >= 51.0, "overshoot at frame {}", frames);
        }
        if !more {
            break;
        }
    }
    assert_eq!(frames, 51);
}

#[test]
fn every_segment_collapses_independently() {
    let mut sk = sketch_with(&[
        Segment::new(0.0, 0.0, 10.0, 0.0),
        Segment::new(0.0, 0.0, 40.0, 40.0),
        Segment::new(0.0, 40.0, 40.0, 0.0),
    ]);
    assert_eq!(sk.markers().len(), 1);
    assert_eq!(sk.collapse(), 3);
    assert!(sk.frame());
    assert_eq!(sk.animator().active(), 3);
    for _ in 0..4 {
        sk.frame();
    }
    // the 10-unit segment is done after 5 frames, the diagonals are still shrinking
    assert_eq!(sk.segment_count(), 2);
    while sk.frame() {}
    assert_eq!(sk.segment_count(), 0);
    assert_eq!(sk.animator().frames(), 20);
}

#[test]
fn clear_during_collapse_cancels_running_tasks() {
    let mut sk = sketch_with(&[Segment::new(0.0, 0.0, 100.0, 0.0)]);
    sk.collapse();
    sk.frame();
    sk.pointer_down(Button::Secondary, Point::new(0.0, 0.0));
    let clears = sk.surface().clear_count();
    // the orphaned task notices on its next tick and does not touch the surface
    assert!(!sk.frame());
    assert_eq!(sk.surface().clear_count(), clears);
    assert!(!sk.is_animating());
}

#[test]
fn segments_drawn_during_collapse_are_left_alone() {
    let mut sk = sketch_with(&[Segment::new(0.0, 0.0, 4.0, 0.0)]);
    sk.collapse();
    sk.frame();
    sk.pointer_down(Button::Primary, Point::new(0.0, 10.0));
    sk.pointer_up(Button::Primary);
    sk.pointer_down(Button::Primary, Point::new(20.0, 10.0));
    while sk.frame() {}
    assert_eq!(sk.segments(), vec![Segment::new(0.0, 10.0, 20.0, 10.0)]);
}

#[test]
fn non_finite_segment_is_dropped_without_looping() {
    let mut sc = Scene::default();
    sc.add_segment(Segment::new(f64::NAN, 0.0, 10.0, 0.0));
    sc.add_segment(Segment::new(0.0, 0.0, f64::INFINITY, 5.0));
    let mut a = CollapseAnimator::new();
    a.start(&sc);
    let mut r = RecordingSurface::new();
    assert_eq!(a.tick(&mut sc, &mut r), 0);
    assert!(sc.is_empty());
}

#[test]
fn collapse_on_empty_scene_is_idle() {
    let mut sk = Sketch::new(RecordingSurface::new());
    assert_eq!(sk.collapse(), 0);
    assert!(!sk.frame());
    assert_eq!(sk.animator().frames(), 0);
}

proptest! {
    #[test]
    fn collapse_terminates_within_span_frames(
        x1 in -300i32..300, y1 in -300i32..300, x2 in -300i32..300, y2 in -300i32..300,
        fx in 0u8..4, fy in 0u8..4,
    ) {
        // quarter offsets exercise non-integral endpoints as well
        let s = Segment::new(x1 as f64 + fx as f64 * 0.25, y1 as f64, x2 as f64 + fy as f64 * 0.25, y2 as f64);
        let mut sc = Scene::default();
        sc.add_segment(s);
        let mut a = CollapseAnimator::new();
        a.start(&sc);
        let mut r = RecordingSurface::new();
        let bound = ((s.x2 - s.x1).abs() / 2.0).ceil() as u64 + 2;
        let mut frames = 0u64;
        while a.tick(&mut sc, &mut r) > 0 {
            frames += 1;
            prop_assert!(frames <= bound, "no termination after {} frames", frames);
            let cur = sc.segments()[0];
            prop_assert!(cur.y1.is_finite() && cur.y2.is_finite());
        }
        prop_assert!(sc.is_empty());
    }
}
