// Pairwise intersection scan over the scene's segments, in creation order.
//
// With `Containment::StrictSpan` the pair is solved in slope/intercept form and
// accepted when the crossing x lies strictly inside both x-spans. Vertical and
// zero-length segments produce infinite/NaN slopes that fail the span test.
// Equal slopes (including two vertical segments drawn in the same direction)
// count as parallel.

use crate::config::{Containment, ParallelPolicy, ScanOptions};
use crate::geometry::intersect::intersect_segments;
use crate::geometry::slope::{intercept, line_crossing, strictly_spans_x};
use crate::model::{Point, Segment};
use crate::surface::RenderSurface;

enum PairOutcome {
    Marker(Point),
    Miss,
    Parallel,
}

fn strict_span_pair(a: &Segment, b: &Segment) -> PairOutcome {
    let k1 = a.slope();
    let k2 = b.slope();
    if k1 == k2 {
        return PairOutcome::Parallel;
    }
    let at = line_crossing(k1, intercept(a, k1), k2, intercept(b, k2));
    if strictly_spans_x(a, at.x) && strictly_spans_x(b, at.x) {
        PairOutcome::Marker(at)
    } else {
        PairOutcome::Miss
    }
}

fn exact_pair(a: &Segment, b: &Segment) -> PairOutcome {
    let c = intersect_segments(a, b);
    if c.is_parallel() {
        return PairOutcome::Parallel;
    }
    c.point().map_or(PairOutcome::Miss, PairOutcome::Marker)
}

/// All marker points for `segments`, in pair order (i < j).
pub fn scan(segments: &[Segment], opts: ScanOptions) -> Vec<Point> {
    let pair = match opts.containment {
        Containment::StrictSpan => strict_span_pair,
        Containment::Exact => exact_pair,
    };
    let mut markers = Vec::new();
    'scan: for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            match pair(&segments[i], &segments[j]) {
                PairOutcome::Marker(p) => markers.push(p),
                PairOutcome::Miss => {}
                PairOutcome::Parallel => match opts.parallel {
                    ParallelPolicy::AbortScan => {
                        log::trace!("parallel pair ({}, {}) ends scan", i, j);
                        break 'scan;
                    }
                    ParallelPolicy::SkipPair => continue,
                },
            }
        }
    }
    markers
}

/// Run `scan` and draw a marker for every hit.
pub fn draw_intersections<S: RenderSurface + ?Sized>(segments: &[Segment], opts: ScanOptions, surface: &mut S) -> Vec<Point> {
    let markers = scan(segments, opts);
    for p in &markers {
        surface.draw_marker(*p);
    }
    markers
}
