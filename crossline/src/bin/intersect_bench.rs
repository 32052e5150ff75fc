use crossline::algorithms::intersections::scan;
use crossline::config::{ParallelPolicy, ScanOptions};
use crossline::model::Segment;
use std::time::Instant;

// Deterministic pseudo-random segments on a 600x600 surface; integral endpoints like pointer input.
fn build_segments(n: usize, seed: u64) -> Vec<Segment> {
    let mut s = seed;
    let mut rnd = || { s = s.wrapping_mul(6364136223846793005).wrapping_add(1); ((s >> 33) % 600) as f64 };
    (0..n).map(|_| Segment::new(rnd(), rnd(), rnd(), rnd())).collect()
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut segments = 500usize;
    let mut passes = 200usize;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--segments=") { if let Ok(v)=val.parse() { segments=v; } }
        else if let Some(val)=a.strip_prefix("--passes=") { if let Ok(v)=val.parse() { passes=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
    }

    let segs = build_segments(segments, 0x1234_5678_ABCD_EF01);
    // Skip-pair so the whole O(n^2) scan runs even when a parallel pair shows up early.
    let opts = ScanOptions { parallel: ParallelPolicy::SkipPair, ..ScanOptions::default() };
    let _ = scan(&segs, opts);

    let mut times_ms: Vec<f64> = Vec::with_capacity(passes);
    let start_all = Instant::now();
    let mut markers = 0usize;
    for _ in 0..passes {
        let t0 = Instant::now();
        markers = scan(&segs, opts).len();
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a,b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    let p99 = percentile(&times_ms, 0.99);
    println!("segments={} passes={} markers={} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}", segments, passes, markers, dur_all, med, p90, p99);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
