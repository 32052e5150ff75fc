// Bounds applied when loading configuration from untrusted input (JSON, JS)

pub const SURFACE_MIN: f64 = 1.0;
pub const SURFACE_MAX: f64 = 16_384.0;

pub const MARKER_RADIUS_MIN: f64 = 0.5;
pub const MARKER_RADIUS_MAX: f64 = 256.0;

pub const LINE_WIDTH_MIN: f64 = 0.1;
pub const LINE_WIDTH_MAX: f64 = 256.0;

pub const MAX_COLOR_LEN: usize = 64;

#[inline]
pub fn in_range(x: f64, lo: f64, hi: f64) -> bool { x.is_finite() && x >= lo && x <= hi }

// CSS-ish color token: a name, #hex, or rgb()/rgba()/hsl() call. No quotes or markup.
pub fn is_color_token(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= MAX_COLOR_LEN
        && s.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | ' ' | '%'))
}
