use crate::config::{SceneConfig, Style};
use crate::model::{Point, Segment};
use crate::surface::RenderSurface;

/// Renders the current frame as an SVG document. Only what was drawn since the
/// last `clear` is kept. Non-finite geometry is skipped rather than emitted.
pub struct SvgSurface {
    width: f64,
    height: f64,
    style: Style,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(cfg: &SceneConfig) -> SvgSurface {
        SvgSurface { width: cfg.surface.width, height: cfg.surface.height, style: cfg.style.clone(), elements: Vec::new() }
    }

    pub fn element_count(&self) -> usize { self.elements.len() }

    pub fn to_svg(&self) -> String {
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
            self.width, self.height, self.width, self.height
        );
        for e in &self.elements {
            out.push('\n');
            out.push_str(e);
        }
        out.push_str("\n</svg>\n");
        out
    }
}

impl RenderSurface for SvgSurface {
    fn clear(&mut self) { self.elements.clear(); }

    fn configure(&mut self, cfg: &SceneConfig) {
        self.width = cfg.surface.width;
        self.height = cfg.surface.height;
        self.style = cfg.style.clone();
    }

    fn draw_segment(&mut self, s: &Segment) {
        if !s.is_finite() {
            return;
        }
        self.elements.push(format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            s.x1, s.y1, s.x2, s.y2, self.style.line_color, self.style.line_width
        ));
    }

    fn draw_marker(&mut self, at: Point) {
        if !at.is_finite() {
            return;
        }
        self.elements.push(format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\"/>",
            at.x, at.y, self.style.marker_radius, self.style.marker_color, self.style.line_color
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_holds_lines_and_markers() {
        let mut svg = SvgSurface::new(&SceneConfig::default());
        svg.draw_segment(&Segment::new(0.0, 0.0, 10.0, 10.0));
        svg.draw_marker(Point::new(5.0, 5.0));
        let doc = svg.to_svg();
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains("<line x1=\"0\" y1=\"0\" x2=\"10\" y2=\"10\" stroke=\"black\""));
        assert!(doc.contains("<circle cx=\"5\" cy=\"5\" r=\"4\" fill=\"red\""));
        svg.clear();
        assert_eq!(svg.element_count(), 0);
    }

    #[test]
    fn non_finite_geometry_is_skipped() {
        let mut svg = SvgSurface::new(&SceneConfig::default());
        svg.draw_marker(Point::new(f64::NAN, 1.0));
        svg.draw_segment(&Segment::new(0.0, f64::INFINITY, 1.0, 1.0));
        assert_eq!(svg.element_count(), 0);
    }
}
