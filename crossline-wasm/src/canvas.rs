use crossline::config::{SceneConfig, Style};
use crossline::model::{Point, Segment};
use crossline::surface::RenderSurface;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// `RenderSurface` over a 2D canvas context. Drawing calls that the browser
/// rejects (e.g. a negative arc radius) are dropped, never raised.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    style: Style,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, cfg: &SceneConfig) -> CanvasSurface {
        let mut s = CanvasSurface { ctx, width: cfg.surface.width, height: cfg.surface.height, style: cfg.style.clone() };
        s.apply_style();
        s
    }

    pub fn from_canvas(canvas: &HtmlCanvasElement, cfg: &SceneConfig) -> Result<CanvasSurface, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(CanvasSurface::new(ctx, cfg))
    }

    fn apply_style(&mut self) {
        self.ctx.set_stroke_style_str(&self.style.line_color);
        self.ctx.set_line_width(self.style.line_width);
    }
}

impl RenderSurface for CanvasSurface {
    fn clear(&mut self) { self.ctx.clear_rect(0.0, 0.0, self.width, self.height); }

    fn draw_segment(&mut self, s: &Segment) {
        self.ctx.begin_path();
        self.ctx.move_to(s.x1, s.y1);
        self.ctx.line_to(s.x2, s.y2);
        self.ctx.stroke();
        self.ctx.close_path();
    }

    fn draw_marker(&mut self, at: Point) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&self.style.marker_color);
        if self.ctx.arc(at.x, at.y, self.style.marker_radius, 0.0, std::f64::consts::PI * 2.0).is_err() {
            log::trace!("marker at ({}, {}) rejected by canvas", at.x, at.y);
        }
        self.ctx.fill();
        self.ctx.stroke();
        self.ctx.close_path();
    }

    fn configure(&mut self, cfg: &SceneConfig) {
        self.width = cfg.surface.width;
        self.height = cfg.surface.height;
        self.style = cfg.style.clone();
        self.apply_style();
    }
}
