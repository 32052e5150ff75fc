use crate::{error, interop, CanvasSurface, Sketch};
use crossline::config::SceneConfig;
use crossline::interaction::PointerOutcome;
use crossline::model::Point;
use crossline::pointer::Button;
use js_sys::Float64Array;
use log::LevelFilter;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Route `log` output to the console. Level: off|error|warn|info|debug|trace.
#[wasm_bindgen]
pub fn init_logging(level: &str) -> bool {
    match level.parse::<LevelFilter>() {
        Ok(l) => crate::logger::init(l),
        Err(_) => false,
    }
}

fn outcome_name(o: &PointerOutcome) -> &'static str {
    match o {
        PointerOutcome::Ignored => "ignored",
        PointerOutcome::FirstPointRecorded(_) => "first_point",
        PointerOutcome::SegmentCommitted(_) => "committed",
        PointerOutcome::Previewed { .. } => "preview",
        PointerOutcome::Cleared => "cleared",
    }
}

#[wasm_bindgen]
impl Sketch {
    /// Sketch on `canvas` with default settings sized to the canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<Sketch, JsValue> {
        let mut cfg = SceneConfig::default();
        cfg.surface.width = canvas.width() as f64;
        cfg.surface.height = canvas.height() as f64;
        if cfg.validate().is_err() {
            cfg.surface = SceneConfig::default().surface;
        }
        let surface = CanvasSurface::from_canvas(&canvas, &cfg)?;
        Ok(Sketch::rs_new(surface, cfg))
    }

    /// Like the constructor but with a JSON config; `{ok, value: Sketch}` or a typed error.
    pub fn with_config_res(canvas: HtmlCanvasElement, config: &str) -> JsValue {
        let cfg = match SceneConfig::from_json(config) {
            Ok(c) => c,
            Err(e) => return error::config(&e),
        };
        match CanvasSurface::from_canvas(&canvas, &cfg) {
            Ok(surface) => error::ok(Sketch::rs_new(surface, cfg).into()),
            Err(e) => error::err("no_context", "canvas has no 2d context", Some(e)),
        }
    }

    pub fn geom_version(&self) -> u64 {
        self.rs_geom_version()
    }

    // Pointer input; coordinates are surface-local
    pub fn pointer_down(&mut self, button: i16, x: f64, y: f64) -> bool {
        match Button::from_code(button) {
            Some(b) => { self.inner.pointer_down(b, Point::new(x, y)); true }
            None => false,
        }
    }
    pub fn pointer_down_res(&mut self, button: i16, x: f64, y: f64) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        let Some(b) = Button::from_code(button) else {
            return error::invalid_button(button);
        };
        let o = self.inner.pointer_down(b, Point::new(x, y));
        error::ok(JsValue::from_str(outcome_name(&o)))
    }
    pub fn pointer_up(&mut self, button: i16) {
        if let Some(b) = Button::from_code(button) {
            self.inner.pointer_up(b);
        }
    }
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        matches!(self.inner.pointer_move(Point::new(x, y)), PointerOutcome::Previewed { .. })
    }
    pub fn pointer_move_res(&mut self, x: f64, y: f64) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        let o = self.inner.pointer_move(Point::new(x, y));
        error::ok(JsValue::from_str(outcome_name(&o)))
    }
    pub fn pending_first_point(&self) -> JsValue {
        match self.inner.scene().pointer().pending_first_point() {
            Some(p) => serde_wasm_bindgen::to_value(&[p.x, p.y]).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    // Collapse animation; call `frame` from requestAnimationFrame while it returns true
    pub fn collapse(&mut self) -> u32 {
        self.inner.collapse() as u32
    }
    pub fn frame(&mut self) -> bool {
        self.inner.frame()
    }
    pub fn is_animating(&self) -> bool {
        self.inner.is_animating()
    }

    pub fn render(&mut self) -> u32 {
        self.inner.render().len() as u32
    }
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    // Queries
    pub fn segment_count(&self) -> u32 {
        self.inner.segment_count() as u32
    }
    pub fn get_segment_data(&self) -> JsValue {
        let slots = self.inner.scene().slots();
        let ids: Vec<u32> = slots.iter().map(|s| s.id.0).collect();
        let coords: Vec<f64> = slots.iter().flat_map(|s| [s.segment.x1, s.segment.y1, s.segment.x2, s.segment.y2]).collect();
        let obj = interop::new_obj();
        interop::set_kv(&obj, "ids", &interop::arr_u32(&ids).into());
        interop::set_kv(&obj, "coords", &interop::arr_f64(&coords).into());
        obj.into()
    }
    pub fn get_markers(&self) -> Float64Array {
        let flat: Vec<f64> = self.inner.markers().iter().flat_map(|p| [p.x, p.y]).collect();
        interop::arr_f64(&flat)
    }
    pub fn segments(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.segments()).unwrap_or(JsValue::NULL)
    }

    // Config
    pub fn config(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.config()).unwrap_or(JsValue::NULL)
    }
    pub fn set_config(&mut self, config: &str) -> bool {
        match SceneConfig::from_json(config) {
            Ok(c) => self.inner.set_config(c).is_ok(),
            Err(_) => false,
        }
    }
    pub fn set_config_res(&mut self, config: &str) -> JsValue {
        let parsed = SceneConfig::from_json(config).and_then(|c| self.inner.set_config(c));
        match parsed {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::config(&e),
        }
    }
}
