use wasm_bindgen::prelude::*;
mod api;
mod canvas;
mod error;
mod interop;
mod logger;

pub use canvas::CanvasSurface;

#[wasm_bindgen]
pub struct Sketch { pub(crate) inner: crossline::Sketch<CanvasSurface> }

impl Sketch {
    pub fn rs_new(surface: CanvasSurface, config: crossline::config::SceneConfig) -> Sketch {
        Sketch { inner: crossline::Sketch::with_config(surface, config) }
    }
    pub fn rs_geom_version(&self) -> u64 { self.inner.geom_version() }
}
