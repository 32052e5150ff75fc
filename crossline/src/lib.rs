pub mod config;
pub mod interaction;
pub mod model;
pub mod pointer;
pub mod scene;
pub mod surface;
pub mod svg;
pub mod geometry {
    pub mod intersect;
    pub mod limits;
    pub mod slope;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod collapse;
    pub mod intersections;
}

use algorithms::collapse::CollapseAnimator;
use config::{ConfigError, SceneConfig};
use interaction::PointerOutcome;
use model::{Point, Segment, SegmentId};
use pointer::Button;
use scene::Scene;
use surface::RenderSurface;

/// One drawing surface: the scene, the surface it renders to, and the
/// collapse scheduler. Pointer callbacks and frame ticks both go through here.
pub struct Sketch<S: RenderSurface> {
    scene: Scene,
    surface: S,
    animator: CollapseAnimator,
    config: SceneConfig,
}

impl<S: RenderSurface> Sketch<S> {
    pub fn new(surface: S) -> Sketch<S> {
        Sketch::with_config(surface, SceneConfig::default())
    }

    pub fn with_config(surface: S, config: SceneConfig) -> Sketch<S> {
        let mut sk = Sketch { scene: Scene::new(config.scan), surface, animator: CollapseAnimator::new(), config };
        sk.surface.configure(&sk.config);
        sk.render();
        sk
    }

    pub fn config(&self) -> &SceneConfig { &self.config }

    /// Replace the configuration; scan options take effect on the next redraw.
    pub fn set_config(&mut self, config: SceneConfig) -> Result<(), ConfigError> {
        if let Err(e) = config.validate() {
            log::warn!("config rejected: {}", e);
            return Err(e);
        }
        self.scene.set_scan_options(config.scan);
        self.surface.configure(&config);
        self.config = config;
        Ok(())
    }

    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn surface(&self) -> &S { &self.surface }
    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }
    pub fn into_surface(self) -> S { self.surface }

    pub fn geom_version(&self) -> u64 { self.scene.geom_version() }
    pub fn segments(&self) -> Vec<Segment> { self.scene.segments() }
    pub fn segment_count(&self) -> usize { self.scene.segment_count() }
    pub fn markers(&self) -> Vec<Point> { self.scene.markers() }

    // Pointer input
    pub fn pointer_down(&mut self, button: Button, at: Point) -> PointerOutcome {
        match button {
            Button::Primary => interaction::primary_press(&mut self.scene, &mut self.surface, at),
            Button::Secondary => interaction::secondary_press(&mut self.scene, &mut self.surface),
            Button::Auxiliary => PointerOutcome::Ignored,
        }
    }
    pub fn pointer_up(&mut self, button: Button) {
        if button == Button::Primary {
            interaction::primary_release(&mut self.scene);
        }
    }
    pub fn pointer_move(&mut self, at: Point) -> PointerOutcome {
        interaction::pointer_move(&mut self.scene, &mut self.surface, at)
    }

    // Collapse animation
    /// Start collapsing every segment present now. Frames run on `frame()`.
    pub fn collapse(&mut self) -> usize { self.animator.start(&self.scene) }

    /// One frame tick. Returns true while collapse tasks remain.
    pub fn frame(&mut self) -> bool {
        self.animator.tick(&mut self.scene, &mut self.surface) > 0
    }

    pub fn is_animating(&self) -> bool { !self.animator.is_idle() }
    pub fn is_collapsing(&self, id: SegmentId) -> bool { self.animator.is_collapsing(id) }
    pub fn animator(&self) -> &CollapseAnimator { &self.animator }

    /// Clear and redraw everything; returns the markers drawn.
    pub fn render(&mut self) -> Vec<Point> { self.scene.render(&mut self.surface) }

    /// Empty the scene as a secondary press would.
    pub fn clear(&mut self) { interaction::secondary_press(&mut self.scene, &mut self.surface); }
}
