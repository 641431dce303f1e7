use super::camera::OrthoCamera;
use super::constants::DEFAULT_IMAGE_ASPECT;
use super::ripples::{PointerTracker, RipplePool};
use super::viewport::Viewport;
use glam::Vec2;

/// The single effect instance: ripple pool, pointer samples and everything
/// derived from the viewport size.
///
/// Platform-free; the web frontend feeds it events and reads back the state
/// it needs for the two render passes.
pub struct Sketch {
    pub pool: RipplePool,
    pub pointer: PointerTracker,
    viewport: Viewport,
    camera: OrthoCamera,
    image_aspect: f32,
    cover_scale: Vec2,
}

impl Sketch {
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        let camera = OrthoCamera::for_viewport(&viewport);
        let cover_scale = viewport.cover_scale(DEFAULT_IMAGE_ASPECT);
        Self {
            pool: RipplePool::new(seed),
            pointer: PointerTracker::default(),
            viewport,
            camera,
            image_aspect: DEFAULT_IMAGE_ASPECT,
            cover_scale,
        }
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn camera(&self) -> &OrthoCamera {
        &self.camera
    }

    #[inline]
    pub fn cover_scale(&self) -> Vec2 {
        self.cover_scale
    }

    #[inline]
    pub fn image_aspect(&self) -> f32 {
        self.image_aspect
    }

    /// Record a pointer position given in container-relative CSS px.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let p = self.viewport.client_to_view(x, y);
        self.pointer.set(p.x, p.y);
    }

    /// Once-per-frame pointer check; spawns at most one ripple.
    pub fn track_pointer(&mut self) -> Option<usize> {
        self.pointer
            .sample()
            .map(|p| self.pool.activate_next(p.x, p.y))
    }

    /// Grow, spin and fade every visible ripple by one frame.
    pub fn decay(&mut self) {
        self.pool.decay_all();
    }

    /// Refit the camera and cover scale. Returns `false` when nothing changed.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        self.camera.fit(&self.viewport);
        self.cover_scale = self.viewport.cover_scale(self.image_aspect);
        true
    }

    pub fn set_image_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.image_aspect = aspect;
            self.cover_scale = self.viewport.cover_scale(aspect);
        }
    }
}
