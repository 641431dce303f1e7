// Viewport sizing shared by the camera, the render targets and the
// composite shader.
//
// CSS pixels are the scene unit: one world unit maps to one CSS pixel, and
// the backing store holds `css * pixel_ratio` physical pixels.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    /// Zero or negative sizes are clamped to one pixel so aspect ratios stay finite.
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            pixel_ratio: if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 },
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Physical size of the canvas backing store and offscreen target.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio).round() as u32;
        let h = (self.height * self.pixel_ratio).round() as u32;
        (w.max(1), h.max(1))
    }

    /// Convert container-relative CSS pixels into view-centred scene units.
    #[inline]
    pub fn client_to_view(&self, client_x: f32, client_y: f32) -> Vec2 {
        Vec2::new(client_x - self.width / 2.0, self.height / 2.0 - client_y)
    }

    /// Per-axis UV scale that makes an image of `image_aspect` cover the
    /// viewport, cropping whichever axis overflows.
    pub fn cover_scale(&self, image_aspect: f32) -> Vec2 {
        let viewport_aspect = self.aspect();
        if image_aspect > viewport_aspect {
            Vec2::new(image_aspect / viewport_aspect, 1.0)
        } else {
            Vec2::new(1.0, viewport_aspect / image_aspect)
        }
    }
}
