use super::constants::{CAMERA_FAR, CAMERA_NEAR, CAMERA_Z};
use super::viewport::Viewport;
use glam::{Mat4, Vec3};

/// Orthographic camera with a 1:1 CSS-pixel-to-unit mapping, looking down -Z
/// at the ripple plane.
#[derive(Clone, Debug, PartialEq)]
pub struct OrthoCamera {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Vec3,
}

impl OrthoCamera {
    pub fn for_viewport(viewport: &Viewport) -> Self {
        let mut cam = Self {
            left: 0.0,
            right: 0.0,
            top: 0.0,
            bottom: 0.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
        };
        cam.fit(viewport);
        cam
    }

    /// Frustum height equals the viewport height; width follows its aspect.
    pub fn fit(&mut self, viewport: &Viewport) {
        let frustum = viewport.height;
        let aspect = viewport.aspect();
        self.left = -frustum * aspect / 2.0;
        self.right = frustum * aspect / 2.0;
        self.top = frustum / 2.0;
        self.bottom = -frustum / 2.0;
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width() / self.height()
    }

    /// Compute the clip-space projection matrix (wgpu depth range 0..1).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, Vec3::new(self.eye.x, self.eye.y, 0.0), Vec3::Y)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
