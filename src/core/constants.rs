// Shared ripple/viewport tuning constants used by the web frontend.

// Pool
pub const POOL_SIZE: usize = 100; // sprites allocated once, recycled by index

// Activation
pub const ACTIVATION_THRESHOLD: f32 = 4.0; // per-axis pointer travel (CSS px) per frame
pub const START_SCALE: f32 = 0.2;
pub const START_OPACITY: f32 = 0.5;

// Per-frame decay
pub const ROTATION_STEP: f32 = 0.02; // radians per frame
pub const OPACITY_DECAY: f32 = 0.96;
pub const SCALE_DECAY: f32 = 0.982;
pub const SCALE_GROWTH: f32 = 0.108;
pub const OPACITY_EPSILON: f32 = 0.002; // below this a sprite goes invisible

// Brush quad edge length in CSS px at scale 1.0
pub const BRUSH_SIZE: f32 = 60.0;

// Composite shading
pub const DISPLACEMENT_STRENGTH: f32 = 0.1; // max UV offset at full intensity

// Base image aspect used until the real image has been decoded
pub const DEFAULT_IMAGE_ASPECT: f32 = 4000.0 / 3000.0;

// Orthographic camera
pub const CAMERA_Z: f32 = 2.0;
pub const CAMERA_NEAR: f32 = -1000.0;
pub const CAMERA_FAR: f32 = 1000.0;

/// Size that `scale = SCALE_DECAY * scale + SCALE_GROWTH` converges to.
#[cfg(test)]
pub const fn steady_state_scale() -> f32 {
    SCALE_GROWTH / (1.0 - SCALE_DECAY)
}
