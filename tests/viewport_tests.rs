// Host-side tests for viewport sizing, the orthographic camera and the sketch.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod viewport {
    include!("../src/core/viewport.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}
mod ripples {
    include!("../src/core/ripples.rs");
}
mod sketch {
    include!("../src/core/sketch.rs");
}

use camera::*;
use constants::*;
use glam::{Vec2, Vec4};
use sketch::*;
use viewport::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn zero_sizes_are_clamped() {
    let v = Viewport::new(0.0, -5.0, 0.0);
    assert_eq!(v.width, 1.0);
    assert_eq!(v.height, 1.0);
    assert_eq!(v.pixel_ratio, 1.0);
    assert_eq!(v.backing_size(), (1, 1));
}

#[test]
fn backing_size_scales_by_pixel_ratio() {
    let v = Viewport::new(800.0, 600.0, 2.0);
    assert_eq!(v.backing_size(), (1600, 1200));
}

#[test]
fn client_coordinates_become_view_centred_y_up() {
    let v = Viewport::new(800.0, 600.0, 1.0);
    assert_eq!(v.client_to_view(400.0, 300.0), Vec2::ZERO);
    assert_eq!(v.client_to_view(0.0, 0.0), Vec2::new(-400.0, 300.0));
    assert_eq!(v.client_to_view(800.0, 600.0), Vec2::new(400.0, -300.0));
}

#[test]
fn cover_scale_crops_the_overflowing_axis() {
    let image_aspect = 4.0 / 3.0;
    // Wide viewport: image is relatively taller, crop vertically
    let wide = Viewport::new(1920.0, 1080.0, 1.0).cover_scale(image_aspect);
    assert!(approx(wide.x, 1.0));
    assert!(approx(wide.y, (1920.0 / 1080.0) / image_aspect));
    // Tall viewport: crop horizontally
    let tall = Viewport::new(600.0, 800.0, 1.0).cover_scale(image_aspect);
    assert!(approx(tall.x, image_aspect / 0.75));
    assert!(approx(tall.y, 1.0));
    // Matching aspect needs no correction
    let exact = Viewport::new(400.0, 300.0, 1.0).cover_scale(image_aspect);
    assert!(approx(exact.x, 1.0) && approx(exact.y, 1.0));
}

#[test]
fn camera_bounds_are_one_unit_per_css_pixel() {
    let cam = OrthoCamera::for_viewport(&Viewport::new(1024.0, 768.0, 2.0));
    assert!(approx(cam.left, -512.0));
    assert!(approx(cam.right, 512.0));
    assert!(approx(cam.top, 384.0));
    assert!(approx(cam.bottom, -384.0));
    assert_eq!(cam.near, CAMERA_NEAR);
    assert_eq!(cam.far, CAMERA_FAR);
}

#[test]
fn view_proj_maps_frustum_corners_to_clip_corners() {
    let cam = OrthoCamera::for_viewport(&Viewport::new(800.0, 600.0, 1.0));
    let m = cam.view_proj();
    let tr = m * Vec4::new(400.0, 300.0, 0.0, 1.0);
    let bl = m * Vec4::new(-400.0, -300.0, 0.0, 1.0);
    assert!(approx(tr.x, 1.0) && approx(tr.y, 1.0));
    assert!(approx(bl.x, -1.0) && approx(bl.y, -1.0));
    assert!(tr.z >= 0.0 && tr.z <= 1.0, "depth {}", tr.z);
}

#[test]
fn resize_keeps_projection_aspect_in_step_with_viewport() {
    let mut sketch = Sketch::new(Viewport::new(800.0, 600.0, 1.0), 1);
    for (w, h) in [(1920.0, 1080.0), (375.0, 812.0), (1.0, 1.0), (3000.0, 200.0)] {
        let v = Viewport::new(w, h, 2.0);
        assert!(sketch.resize(v));
        assert!(approx(sketch.camera().aspect(), w / h));
        assert!(approx(sketch.camera().height(), h));
    }
}

#[test]
fn resize_to_same_viewport_is_a_no_op() {
    let v = Viewport::new(640.0, 480.0, 1.5);
    let mut sketch = Sketch::new(v, 1);
    assert!(!sketch.resize(v));
}

#[test]
fn resize_recomputes_cover_scale() {
    let mut sketch = Sketch::new(Viewport::new(400.0, 300.0, 1.0), 1);
    assert!(approx(sketch.cover_scale().x, 1.0) && approx(sketch.cover_scale().y, 1.0));
    sketch.resize(Viewport::new(300.0, 600.0, 1.0));
    assert!(approx(sketch.cover_scale().x, DEFAULT_IMAGE_ASPECT / 0.5));
    assert!(approx(sketch.cover_scale().y, 1.0));
}

#[test]
fn image_aspect_updates_cover_scale_and_rejects_nonsense() {
    let mut sketch = Sketch::new(Viewport::new(1000.0, 1000.0, 1.0), 1);
    sketch.set_image_aspect(2.0);
    assert!(approx(sketch.cover_scale().x, 2.0));
    sketch.set_image_aspect(0.0);
    sketch.set_image_aspect(f32::NAN);
    assert!(approx(sketch.image_aspect(), 2.0));
}

#[test]
fn sketch_construction_smoke() {
    let sketch = Sketch::new(Viewport::new(1280.0, 720.0, 2.0), 0xDEAD_BEEF);
    assert_eq!(sketch.pool.len(), POOL_SIZE);
    assert_eq!(sketch.pool.visible_count(), 0);
    assert_eq!(sketch.image_aspect(), DEFAULT_IMAGE_ASPECT);
}

#[test]
fn pointer_moves_spawn_ripples_in_view_space() {
    let mut sketch = Sketch::new(Viewport::new(800.0, 600.0, 1.0), 1);
    sketch.pointer_moved(400.0, 300.0); // centre == initial sample
    assert_eq!(sketch.track_pointer(), None);

    sketch.pointer_moved(410.0, 300.0);
    assert_eq!(sketch.track_pointer(), Some(0));
    assert_eq!(sketch.pool.get(0).unwrap().position, Vec2::new(10.0, 0.0));

    // Moving up the page is +y in view space
    sketch.pointer_moved(410.0, 290.0);
    assert_eq!(sketch.track_pointer(), Some(1));
    assert_eq!(sketch.pool.get(1).unwrap().position, Vec2::new(10.0, 10.0));

    // No movement since last frame
    assert_eq!(sketch.track_pointer(), None);
    assert_eq!(sketch.pool.visible_count(), 2);
}

#[test]
fn decay_runs_ripples_out() {
    let mut sketch = Sketch::new(Viewport::new(800.0, 600.0, 1.0), 1);
    sketch.pointer_moved(100.0, 100.0);
    sketch.track_pointer();
    assert_eq!(sketch.pool.visible_count(), 1);
    for _ in 0..200 {
        sketch.decay();
    }
    assert_eq!(sketch.pool.visible_count(), 0);
}
