use glam::Vec2;
use web_sys as web;

/// Pointer position relative to `el`'s top-left corner, in CSS px.
#[inline]
pub fn pointer_element_px(ev: &web::PointerEvent, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    Vec2::new(x_css, y_css)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    TogglePlay,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        " " | "Spacebar" => Some(KeyAction::TogglePlay),
        _ => None,
    }
}

/// Effective pixel ratio for the backing store.
#[inline]
pub fn capped_pixel_ratio(device_pixel_ratio: f64, max: f64) -> f32 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(max) as f32
    } else {
        1.0
    }
}
