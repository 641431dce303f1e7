// Host-side tests for container option parsing and surface format selection.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod options {
    include!("../src/core/options.rs");
}

use options::*;
use wgpu::TextureFormat;

const IMG: &str = "assets/ocean.jpg";
const BRUSH: &str = "assets/brush.png";

#[test]
fn missing_attributes_use_defaults() {
    let o = SketchOptions::from_attrs(None, None, None, None, IMG, BRUSH);
    assert_eq!(o.image_url, IMG);
    assert_eq!(o.brush_url, BRUSH);
    assert_eq!(o.color_space, ColorSpace::Srgb);
    assert!(!o.play_toggle);
}

#[test]
fn blank_urls_fall_back_to_defaults() {
    let o = SketchOptions::from_attrs(Some("  "), Some(""), None, None, IMG, BRUSH);
    assert_eq!(o.image_url, IMG);
    assert_eq!(o.brush_url, BRUSH);
}

#[test]
fn explicit_attributes_are_honoured() {
    let o = SketchOptions::from_attrs(
        Some("img/lake.png"),
        Some(" img/ink.png "),
        Some("Linear"),
        Some("true"),
        IMG,
        BRUSH,
    );
    assert_eq!(o.image_url, "img/lake.png");
    assert_eq!(o.brush_url, "img/ink.png");
    assert_eq!(o.color_space, ColorSpace::Linear);
    assert!(o.play_toggle);
}

#[test]
fn color_space_parsing() {
    assert_eq!(ColorSpace::parse("srgb"), Some(ColorSpace::Srgb));
    assert_eq!(ColorSpace::parse(" SRGB "), Some(ColorSpace::Srgb));
    assert_eq!(ColorSpace::parse("linear"), Some(ColorSpace::Linear));
    assert_eq!(ColorSpace::parse("p3"), None);
    // Unknown values keep the default rather than failing
    let o = SketchOptions::from_attrs(None, None, Some("p3"), None, IMG, BRUSH);
    assert_eq!(o.color_space, ColorSpace::Srgb);
}

#[test]
fn play_toggle_flag_values() {
    for on in ["", "1", "true", "ON", "yes"] {
        let o = SketchOptions::from_attrs(None, None, None, Some(on), IMG, BRUSH);
        assert!(o.play_toggle, "{:?} should enable", on);
    }
    for off in ["0", "false", "off", "nope"] {
        let o = SketchOptions::from_attrs(None, None, None, Some(off), IMG, BRUSH);
        assert!(!o.play_toggle, "{:?} should disable", off);
    }
    let absent = SketchOptions::from_attrs(None, None, None, None, IMG, BRUSH);
    assert!(!absent.play_toggle);
}

#[test]
fn surface_format_prefers_matching_encoding() {
    let both = [TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb];
    assert_eq!(
        pick_surface_format(&both, ColorSpace::Srgb),
        Some(TextureFormat::Bgra8UnormSrgb)
    );
    assert_eq!(
        pick_surface_format(&both, ColorSpace::Linear),
        Some(TextureFormat::Bgra8Unorm)
    );
}

#[test]
fn surface_format_falls_back_to_first() {
    let web_like = [TextureFormat::Bgra8Unorm, TextureFormat::Rgba8Unorm];
    assert_eq!(
        pick_surface_format(&web_like, ColorSpace::Srgb),
        Some(TextureFormat::Bgra8Unorm)
    );
    assert_eq!(
        pick_surface_format(&[TextureFormat::Rgba16Float], ColorSpace::Srgb),
        Some(TextureFormat::Rgba16Float)
    );
    assert_eq!(pick_surface_format(&[], ColorSpace::Linear), None);
}

#[test]
fn srgb_view_only_when_needed() {
    assert_eq!(
        srgb_view_format(TextureFormat::Bgra8Unorm, ColorSpace::Srgb),
        Some(TextureFormat::Bgra8UnormSrgb)
    );
    assert_eq!(
        srgb_view_format(TextureFormat::Bgra8UnormSrgb, ColorSpace::Srgb),
        None
    );
    assert_eq!(
        srgb_view_format(TextureFormat::Bgra8Unorm, ColorSpace::Linear),
        None
    );
    // No sRGB twin exists for float formats
    assert_eq!(
        srgb_view_format(TextureFormat::Rgba16Float, ColorSpace::Srgb),
        None
    );
}
