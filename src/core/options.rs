use wgpu::TextureFormat;

/// Output encoding of the canvas surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorSpace {
    /// sRGB-encoded swapchain; the GPU applies the transfer curve on write.
    #[default]
    Srgb,
    /// Raw UNORM swapchain; shader output is written as-is.
    Linear,
}

impl ColorSpace {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "srgb" => Some(ColorSpace::Srgb),
            "linear" => Some(ColorSpace::Linear),
            _ => None,
        }
    }
}

/// Per-page variant switches, read from the container's data attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct SketchOptions {
    pub image_url: String,
    pub brush_url: String,
    pub color_space: ColorSpace,
    pub play_toggle: bool,
}

impl SketchOptions {
    /// Missing or unrecognised values fall back to the given defaults.
    pub fn from_attrs(
        image: Option<&str>,
        brush: Option<&str>,
        color_space: Option<&str>,
        play_toggle: Option<&str>,
        default_image: &str,
        default_brush: &str,
    ) -> Self {
        let non_empty = |v: Option<&str>, d: &str| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(d)
                .to_string()
        };
        Self {
            image_url: non_empty(image, default_image),
            brush_url: non_empty(brush, default_brush),
            color_space: color_space.and_then(ColorSpace::parse).unwrap_or_default(),
            play_toggle: play_toggle.map(parse_flag).unwrap_or(false),
        }
    }
}

// A bare `data-play-toggle` attribute reads as "" and counts as on
#[inline]
fn parse_flag(v: &str) -> bool {
    matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "" | "1" | "true" | "on" | "yes"
    )
}

/// Choose a surface format whose encoding matches `space`, falling back to the
/// first supported format.
pub fn pick_surface_format(formats: &[TextureFormat], space: ColorSpace) -> Option<TextureFormat> {
    let want_srgb = space == ColorSpace::Srgb;
    formats
        .iter()
        .copied()
        .find(|f| {
            matches!(
                f,
                TextureFormat::Bgra8Unorm
                    | TextureFormat::Rgba8Unorm
                    | TextureFormat::Bgra8UnormSrgb
                    | TextureFormat::Rgba8UnormSrgb
            ) && f.is_srgb() == want_srgb
        })
        .or_else(|| formats.first().copied())
}

/// sRGB view of a surface format when the canvas itself only exposes UNORM
/// (WebGPU canvases never report `*Srgb` formats directly).
pub fn srgb_view_format(format: TextureFormat, space: ColorSpace) -> Option<TextureFormat> {
    if space != ColorSpace::Srgb || format.is_srgb() {
        return None;
    }
    let srgb = format.add_srgb_suffix();
    (srgb != format).then_some(srgb)
}
