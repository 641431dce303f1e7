// CPU-side RGBA images and procedural stand-ins for the two bundled assets.
//
// The brush decal and the base photograph are normally fetched and decoded
// at startup; when that fails the effect falls back to the generators here
// so the page still shows something that ripples.

/// Tightly packed RGBA8 pixels, row-major, top row first.
#[derive(Clone, Debug, PartialEq)]
pub struct RgbaImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RgbaImage {
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Option<Self> {
        (data.len() == (width as usize) * (height as usize) * 4 && width > 0 && height > 0)
            .then_some(Self {
                data,
                width,
                height,
            })
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}

/// Largest size with the same aspect whose longer edge is at most
/// `max_dim`, or `None` when `width`x`height` already fits.
pub fn fit_within(width: u32, height: u32, max_dim: u32) -> Option<(u32, u32)> {
    let max_dim = max_dim.max(1);
    let longest = width.max(height);
    if longest <= max_dim {
        return None;
    }
    let k = max_dim as f64 / longest as f64;
    let w = ((width as f64 * k).round() as u32).clamp(1, max_dim);
    let h = ((height as f64 * k).round() as u32).clamp(1, max_dim);
    Some((w, h))
}

/// White disc with a smooth falloff to transparent at the rim.
///
/// Alpha follows `(1 - r^2)^2` where `r` is the distance from the centre in
/// units of the radius, so the hotspot sits in the middle like an ink blot.
pub fn soft_brush(size: u32) -> RgbaImage {
    let size = size.max(2);
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    let c = (size as f32 - 1.0) / 2.0;
    for y in 0..size {
        for x in 0..size {
            let dx = (x as f32 - c) / c;
            let dy = (y as f32 - c) / c;
            let r2 = (dx * dx + dy * dy).min(1.0);
            let a = (1.0 - r2) * (1.0 - r2);
            data.extend_from_slice(&[255, 255, 255, (a * 255.0).round() as u8]);
        }
    }
    RgbaImage {
        data,
        width: size,
        height: size,
    }
}

/// Deep-water vertical gradient, light at the top.
pub fn water_gradient(width: u32, height: u32) -> RgbaImage {
    let width = width.max(1);
    let height = height.max(1);
    let top = [96.0_f32, 182.0, 214.0];
    let bottom = [6.0_f32, 38.0, 72.0];
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let t = if height > 1 {
            y as f32 / (height - 1) as f32
        } else {
            0.0
        };
        let rgb = [
            top[0] + (bottom[0] - top[0]) * t,
            top[1] + (bottom[1] - top[1]) * t,
            top[2] + (bottom[2] - top[2]) * t,
        ];
        for _ in 0..width {
            data.extend_from_slice(&[
                rgb[0].round() as u8,
                rgb[1].round() as u8,
                rgb[2].round() as u8,
                255,
            ]);
        }
    }
    RgbaImage {
        data,
        width,
        height,
    }
}
