use super::helpers;
use wgpu;

/// Format of the offscreen ripple scene; the composite reads its red channel.
pub(crate) const DISPLACEMENT_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Offscreen colour target written by the ripple pass and sampled by the
/// composite pass. Sized to the canvas backing store.
pub(crate) struct RenderTargets {
    pub(crate) displacement_tex: wgpu::Texture,
    pub(crate) displacement_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (displacement_tex, displacement_view) = Self::create(device, width, height);
        Self {
            displacement_tex,
            displacement_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.displacement_tex, self.displacement_view) = Self::create(device, width, height);
    }

    #[inline]
    pub(crate) fn size(&self) -> (u32, u32) {
        (self.displacement_tex.width(), self.displacement_tex.height())
    }

    fn create(device: &wgpu::Device, width: u32, height: u32) -> (wgpu::Texture, wgpu::TextureView) {
        helpers::create_color_texture(
            device,
            "displacement_tex",
            width.max(1),
            height.max(1),
            DISPLACEMENT_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        )
    }
}
