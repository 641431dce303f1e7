use crate::constants::CLEAR_RGB;
use crate::core::{pick_surface_format, srgb_view_format, ColorSpace, RgbaImage, Sketch, DISPLACEMENT_STRENGTH};
use web_sys as web;

mod composite;
mod helpers;
mod ripples;
mod targets;
use composite::CompositeResources;
use ripples::RippleResources;
use targets::RenderTargets;

/// WebGPU state for the two-pass ripple effect.
///
/// `render` always encodes the ripple pass before the composite pass in one
/// command encoder, so the composite samples this frame's displacement.
pub struct Compositor {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // Format the composite pipeline writes; may be the sRGB view of `config.format`
    view_format: wgpu::TextureFormat,

    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    ripples: RippleResources,
    composite: CompositeResources,
    _base_tex: wgpu::Texture,
    base_view: wgpu::TextureView,
    composite_bg: wgpu::BindGroup,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl Compositor {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        color_space: ColorSpace,
        base: &RgbaImage,
        brush: &RgbaImage,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = pick_surface_format(&caps.formats, color_space)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let srgb_view = srgb_view_format(format, color_space);
        let view_format = srgb_view.unwrap_or(format);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: srgb_view.into_iter().collect(),
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} view={:?}",
            width,
            height,
            format,
            view_format
        );

        let linear_sampler = helpers::create_linear_sampler(&device);
        let targets = RenderTargets::new(&device, width, height);

        let (brush_tex, brush_view) = helpers::upload_rgba_texture(
            &device,
            &queue,
            "brush_tex",
            brush,
            wgpu::TextureFormat::Rgba8Unorm,
        );
        let ripples = ripples::create_ripple_resources(&device, brush_tex, &brush_view, &linear_sampler);

        let base_format = match color_space {
            ColorSpace::Srgb => wgpu::TextureFormat::Rgba8UnormSrgb,
            ColorSpace::Linear => wgpu::TextureFormat::Rgba8Unorm,
        };
        let (base_tex, base_view) =
            helpers::upload_rgba_texture(&device, &queue, "base_tex", base, base_format);

        let composite = composite::create_composite_resources(&device, view_format);
        let composite_bg = composite::create_bind_group(
            &device,
            &composite,
            &base_view,
            &targets.displacement_view,
            &linear_sampler,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            targets,
            linear_sampler,
            ripples,
            composite,
            _base_tex: base_tex,
            base_view,
            composite_bg,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0],
                g: CLEAR_RGB[1],
                b: CLEAR_RGB[2],
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate the displacement target and the bind group that samples it
            self.targets.recreate(&self.device, width, height);
            self.composite_bg = composite::create_bind_group(
                &self.device,
                &self.composite,
                &self.base_view,
                &self.targets.displacement_view,
                &self.linear_sampler,
            );
            log::debug!("[gpu] resized targets to {:?}", self.targets.size());
        }
    }

    /// Reconfigure after the surface was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, sketch: &Sketch) -> Result<(), wgpu::SurfaceError> {
        let (w, h) = sketch.viewport().backing_size();
        self.resize_if_needed(w, h);

        let instances = self.ripples.upload(&self.queue, sketch.camera(), &sketch.pool);
        composite::write_uniforms(
            &self.queue,
            &self.composite.uniform_buffer,
            sketch.cover_scale().to_array(),
            DISPLACEMENT_STRENGTH,
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: ripple sprites -> displacement target
        ripples::encode(
            &mut encoder,
            &self.targets.displacement_view,
            &self.ripples,
            instances,
        );

        // Pass 2: base image displaced by pass 1 -> swapchain
        composite::encode(
            &mut encoder,
            &view,
            self.clear_color,
            &self.composite.pipeline,
            &self.composite_bg,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
