use super::helpers;
use super::targets::DISPLACEMENT_FORMAT;
use crate::core::{OrthoCamera, RipplePool, BRUSH_SIZE, POOL_SIZE};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CameraUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) params: [f32; 4], // x = brush size
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SpriteInstance {
    pub(crate) position: [f32; 2],
    pub(crate) rotation: f32,
    pub(crate) scale: f32,
    pub(crate) opacity: f32,
    pub(crate) _pad: [f32; 3],
}

const SPRITE_ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
    0 => Float32x2,
    1 => Float32,
    2 => Float32,
    3 => Float32,
];

pub(crate) struct RippleResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    // Keeps the brush texture alive for the bind group
    _brush_tex: wgpu::Texture,
    staging: Vec<SpriteInstance>,
}

pub(crate) fn create_ripple_resources(
    device: &wgpu::Device,
    brush_tex: wgpu::Texture,
    brush_view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> RippleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("ripples_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::RIPPLES_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("ripples_bgl"),
        entries: &[
            helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX),
            helpers::texture_entry(1),
            helpers::sampler_entry(2),
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("ripples_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    // Overlapping sprites sum instead of occluding
    let additive = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    };
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("ripples_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_sprite"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<SpriteInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &SPRITE_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_sprite"),
            targets: &[Some(wgpu::ColorTargetState {
                format: DISPLACEMENT_FORMAT,
                blend: Some(wgpu::BlendState {
                    color: additive,
                    alpha: additive,
                }),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    let uniform_buffer = helpers::uniform_buffer::<CameraUniforms>(device, "ripples_uniforms");
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("ripples_instances"),
        size: (std::mem::size_of::<SpriteInstance>() * POOL_SIZE) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("ripples_bg"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(brush_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });

    RippleResources {
        pipeline,
        uniform_buffer,
        instance_buffer,
        bind_group,
        _brush_tex: brush_tex,
        staging: Vec::with_capacity(POOL_SIZE),
    }
}

impl RippleResources {
    /// Upload camera and visible sprites; returns the instance count to draw.
    pub(crate) fn upload(&mut self, queue: &wgpu::Queue, camera: &OrthoCamera, pool: &RipplePool) -> u32 {
        let u = CameraUniforms {
            view_proj: camera.view_proj().to_cols_array_2d(),
            params: [BRUSH_SIZE, 0.0, 0.0, 0.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));

        pack_visible(pool, &mut self.staging);
        if !self.staging.is_empty() {
            queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&self.staging),
            );
        }
        self.staging.len() as u32
    }
}

/// Hidden slots are skipped so they cost nothing on the GPU.
fn pack_visible(pool: &RipplePool, out: &mut Vec<SpriteInstance>) {
    out.clear();
    out.extend(pool.visible().map(|s| SpriteInstance {
        position: s.position.to_array(),
        rotation: s.rotation,
        scale: s.scale,
        opacity: s.opacity,
        _pad: [0.0; 3],
    }));
}

/// Pass 1: clear the displacement target and draw the visible sprites.
pub(crate) fn encode(
    encoder: &mut wgpu::CommandEncoder,
    target: &wgpu::TextureView,
    res: &RippleResources,
    instances: u32,
) {
    let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("ripple_pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    if instances == 0 {
        return;
    }
    rpass.set_pipeline(&res.pipeline);
    rpass.set_bind_group(0, &res.bind_group, &[]);
    rpass.set_vertex_buffer(0, res.instance_buffer.slice(..));
    rpass.draw(0..6, 0..instances);
}
