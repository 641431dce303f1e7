use super::helpers;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CompositeUniforms {
    pub(crate) cover_scale: [f32; 2],
    pub(crate) strength: f32,
    pub(crate) _pad: f32,
}

pub(crate) struct CompositeResources {
    pub(crate) bgl: wgpu::BindGroupLayout,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) pipeline: wgpu::RenderPipeline,
}

pub(crate) fn create_composite_resources(
    device: &wgpu::Device,
    swap_format: wgpu::TextureFormat,
) -> CompositeResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("composite_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::COMPOSITE_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("composite_bgl"),
        entries: &[
            helpers::texture_entry(0), // base image
            helpers::texture_entry(1), // displacement
            helpers::sampler_entry(2),
            helpers::uniform_entry(3, wgpu::ShaderStages::FRAGMENT),
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("composite_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("composite_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_fullscreen"),
            buffers: &[],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_composite"),
            targets: &[Some(wgpu::ColorTargetState {
                format: swap_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    let uniform_buffer = helpers::uniform_buffer::<CompositeUniforms>(device, "composite_uniforms");

    CompositeResources {
        bgl,
        uniform_buffer,
        pipeline,
    }
}

/// Rebuilt whenever the displacement target is recreated.
pub(crate) fn create_bind_group(
    device: &wgpu::Device,
    res: &CompositeResources,
    base_view: &wgpu::TextureView,
    displacement_view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("composite_bg"),
        layout: &res.bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(base_view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(displacement_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
            wgpu::BindGroupEntry {
                binding: 3,
                resource: res.uniform_buffer.as_entire_binding(),
            },
        ],
    })
}

pub(crate) fn write_uniforms(
    queue: &wgpu::Queue,
    buffer: &wgpu::Buffer,
    cover_scale: [f32; 2],
    strength: f32,
) {
    let u = CompositeUniforms {
        cover_scale,
        strength,
        _pad: 0.0,
    };
    queue.write_buffer(buffer, 0, bytemuck::bytes_of(&u));
}

/// Pass 2: one full-screen triangle onto the swapchain view.
pub(crate) fn encode(
    encoder: &mut wgpu::CommandEncoder,
    target: &wgpu::TextureView,
    clear: wgpu::Color,
    pipeline: &wgpu::RenderPipeline,
    bind_group: &wgpu::BindGroup,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("composite_pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bind_group, &[]);
    r.draw(0..3, 0..1);
    drop(r);
}
