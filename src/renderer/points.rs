//! Additive billboard renderer for the particle field.

use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::options::{ColorOptions, DisplayOptions};
use crate::scene::PointCloud;

/// Per-object uniform: whole-cloud model matrix plus material parameters.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PointsObject {
    model: [[f32; 4]; 4],
    color: [f32; 3],
    opacity: f32,
    size: f32,
    _pad: [f32; 3],
}

/// Draws the point cloud as camera-facing quads with additive blending.
///
/// The position storage buffer is allocated once at construction and
/// re-uploaded only when the cloud's dirty flag is set.
pub struct PointsRenderer {
    pipeline: wgpu::RenderPipeline,
    object: PointsObject,
    object_buffer: wgpu::Buffer,
    position_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    count: u32,
}

impl PointsRenderer {
    /// Build the pipeline and upload the initial position buffer.
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        cloud: &PointCloud,
        colors: &ColorOptions,
        display: &DisplayOptions,
    ) -> Self {
        let device = &context.device;
        let shader = device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/points.wgsl"
        ));

        let object = PointsObject {
            model: glam::Mat4::IDENTITY.to_cols_array_2d(),
            color: colors.points,
            opacity: colors.points_opacity,
            size: display.point_size,
            _pad: [0.0; 3],
        };

        let object_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Points Object Buffer"),
                contents: bytemuck::cast_slice(&[object]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        // Zero-sized buffers cannot be bound; an empty cloud still gets one
        // placeholder point that is never drawn.
        let contents: &[f32] = if cloud.positions().is_empty() {
            &[0.0; 3]
        } else {
            cloud.positions()
        };
        let position_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Points Position Buffer"),
                contents: bytemuck::cast_slice(contents),
                usage: wgpu::BufferUsages::STORAGE
                    | wgpu::BufferUsages::COPY_DST,
            });

        let layout = device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Points Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX
                            | wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Storage {
                                read_only: true,
                            },
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                ],
            },
        );

        let bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                layout: &layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: object_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: position_buffer.as_entire_binding(),
                    },
                ],
                label: Some("Points Bind Group"),
            });

        let pipeline_layout = device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Points Pipeline Layout"),
                bind_group_layouts: &[camera_layout, &layout],
                push_constant_ranges: &[],
            },
        );

        let pipeline = device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Points Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: Some(wgpu::BlendState {
                            color: wgpu::BlendComponent {
                                src_factor: wgpu::BlendFactor::One,
                                dst_factor: wgpu::BlendFactor::One,
                                operation: wgpu::BlendOperation::Add,
                            },
                            alpha: wgpu::BlendComponent::OVER,
                        }),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        );

        Self {
            pipeline,
            object,
            object_buffer,
            position_buffer,
            bind_group,
            count: cloud.count() as u32,
        }
    }

    /// Upload the per-frame model matrix, and the position buffer if the
    /// cloud was marked dirty.
    pub fn prepare(&mut self, queue: &wgpu::Queue, cloud: &mut PointCloud) {
        self.object.model = cloud.model_matrix().to_cols_array_2d();
        queue.write_buffer(
            &self.object_buffer,
            0,
            bytemuck::cast_slice(&[self.object]),
        );

        if cloud.take_dirty() && !cloud.positions().is_empty() {
            queue.write_buffer(
                &self.position_buffer,
                0,
                bytemuck::cast_slice(cloud.positions()),
            );
        }
    }

    /// Record the draw: 6 vertices per point.
    pub fn draw(
        &self,
        render_pass: &mut wgpu::RenderPass<'_>,
        camera_bind_group: &wgpu::BindGroup,
    ) {
        if self.count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, camera_bind_group, &[]);
        render_pass.set_bind_group(1, &self.bind_group, &[]);
        render_pass.draw(0..self.count * 6, 0..1);
    }
}
