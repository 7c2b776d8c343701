use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraUniform};
use crate::gpu::render_context::RenderContext;
use crate::options::CameraOptions;

/// Owns the [`Camera`], its GPU uniform buffer, and the shared bind group
/// layout handed to every pipeline.
///
/// The camera position is fixed at construction; [`resize`](Self::resize)
/// only updates the aspect ratio.
pub struct CameraRig {
    /// Camera state (eye, target, projection parameters).
    pub camera: Camera,
    /// CPU-side uniform mirror.
    pub uniform: CameraUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout shared by all render pipelines.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group referencing the uniform buffer.
    pub bind_group: wgpu::BindGroup,
}

impl CameraRig {
    /// Build the camera from options, sized to the current surface aspect.
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        let camera = Camera {
            eye: Vec3::from_array(options.eye),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: context.aspect(),
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Camera Bind Group"),
                });

        Self {
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Update the aspect ratio for a new viewport size. Repeated calls with
    /// identical dimensions leave the camera unchanged.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height.max(1) as f32;
    }

    /// Re-upload the uniform from current camera state.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update_view_proj(&self.camera);
        queue.write_buffer(
            &self.buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );
    }
}
