use glam::Vec2;
use crate::particles::particle_physics::Particle;
use crate::renderer::camera::CameraBinding;
use crate::renderer::wgpu_context::WgpuContext;
use crate::utils::bind_resources::BindResources;
use crate::utils::gpu_buffer::GpuBuffer;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
struct DrawParams {
    viewport: Vec2,
    point_size: f32,
    _padding: f32,
}

/// Draws every particle as a screen-aligned quad of `point_size` pixels.
pub struct ParticleDrawer {
    render_pipeline: wgpu::RenderPipeline,
    vertices: GpuBuffer<Vec2>,
    indices: GpuBuffer<u32>,
    draw_params: GpuBuffer<DrawParams>,
    draw_params_binding: BindResources,
}

impl ParticleDrawer {
    pub fn new(wgpu_context: &WgpuContext, camera: &CameraBinding, point_size: f32) -> Self {
        let draw_params = GpuBuffer::new(
            wgpu_context,
            "Particle Draw Params",
            vec![DrawParams {
                viewport: wgpu_context.window_size().max(Vec2::ONE),
                point_size,
                _padding: 0.0,
            }],
            wgpu::BufferUsages::UNIFORM,
        );
        let draw_params_binding = Self::create_draw_params_binding(wgpu_context, &draw_params);

        let shader = wgpu_context.get_device().create_shader_module(wgpu::include_wgsl!("particle_drawer.wgsl"));
        let render_pipeline_layout = wgpu_context.get_device().create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Particle Render Pipeline Layout"),
            bind_group_layouts: &[camera.camera_bind_group_layout(), &draw_params_binding.bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = wgpu_context.get_device().create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Particle Render Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[
                    // Buffer 0: quad corners
                    wgpu::VertexBufferLayout {
                        array_stride: size_of::<Vec2>() as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![0 => Float32x2],
                    },
                    // Buffer 1: the particles, one per instance
                    wgpu::VertexBufferLayout {
                        array_stride: size_of::<Particle>() as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![1 => Float32x4, 2 => Float32x4],
                    },
                ],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: wgpu_context.get_surface_config().format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            render_pipeline,
            vertices: Self::create_model_vertices(wgpu_context),
            indices: Self::create_model_indices(wgpu_context),
            draw_params,
            draw_params_binding,
        }
    }

    fn create_draw_params_binding(wgpu_context: &WgpuContext, draw_params: &GpuBuffer<DrawParams>) -> BindResources {
        let device = wgpu_context.get_device();
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Particle Draw Params Layout"),
            entries: &[BindResources::buffer_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX,
                wgpu::BufferBindingType::Uniform,
            )],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Particle Draw Params Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: draw_params.buffer().as_entire_binding(),
            }],
        });
        BindResources::new(bind_group_layout, bind_group)
    }

    fn create_model_vertices(wgpu_context: &WgpuContext) -> GpuBuffer<Vec2> {
        GpuBuffer::new(
            wgpu_context,
            "Particle Quad Vertices",
            vec![
                Vec2::new(-0.5, 0.5),
                Vec2::new(0.5, 0.5),
                Vec2::new(0.5, -0.5),
                Vec2::new(-0.5, -0.5),
            ],
            wgpu::BufferUsages::VERTEX,
        )
    }

    fn create_model_indices(wgpu_context: &WgpuContext) -> GpuBuffer<u32> {
        GpuBuffer::new(
            wgpu_context,
            "Particle Quad Indices",
            vec![
                0, 3, 2,
                2, 1, 0,
            ],
            wgpu::BufferUsages::INDEX,
        )
    }

    /// Keeps the on-screen particle size constant after a window resize.
    pub fn resize(&mut self, wgpu_context: &WgpuContext, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let mut params = self.draw_params.data()[0];
        params.viewport = Vec2::new(width as f32, height as f32);
        self.draw_params.write(wgpu_context, vec![params]);
    }

    pub fn draw(&self, render_pass: &mut wgpu::RenderPass, camera: &CameraBinding, particles: &GpuBuffer<Particle>) {
        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_vertex_buffer(0, self.vertices.buffer().slice(..));
        render_pass.set_vertex_buffer(1, particles.buffer().slice(..));
        render_pass.set_index_buffer(self.indices.buffer().slice(..), wgpu::IndexFormat::Uint32);

        render_pass.set_bind_group(0, camera.binding_group(), &[]);
        render_pass.set_bind_group(1, &self.draw_params_binding.bind_group, &[]);
        render_pass.draw_indexed(0..self.indices.len() as u32, 0, 0..particles.len() as u32);
    }
}
