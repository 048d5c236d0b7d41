use wgpu::{BindGroup, BindGroupLayout};
use wgpu_profiler::GpuProfiler;
use crate::particles::particle_buffers::ParticleBuffers;
use crate::particles::particle_physics::SimParams;
use crate::renderer::wgpu_context::WgpuContext;
use crate::utils::bind_resources::BindResources;
use crate::utils::compute_shader::ComputeShader;

/// The value must match in the compute shader.
pub const WORKGROUP_SIZE: (u32, u32, u32) = (64, 1, 1);

pub struct ParticleIntegration {
    integration_pass: ComputeShader,
    bind_resources: BindResources,
}

impl ParticleIntegration {
    pub fn new(wgpu_context: &WgpuContext, particle_buffers: &ParticleBuffers) -> Self {
        let bind_resources = Self::create_binding_resources(wgpu_context, particle_buffers);
        let integration_pass = Self::create_integration_pass(wgpu_context, &bind_resources);

        Self {
            integration_pass,
            bind_resources,
        }
    }

    fn create_integration_pass(wgpu_context: &WgpuContext, bind_resources: &BindResources) -> ComputeShader {
        ComputeShader::new(
            wgpu_context,
            wgpu::include_wgsl!("particle_integration.wgsl"),
            "integrate",
            &[&bind_resources.bind_group_layout],
            WORKGROUP_SIZE,
        )
    }

    /// Uploads the step parameters and integrates every particle once.
    pub fn update_positions(
        &self,
        wgpu_context: &WgpuContext,
        gpu_profiler: &mut GpuProfiler,
        particle_buffers: &mut ParticleBuffers,
        sim_params: SimParams,
    ) {
        particle_buffers.sim_params.write(wgpu_context, vec![sim_params]);

        let mut encoder = wgpu_context.get_device().create_command_encoder(
            &wgpu::CommandEncoderDescriptor { label: Some("Particle Integration Encoder") }
        );

        {
            let mut scope = gpu_profiler.scope("Particle integration pass", &mut encoder);
            self.integration_pass.dispatch_by_items(
                &mut scope,
                (sim_params.num_particles, 1, 1),
                &[&self.bind_resources.bind_group],
            );
        }
        gpu_profiler.resolve_queries(&mut encoder);

        wgpu_context.get_queue().submit(std::iter::once(encoder.finish()));
    }

    fn create_binding_resources(wgpu_context: &WgpuContext, particle_buffers: &ParticleBuffers) -> BindResources {
        let bind_group_layout = Self::create_binding_group_layout(wgpu_context);
        let bind_group = Self::create_bind_group(wgpu_context, &bind_group_layout, particle_buffers);

        BindResources::new(bind_group_layout, bind_group)
    }

    fn create_bind_group(wgpu_context: &WgpuContext, bind_group_layout: &BindGroupLayout, particle_buffers: &ParticleBuffers) -> BindGroup {
        wgpu_context.get_device().create_bind_group(
            &wgpu::BindGroupDescriptor {
                label: Some("Particle Integration Bind Group"),
                layout: bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: particle_buffers.particles.buffer().as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: particle_buffers.sim_params.buffer().as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: particle_buffers.spheres.buffer().as_entire_binding(),
                    },
                ],
            }
        )
    }

    fn create_binding_group_layout(wgpu_context: &WgpuContext) -> BindGroupLayout {
        let compute = wgpu::ShaderStages::COMPUTE;
        wgpu_context.get_device().create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Particle Integration Bind Group Layout"),
            entries: &[
                // Binding 0: the particles, read-write
                BindResources::buffer_layout_entry(0, compute, wgpu::BufferBindingType::Storage { read_only: false }),
                // Binding 1: step parameters
                BindResources::buffer_layout_entry(1, compute, wgpu::BufferBindingType::Uniform),
                // Binding 2: sphere obstacles
                BindResources::buffer_layout_entry(2, compute, wgpu::BufferBindingType::Uniform),
            ],
        })
    }
}
