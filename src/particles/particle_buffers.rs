use crate::particles::particle_physics::{Particle, SimParams};
use crate::renderer::wgpu_context::WgpuContext;
use crate::scene::spheres::{SphereUniform, Spheres};
use crate::utils::gpu_buffer::GpuBuffer;

pub struct ParticleBuffers {
    pub particles: GpuBuffer<Particle>,
    pub sim_params: GpuBuffer<SimParams>,
    pub spheres: GpuBuffer<SphereUniform>,
}

impl ParticleBuffers {
    pub fn new(wgpu_context: &WgpuContext, particles: Vec<Particle>, spheres: &Spheres, sim_params: SimParams) -> Self {
        Self {
            // Also bound as an instance vertex buffer by the drawer.
            particles: GpuBuffer::new(
                wgpu_context,
                "Particles",
                particles,
                wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::VERTEX,
            ),
            sim_params: GpuBuffer::new(
                wgpu_context,
                "Particle Sim Params",
                vec![sim_params],
                wgpu::BufferUsages::UNIFORM,
            ),
            spheres: GpuBuffer::new(
                wgpu_context,
                "Sphere Obstacles",
                vec![spheres.to_uniform()],
                wgpu::BufferUsages::UNIFORM,
            ),
        }
    }
}
