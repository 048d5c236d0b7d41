use glam::Vec3;
use rand::Rng;
use wgpu_profiler::GpuProfiler;
use crate::config::{DemoConfig, SimSettings};
use crate::particles::particle_buffers::ParticleBuffers;
use crate::particles::particle_drawer::ParticleDrawer;
use crate::particles::particle_integration::ParticleIntegration;
use crate::particles::particle_physics::{Particle, SimParams};
use crate::renderer::camera::CameraBinding;
use crate::renderer::renderable::Renderable;
use crate::renderer::wgpu_context::WgpuContext;
use crate::scene::spheres::Spheres;

/// A fixed-size buffer of GPU-simulated particles.
///
/// Allocated once, integrated and drawn every frame, released on drop.
pub struct ParticleSystem {
    particle_buffers: ParticleBuffers,
    particle_integration: ParticleIntegration,
    particle_drawer: Option<ParticleDrawer>,
    sim_params: SimParams,
}

impl ParticleSystem {
    pub fn new(wgpu_context: &WgpuContext, camera: &CameraBinding, spheres: &Spheres, config: &DemoConfig) -> Self {
        let particles = Self::generate_initial_particles(&mut rand::rng(), config.num_particles as usize, &config.sim);
        log::info!("Spawning {} particles", particles.len());

        let mut particle_system = Self::new_from_particles(wgpu_context, particles, spheres, &config.sim);
        particle_system.particle_drawer = Some(ParticleDrawer::new(wgpu_context, camera, config.point_size));
        particle_system
    }

    /// Builds a system from explicit particles. It has no drawer, so it needs no surface.
    pub fn new_from_particles(wgpu_context: &WgpuContext, particles: Vec<Particle>, spheres: &Spheres, settings: &SimSettings) -> Self {
        let sim_params = SimParams::new(settings, particles.len() as u32);
        let particle_buffers = ParticleBuffers::new(wgpu_context, particles, spheres, sim_params);
        let particle_integration = ParticleIntegration::new(wgpu_context, &particle_buffers);

        Self {
            particle_buffers,
            particle_integration,
            particle_drawer: None,
            sim_params,
        }
    }

    /// Random positions inside the spawn volume, at rest.
    pub fn generate_initial_particles<R: Rng + ?Sized>(rng: &mut R, num_particles: usize, settings: &SimSettings) -> Vec<Particle> {
        let extent = settings.spawn_extent;
        (0..num_particles)
            .map(|_| {
                Particle::at_rest(Vec3::new(
                    rng.random_range(-extent..extent),
                    rng.random_range(settings.kill_height..settings.spawn_height),
                    rng.random_range(-extent..extent),
                ))
            })
            .collect()
    }

    /// Advances the simulation by `delta_time` seconds.
    pub fn update(&mut self, wgpu_context: &WgpuContext, gpu_profiler: &mut GpuProfiler, delta_time: f32) {
        self.sim_params.delta_time = delta_time;
        self.particle_integration.update_positions(
            wgpu_context,
            gpu_profiler,
            &mut self.particle_buffers,
            self.sim_params,
        );
    }

    pub fn resize(&mut self, wgpu_context: &WgpuContext, width: u32, height: u32) {
        if let Some(drawer) = self.particle_drawer.as_mut() {
            drawer.resize(wgpu_context, width, height);
        }
    }

    pub fn download_particles(&mut self, wgpu_context: &WgpuContext) -> Result<&Vec<Particle>, wgpu::BufferAsyncError> {
        self.particle_buffers.particles.download(wgpu_context)
    }

    pub fn sim_params(&self) -> &SimParams {
        &self.sim_params
    }

    pub fn len(&self) -> usize {
        self.particle_buffers.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particle_buffers.particles.is_empty()
    }
}

impl Renderable for ParticleSystem {
    fn draw(&self, render_pass: &mut wgpu::RenderPass, camera: &CameraBinding) {
        if let Some(drawer) = self.particle_drawer.as_ref() {
            drawer.draw(render_pass, camera, &self.particle_buffers.particles);
        }
    }
}
