// Not every test file will use every function.
#![allow(dead_code)]

use glam::Vec3;
use gpu_particles::config::SimSettings;
use gpu_particles::particles::particle_physics::{Particle, SimParams};
use gpu_particles::particles::particle_system::ParticleSystem;
use gpu_particles::renderer::wgpu_context::WgpuContext;
use gpu_particles::scene::spheres::{Spheres, SPHERE_COUNT};
use rand::rngs::StdRng;
use rand::SeedableRng;

// A struct to hold all the common objects for a GPU test.
pub struct TestSetup {
    pub wgpu_context: WgpuContext,
}

/// Creates a surfaceless context, or `None` on machines without a usable adapter.
pub async fn setup() -> Option<TestSetup> {
    match WgpuContext::new_for_test().await {
        Ok(wgpu_context) => Some(TestSetup { wgpu_context }),
        Err(e) => {
            eprintln!("Skipping GPU test, no adapter available: {e}");
            None
        }
    }
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

/// Every sphere parked far away from the origin so it never touches the test particles.
pub fn distant_spheres() -> Spheres {
    Spheres {
        radii: [1.0; SPHERE_COUNT],
        centers: [Vec3::new(0.0, -10_000.0, 0.0); SPHERE_COUNT],
    }
}

/// A single sphere of radius 100 at the origin, the rest parked far away.
pub fn one_sphere_at_origin() -> Spheres {
    let mut spheres = distant_spheres();
    spheres.radii[0] = 100.0;
    spheres.centers[0] = Vec3::ZERO;
    spheres
}

pub fn sim_params(delta_time: f32, num_particles: u32) -> SimParams {
    let mut params = SimParams::new(&SimSettings::default(), num_particles);
    params.delta_time = delta_time;
    params
}

pub fn create_test_particle_system(wgpu_context: &WgpuContext, particles: Vec<Particle>, spheres: &Spheres) -> ParticleSystem {
    ParticleSystem::new_from_particles(wgpu_context, particles, spheres, &SimSettings::default())
}

pub fn assert_vec3_near(actual: Vec3, expected: Vec3, tolerance: f32) {
    assert!(
        actual.abs_diff_eq(expected, tolerance),
        "expected {expected}, got {actual}"
    );
}
