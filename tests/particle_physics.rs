use glam::Vec3;
use gpu_particles::config::SimSettings;
use gpu_particles::particles::particle_physics::{integrate, Particle};
use gpu_particles::particles::particle_system::ParticleSystem;

mod common;

const EPSILON: f32 = 1e-3;

#[test]
fn free_particle_falls_under_gravity() {
    let spheres = common::distant_spheres();
    let params = common::sim_params(0.1, 1);
    let particle = Particle::new(Vec3::new(0.0, 500.0, 0.0), Vec3::new(10.0, 0.0, 0.0));

    let next = integrate(&particle, &spheres, &params);

    // v = 0 + (-250) * 0.1, p = p + v * dt
    common::assert_vec3_near(next.velocity.truncate(), Vec3::new(10.0, -25.0, 0.0), EPSILON);
    common::assert_vec3_near(next.position.truncate(), Vec3::new(1.0, 497.5, 0.0), EPSILON);
    assert_eq!(next.position.w, particle.position.w);
}

#[test]
fn zero_step_changes_nothing() {
    let spheres = common::distant_spheres();
    let params = common::sim_params(0.0, 1);
    let particle = Particle::new(Vec3::new(5.0, 200.0, -5.0), Vec3::new(1.0, 2.0, 3.0));

    assert_eq!(integrate(&particle, &spheres, &params), particle);
}

#[test]
fn particle_inside_a_sphere_is_pushed_to_its_surface_and_bounces() {
    let spheres = common::one_sphere_at_origin();
    let params = common::sim_params(0.01, 1);
    // Falling straight onto the top of the sphere.
    let particle = Particle::new(Vec3::new(0.0, 100.5, 0.0), Vec3::new(0.0, -100.0, 0.0));

    let next = integrate(&particle, &spheres, &params);

    common::assert_vec3_near(next.position.truncate(), Vec3::new(0.0, 100.0, 0.0), EPSILON);
    // Inward speed 102.5 is reflected and scaled by the restitution of 0.4.
    assert!(next.velocity.y > 0.0);
    assert!((next.velocity.y - 102.5 * 0.4).abs() < EPSILON, "velocity {}", next.velocity);
}

#[test]
fn particle_leaving_a_sphere_keeps_its_velocity() {
    let spheres = common::one_sphere_at_origin();
    let mut params = common::sim_params(0.01, 1);
    params.gravity = 0.0;
    // Inside the sphere but already moving outward.
    let particle = Particle::new(Vec3::new(90.0, 0.0, 0.0), Vec3::new(50.0, 0.0, 0.0));

    let next = integrate(&particle, &spheres, &params);

    common::assert_vec3_near(next.position.truncate(), Vec3::new(100.0, 0.0, 0.0), EPSILON);
    common::assert_vec3_near(next.velocity.truncate(), Vec3::new(50.0, 0.0, 0.0), EPSILON);
}

#[test]
fn particle_at_a_sphere_center_is_pushed_up() {
    let spheres = common::one_sphere_at_origin();
    let mut params = common::sim_params(0.01, 1);
    params.gravity = 0.0;
    let particle = Particle::at_rest(Vec3::ZERO);

    let next = integrate(&particle, &spheres, &params);

    common::assert_vec3_near(next.position.truncate(), Vec3::new(0.0, 100.0, 0.0), EPSILON);
}

#[test]
fn particle_below_the_kill_height_is_recycled_to_the_top() {
    let spheres = common::distant_spheres();
    let params = common::sim_params(0.1, 1);
    let settings = SimSettings::default();
    let particle = Particle::new(Vec3::new(3.0, settings.kill_height + 1.0, 4.0), Vec3::new(0.0, -100.0, 0.0));

    let next = integrate(&particle, &spheres, &params);

    // y after the step: kill + 1 - (100 + 25) * 0.1 = kill - 11.5
    let expected_y = settings.spawn_height - 11.5;
    assert!((next.position.y - expected_y).abs() < EPSILON, "position {}", next.position);
    assert_eq!(next.position.x, 3.0);
    assert_eq!(next.position.z, 4.0);
    assert_eq!(next.velocity.truncate(), Vec3::ZERO);
}

#[test]
fn initial_particles_fill_the_spawn_volume_at_rest() {
    let settings = SimSettings::default();
    let particles = ParticleSystem::generate_initial_particles(&mut common::seeded_rng(), 1000, &settings);

    assert_eq!(particles.len(), 1000);
    for particle in particles {
        let position = particle.position.truncate();
        assert!(position.x.abs() <= settings.spawn_extent);
        assert!(position.z.abs() <= settings.spawn_extent);
        assert!(position.y >= settings.kill_height && position.y < settings.spawn_height);
        assert_eq!(particle.velocity, glam::Vec4::ZERO);
    }
}

#[test]
fn particle_layout_matches_the_shaders() {
    assert_eq!(std::mem::size_of::<Particle>(), 32);
    assert_eq!(std::mem::size_of::<gpu_particles::particles::particle_physics::SimParams>(), 32);
}
