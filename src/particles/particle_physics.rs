//! The particle integration rule on the CPU.
//!
//! `particle_integration.wgsl` runs the same steps on the GPU; keep both in
//! sync. GPU read-backs are checked against this version.

use glam::{Vec3, Vec4};
use crate::config::SimSettings;
use crate::scene::spheres::Spheres;

/// Distances below this are treated as "at the sphere center".
const CENTER_EPSILON: f32 = 1e-4;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Particle {
    /// `xyz` position, `w` unused.
    pub position: Vec4,
    /// `xyz` velocity, `w` unused.
    pub velocity: Vec4,
}

impl Particle {
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            position: position.extend(1.0),
            velocity: Vec4::ZERO,
        }
    }

    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position: position.extend(1.0),
            velocity: velocity.extend(0.0),
        }
    }
}

/// Uniform block of the integration pass.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SimParams {
    pub delta_time: f32,
    pub num_particles: u32,
    pub gravity: f32,
    pub restitution: f32,
    pub spawn_height: f32,
    pub kill_height: f32,
    pub _padding: [f32; 2],
}

impl SimParams {
    pub fn new(settings: &SimSettings, num_particles: u32) -> Self {
        Self {
            delta_time: 0.0,
            num_particles,
            gravity: settings.gravity,
            restitution: settings.restitution,
            spawn_height: settings.spawn_height,
            kill_height: settings.kill_height,
            _padding: [0.0; 2],
        }
    }
}

/// Advances one particle by `params.delta_time`.
pub fn integrate(particle: &Particle, spheres: &Spheres, params: &SimParams) -> Particle {
    let dt = params.delta_time;
    let mut position = particle.position.truncate();
    let mut velocity = particle.velocity.truncate();

    velocity.y += params.gravity * dt;
    position += velocity * dt;

    for (center, radius) in spheres.iter() {
        let offset = position - center;
        let distance = offset.length();
        if distance < radius {
            let normal = if distance > CENTER_EPSILON { offset / distance } else { Vec3::Y };
            position = center + normal * radius;
            let normal_speed = velocity.dot(normal);
            if normal_speed < 0.0 {
                velocity -= (1.0 + params.restitution) * normal_speed * normal;
            }
        }
    }

    if position.y < params.kill_height {
        position.y += params.spawn_height - params.kill_height;
        velocity = Vec3::ZERO;
    }

    Particle {
        position: position.extend(particle.position.w),
        velocity: velocity.extend(particle.velocity.w),
    }
}
