pub mod particle_system;
pub mod particle_physics;
mod particle_buffers;
mod particle_drawer;
mod particle_integration;
