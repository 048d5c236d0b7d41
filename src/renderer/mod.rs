pub mod camera;
pub mod gpu_debug;
pub mod render_timer;
pub mod renderable;
pub mod renderer;
pub mod surface_manager;
pub mod wgpu_context;
