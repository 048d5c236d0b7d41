//! Start-up constants of the demo gathered in one place.
//!
//! Nothing here is read from disk or the command line; `RUST_LOG` is the
//! only environment input and is handled by `env_logger`.

/// Particle count, two "megaparticles".
pub const DEFAULT_NUM_PARTICLES: u32 = 1024 * 1024 * 2;

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub window: WindowSettings,
    pub gpu: GpuSettings,
    pub num_particles: u32,
    pub clear_color: wgpu::Color,
    /// On-screen size of a particle in physical pixels.
    pub point_size: f32,
    pub sim: SimSettings,
}

#[derive(Debug, Clone)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct GpuSettings {
    pub vsync: bool,
    /// Enables backend validation and the fatal uncaptured-error handler.
    pub debug: bool,
}

/// Parameters of the particle integration rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimSettings {
    pub gravity: f32,
    pub restitution: f32,
    pub spawn_height: f32,
    pub kill_height: f32,
    /// Half extent of the spawn volume along x and z.
    pub spawn_extent: f32,
    /// Longest simulation step, in seconds.
    pub max_step: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            gpu: GpuSettings::default(),
            num_particles: DEFAULT_NUM_PARTICLES,
            clear_color: wgpu::Color { r: 0.2, g: 0.2, b: 0.25, a: 1.0 },
            point_size: 1.5,
            sim: SimSettings::default(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "GLParticles".to_string(),
            width: 1600,
            height: 900,
        }
    }
}

impl Default for GpuSettings {
    fn default() -> Self {
        Self {
            vsync: true,
            debug: cfg!(debug_assertions),
        }
    }
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            gravity: -250.0,
            restitution: 0.4,
            spawn_height: 1200.0,
            kill_height: -400.0,
            spawn_extent: 800.0,
            max_step: 0.1,
        }
    }
}

impl GpuSettings {
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}
