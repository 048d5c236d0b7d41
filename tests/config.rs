use gpu_particles::config::{DemoConfig, GpuSettings, DEFAULT_NUM_PARTICLES};
use gpu_particles::utils::compute_shader::workgroups_for_items;

#[test]
fn defaults_match_the_demo() {
    let config = DemoConfig::default();

    assert_eq!(config.num_particles, 2_097_152);
    assert_eq!(config.num_particles, DEFAULT_NUM_PARTICLES);
    assert_eq!(config.window.title, "GLParticles");
    assert_eq!((config.window.width, config.window.height), (1600, 900));
    assert!(config.gpu.vsync);
    assert_eq!(config.clear_color, wgpu::Color { r: 0.2, g: 0.2, b: 0.25, a: 1.0 });
    assert!(config.sim.kill_height < config.sim.spawn_height);
}

#[test]
fn vsync_selects_the_present_mode() {
    let vsync = GpuSettings { vsync: true, debug: false };
    let no_vsync = GpuSettings { vsync: false, debug: false };

    assert_eq!(vsync.present_mode(), wgpu::PresentMode::AutoVsync);
    assert_eq!(no_vsync.present_mode(), wgpu::PresentMode::AutoNoVsync);
}

#[test]
fn dispatch_covers_every_particle() {
    // 2M particles in workgroups of 64 fit within the 65535 groups per axis limit.
    assert_eq!(workgroups_for_items((DEFAULT_NUM_PARTICLES, 1, 1), (64, 1, 1)), (32_768, 1, 1));
    assert_eq!(workgroups_for_items((65, 1, 1), (64, 1, 1)), (2, 1, 1));
    assert_eq!(workgroups_for_items((64, 1, 1), (64, 1, 1)), (1, 1, 1));
    assert_eq!(workgroups_for_items((0, 1, 1), (64, 1, 1)), (0, 1, 1));
}
