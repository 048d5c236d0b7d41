use std::sync::Arc;
use glam::Vec2;
use wgpu_profiler::GpuProfiler;
use winit::window::Window;

use crate::config::GpuSettings;
use crate::renderer::gpu_debug;
use crate::renderer::surface_manager::SurfaceManager;

pub struct WgpuContext {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_manager: Option<SurfaceManager>,
}

impl WgpuContext {
    pub async fn new(window: Arc<Window>, settings: &GpuSettings) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            flags: Self::instance_flags(settings),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            }).await?;

        let info = adapter.get_info();
        log::info!("Using adapter {} ({:?})", info.name, info.backend);

        let mut surface_manager = SurfaceManager::new(window, surface, &adapter, settings.present_mode());

        // Timestamp queries only feed the profiler, so they are requested when present.
        let timer_features = adapter.features() & GpuProfiler::ALL_WGPU_TIMER_FEATURES;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Particle Device"),
                required_features: timer_features,
                required_limits: adapter.limits(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            }).await?;

        if settings.debug {
            gpu_debug::install_error_handler(&device);
        }

        let size = surface_manager.window_size();
        surface_manager.resize(size.width, size.height, &device);

        Ok(Self {
            device,
            queue,
            surface_manager: Some(surface_manager),
        })
    }

    /// Creates a context without a window or surface.
    pub async fn new_for_test() -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Test Device"),
                required_limits: adapter.limits(),
                ..Default::default()
            })
            .await?;

        Ok(Self {
            device,
            queue,
            surface_manager: None,
        })
    }

    fn instance_flags(settings: &GpuSettings) -> wgpu::InstanceFlags {
        if settings.debug {
            wgpu::InstanceFlags::debugging()
        } else {
            wgpu::InstanceFlags::empty()
        }
    }

    pub fn window_size(&self) -> Vec2 {
        match &self.surface_manager {
            Some(surface_manager) => {
                let size = surface_manager.window_size();
                Vec2::new(size.width as f32, size.height as f32)
            }
            None => Vec2::ZERO,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(surface_manager) = self.surface_manager.as_mut() {
            surface_manager.resize(width, height, &self.device);
        }
    }

    pub fn get_window(&self) -> &Arc<Window> {
        self.surface_manager().get_window()
    }

    pub fn get_surface(&self) -> &wgpu::Surface<'static> {
        self.surface_manager().get_surface()
    }

    pub fn is_surface_configured(&self) -> bool {
        self.surface_manager.as_ref().is_some_and(|s| s.is_surface_configured())
    }

    pub fn get_device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn get_queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn get_surface_config(&self) -> &wgpu::SurfaceConfiguration {
        self.surface_manager().get_config()
    }

    fn surface_manager(&self) -> &SurfaceManager {
        self.surface_manager.as_ref().expect("No surface in this context")
    }
}
