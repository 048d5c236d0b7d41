use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use wgpu_profiler::{GpuProfiler, GpuProfilerSettings, GpuTimerQueryResult};
use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;
use crate::config::DemoConfig;
use crate::game::camera_controller::CameraController;
use crate::game::input_manager::InputManager;
use crate::game::sim_clock::SimClock;
use crate::particles::particle_system::ParticleSystem;
use crate::renderer::render_timer::RenderTimer;
use crate::renderer::renderer::Renderer;
use crate::renderer::wgpu_context::WgpuContext;
use crate::scene::spheres::Spheres;

// This will store the state of the demo
pub struct State {
    wgpu_context: WgpuContext,
    render_timer: RenderTimer,
    input_manager: InputManager,
    camera_controller: CameraController,
    sim_clock: SimClock,
    renderer: Renderer,
    particles: Rc<RefCell<ParticleSystem>>,
    gpu_profiler: GpuProfiler,
}

impl State {
    pub async fn new(window: Arc<Window>, config: &DemoConfig) -> anyhow::Result<Self> {
        let wgpu_context = WgpuContext::new(window, &config.gpu).await?;
        let mut renderer = Renderer::new(&wgpu_context, config.clear_color);

        let spheres = Spheres::random(&mut rand::rng());
        for (center, radius) in spheres.iter() {
            log::debug!("Sphere at {center} with radius {radius:.1}");
        }

        let particles = Rc::new(RefCell::new(ParticleSystem::new(&wgpu_context, renderer.camera_binding(), &spheres, config)));
        renderer.add_renderable(particles.clone());

        let gpu_profiler = GpuProfiler::new(wgpu_context.get_device(), GpuProfilerSettings::default())
            .map_err(|e| anyhow::anyhow!("Unable to create the GPU profiler: {e:?}"))?;

        Ok(Self {
            wgpu_context,
            render_timer: RenderTimer::new(),
            input_manager: InputManager::new(),
            camera_controller: CameraController::new(),
            sim_clock: SimClock::new(config.sim.max_step),
            renderer,
            particles,
            gpu_profiler,
        })
    }

    pub fn render_loop(&mut self, event: &WindowEvent, event_loop: &ActiveEventLoop) {
        if self.input_manager.manage_input(event, event_loop) {
            return;
        }

        match event {
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                self.update();
                match self.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = self.wgpu_context.window_size();
                        self.resize(size.x as u32, size.y as u32);
                    }
                    Err(e) => {
                        log::error!("Unable to render: {:?}", e);
                    }
                }
                self.finish_profiler_frame();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        repeat,
                        ..
                    },
                ..
            } => {
                match (code, key_state.is_pressed()) {
                    (KeyCode::Space, true) if !repeat => {
                        let paused = self.sim_clock.toggle_pause();
                        log::info!("Simulation {}", if paused { "paused" } else { "resumed" });
                    }
                    _ => {
                        self.camera_controller.process_keyboard(*code, key_state.is_pressed());
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.camera_controller.process_mouse_button(*button, *state);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.camera_controller.process_cursor_moved(*position);
            }
            _ => {}
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.wgpu_context.resize(width, height);
        self.renderer.resize(width, height);
        self.particles.borrow_mut().resize(&self.wgpu_context, width, height);
    }

    fn update(&mut self) {
        let dt = self.render_timer.get_delta().as_secs_f32();

        self.camera_controller.update_camera(self.renderer.camera_mut(), dt);
        self.renderer.update_camera(&self.wgpu_context);

        if let Some(step) = self.sim_clock.step(dt) {
            self.particles.borrow_mut().update(&self.wgpu_context, &mut self.gpu_profiler, step);
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.renderer.render(&self.wgpu_context, &mut self.gpu_profiler)?;
        Ok(())
    }

    fn finish_profiler_frame(&mut self) {
        if let Err(e) = self.gpu_profiler.end_frame() {
            log::warn!("Unable to end the profiler frame: {:?}", e);
            return;
        }
        let timestamp_period = self.wgpu_context.get_queue().get_timestamp_period();
        if let Some(results) = self.gpu_profiler.process_finished_frame(timestamp_period) {
            if log::log_enabled!(log::Level::Trace) {
                log_timings(&results, 0);
            }
        }
    }
}

fn log_timings(results: &[GpuTimerQueryResult], depth: usize) {
    for result in results {
        if let Some(time) = &result.time {
            log::trace!("{:indent$}{}: {:.3} ms", "", result.label, (time.end - time.start) * 1000.0, indent = depth * 2);
        }
        log_timings(&result.nested_queries, depth + 1);
    }
}
