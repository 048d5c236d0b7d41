pub mod config;
pub mod game;
pub mod particles;
pub mod renderer;
pub mod scene;
pub mod utils;

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use config::DemoConfig;
use game::state::State;

pub struct App {
    config: DemoConfig,
    state: Option<State>,
}

impl App {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.config.window.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(self.config.window.width, self.config.window.height));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Unable to create the window: {e}");
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(State::new(window, &self.config)) {
            Ok(state) => self.state = Some(state),
            Err(e) => {
                log::error!("Unable to initialize the renderer: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        state.render_loop(&event, event_loop);
    }
}

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(DemoConfig::default());

    event_loop.run_app(&mut app)?;

    Ok(())
}
