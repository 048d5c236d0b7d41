use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Handles input that concerns the whole application rather than the scene.
pub struct InputManager {}

impl InputManager {
    pub fn new() -> InputManager {
        InputManager {}
    }

    /// Returns true when the event was consumed.
    pub fn manage_input(&self, event: &WindowEvent, event_loop: &ActiveEventLoop) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                true
            }
            WindowEvent::KeyboardInput {
                event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(KeyCode::Escape),
                    state: key_state,
                    ..
                },
                ..
            } => {
                if key_state.is_pressed() {
                    event_loop.exit();
                }
                true
            }
            _ => false,
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
