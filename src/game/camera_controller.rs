use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;
use crate::renderer::camera::Camera;

/// Forward acceleration while a movement key is held, units per second squared.
pub const ACCELERATION: f32 = 40.0;
/// Forward speed cap, units per second.
pub const MAX_SPEED: f32 = 200.0;
/// Pixels of mouse motion per degree of rotation.
pub const MOUSE_DIVISOR: f32 = 25.0;

/// Turns keyboard and mouse state into camera motion once per frame.
#[derive(Debug, Default)]
pub struct CameraController {
    is_forward_pressed: bool,
    is_backward_pressed: bool,
    is_rotating: bool,
    last_cursor_position: Option<Vec2>,
    mouse_delta: Vec2,
    velocity: f32,
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the key is a camera key.
    pub fn process_keyboard(&mut self, code: KeyCode, is_pressed: bool) -> bool {
        match code {
            KeyCode::KeyW => {
                self.is_forward_pressed = is_pressed;
                true
            }
            KeyCode::KeyS => {
                self.is_backward_pressed = is_pressed;
                true
            }
            _ => false,
        }
    }

    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.is_rotating = state.is_pressed();
        }
    }

    /// Accumulates cursor motion; only motion with the left button held rotates the camera.
    pub fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        let position = Vec2::new(position.x as f32, position.y as f32);
        if let Some(last) = self.last_cursor_position {
            if self.is_rotating {
                self.mouse_delta += position - last;
            }
        }
        self.last_cursor_position = Some(position);
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn update_camera(&mut self, camera: &mut Camera, dt: f32) {
        let is_moving = self.is_forward_pressed || self.is_backward_pressed;

        // The distance uses the speed before the cap, the cap applies from the next frame.
        let mut distance = 0.0;
        if is_moving {
            self.velocity += ACCELERATION * dt;
            distance = self.velocity * dt;
        } else {
            self.velocity = 0.0;
        }
        self.velocity = self.velocity.min(MAX_SPEED);

        camera.pitch -= self.mouse_delta.y / MOUSE_DIVISOR;
        camera.yaw += self.mouse_delta.x / MOUSE_DIVISOR;
        self.mouse_delta = Vec2::ZERO;

        if self.is_backward_pressed {
            camera.position.z -= distance;
        }
        if self.is_forward_pressed {
            camera.position.z += distance;
        }

        camera.update();
    }
}
