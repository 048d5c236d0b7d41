use crate::renderer::camera::CameraBinding;

/// Anything the renderer can draw inside its main render pass.
pub trait Renderable {
    fn draw(&self, render_pass: &mut wgpu::RenderPass, camera: &CameraBinding);
}
