use std::cell::RefCell;
use std::rc::Rc;
use wgpu_profiler::GpuProfiler;
use crate::renderer::camera::{Camera, CameraBinding};
use crate::renderer::renderable::Renderable;
use crate::renderer::wgpu_context::WgpuContext;

/// Owns the camera and draws every registered renderable into the surface.
pub struct Renderer {
    background_color: wgpu::Color,
    camera: Camera,
    camera_binding: CameraBinding,
    renderables: Vec<Rc<RefCell<dyn Renderable>>>,
}

impl Renderer {
    pub fn new(wgpu_context: &WgpuContext, background_color: wgpu::Color) -> Self {
        let camera = Camera::new(Self::aspect_ratio(wgpu_context));
        let camera_binding = CameraBinding::new(wgpu_context, &camera);

        Self {
            background_color,
            camera,
            camera_binding,
            renderables: Vec::new(),
        }
    }

    fn aspect_ratio(wgpu_context: &WgpuContext) -> f32 {
        let size = wgpu_context.window_size();
        if size.y > 0.0 { size.x / size.y } else { 1.0 }
    }

    pub fn add_renderable(&mut self, renderable: Rc<RefCell<dyn Renderable>>) {
        self.renderables.push(renderable);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.set_aspect(width as f32 / height as f32);
        }
    }

    /// Uploads the current camera matrices.
    pub fn update_camera(&self, wgpu_context: &WgpuContext) {
        self.camera_binding.write(wgpu_context, &self.camera);
    }

    pub fn render(&self, wgpu_context: &WgpuContext, gpu_profiler: &mut GpuProfiler) -> Result<(), wgpu::SurfaceError> {
        wgpu_context.get_window().request_redraw();

        // We can't render unless the window is configured
        if !wgpu_context.is_surface_configured() {
            return Ok(());
        }

        let output = wgpu_context.get_surface().get_current_texture()?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = wgpu_context.get_device().create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        {
            let mut scope = gpu_profiler.scope("Render pass", &mut encoder);
            let mut render_pass = scope.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[
                    Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        depth_slice: None,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(self.background_color),
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            for renderable in self.renderables.iter() {
                renderable.borrow().draw(&mut render_pass, &self.camera_binding);
            }
        }
        gpu_profiler.resolve_queries(&mut encoder);

        wgpu_context.get_queue().submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn camera_binding(&self) -> &CameraBinding {
        &self.camera_binding
    }
}
