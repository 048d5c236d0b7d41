use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::renderer::wgpu_context::WgpuContext;

pub const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 300.0, -1500.0);
pub const FOV_Y_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 0.5;
pub const Z_FAR: f32 = 10_000.0;

/// Free-flying camera that always looks at the origin, with yaw and pitch
/// applied on top of the look-at frame.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    /// Degrees.
    pub yaw: f32,
    /// Degrees.
    pub pitch: f32,
    view: Mat4,
    projection: Mat4,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        let mut camera = Self {
            position: INITIAL_POSITION,
            yaw: 0.0,
            pitch: 0.0,
            view: Mat4::IDENTITY,
            projection: Self::build_projection(aspect),
        };
        camera.update();
        camera
    }

    /// Recomputes the view matrix from position, yaw and pitch.
    pub fn update(&mut self) {
        self.view = Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
            * Mat4::from_rotation_x(self.pitch.to_radians())
            * Mat4::from_rotation_y(self.yaw.to_radians());
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.projection = Self::build_projection(aspect);
    }

    fn build_projection(aspect: f32) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect.max(1e-6), Z_NEAR, Z_FAR)
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            projection: camera.projection_matrix().to_cols_array_2d(),
        }
    }
}

/// GPU side of the camera: the uniform buffer and its bind group.
pub struct CameraBinding {
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    camera_bind_group_layout: wgpu::BindGroupLayout,
}

impl CameraBinding {
    pub fn new(wgpu_context: &WgpuContext, camera: &Camera) -> Self {
        let device = wgpu_context.get_device();

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[CameraUniform::from_camera(camera)]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }
            ],
            label: Some("Camera Bind Group Layout"),
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &camera_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                }
            ],
            label: Some("Camera Bind Group"),
        });

        Self {
            camera_buffer,
            camera_bind_group,
            camera_bind_group_layout,
        }
    }

    /// Uploads the camera matrices.
    pub fn write(&self, wgpu_context: &WgpuContext, camera: &Camera) {
        wgpu_context.get_queue().write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[CameraUniform::from_camera(camera)]),
        );
    }

    pub fn binding_group(&self) -> &wgpu::BindGroup {
        &self.camera_bind_group
    }

    pub fn camera_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.camera_bind_group_layout
    }
}
