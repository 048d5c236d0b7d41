use wgpu::{BindGroup, BindGroupLayout};

/// A bind group together with the layout it was created from.
pub struct BindResources {
    pub bind_group: BindGroup,
    pub bind_group_layout: BindGroupLayout,
}

impl BindResources {
    pub fn new(bind_group_layout: BindGroupLayout, bind_group: BindGroup) -> Self {
        Self {
            bind_group,
            bind_group_layout,
        }
    }

    /// Layout entry for a buffer binding, the shape every pass in this crate uses.
    pub fn buffer_layout_entry(
        binding: u32,
        visibility: wgpu::ShaderStages,
        ty: wgpu::BufferBindingType,
    ) -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }
    }
}
