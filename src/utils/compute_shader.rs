use wgpu::{BindGroup, CommandEncoder};
use crate::renderer::wgpu_context::WgpuContext;

pub struct ComputeShader {
    pipeline: wgpu::ComputePipeline,
    workgroup_size: (u32, u32, u32),
}

impl ComputeShader {
    pub fn new(
        wgpu_context: &WgpuContext,
        shader_file: wgpu::ShaderModuleDescriptor,
        entry_point: &str,
        bind_group_layouts: &[&wgpu::BindGroupLayout],
        workgroup_size: (u32, u32, u32),
    ) -> Self {
        let device = wgpu_context.get_device();
        let compute_shader = device.create_shader_module(shader_file);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("Compute Pipeline Layout for {}", entry_point)),
            bind_group_layouts,
            push_constant_ranges: &[],
        });

        let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some(&format!("Compute Pipeline for {}", entry_point)),
            layout: Some(&pipeline_layout),
            module: &compute_shader,
            entry_point: Some(entry_point),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            cache: None,
        });

        Self {
            pipeline,
            workgroup_size,
        }
    }

    /// Dispatches the compute shader. Bind groups are set in slice order.
    pub fn dispatch(
        &self,
        encoder: &mut CommandEncoder,
        dispatch_size: (u32, u32, u32),
        bind_groups: &[&BindGroup],
    ) {
        let mut compute_pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
            label: None,
            timestamp_writes: None,
        });

        compute_pass.set_pipeline(&self.pipeline);
        for (index, bind_group) in bind_groups.iter().enumerate() {
            compute_pass.set_bind_group(index as u32, *bind_group, &[]);
        }
        compute_pass.dispatch_workgroups(dispatch_size.0, dispatch_size.1, dispatch_size.2);
    }

    /// Dispatches enough workgroups to cover `item_count` items.
    pub fn dispatch_by_items(
        &self,
        encoder: &mut CommandEncoder,
        item_count: (u32, u32, u32),
        bind_groups: &[&BindGroup],
    ) {
        self.dispatch(
            encoder,
            workgroups_for_items(item_count, self.workgroup_size),
            bind_groups,
        );
    }
}

/// Number of workgroups needed per axis so that every item gets an invocation.
pub fn workgroups_for_items(item_count: (u32, u32, u32), workgroup_size: (u32, u32, u32)) -> (u32, u32, u32) {
    (
        item_count.0.div_ceil(workgroup_size.0),
        item_count.1.div_ceil(workgroup_size.1),
        item_count.2.div_ceil(workgroup_size.2),
    )
}
