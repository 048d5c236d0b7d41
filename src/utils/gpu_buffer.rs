use crate::renderer::wgpu_context::WgpuContext;
use wgpu::Buffer;

/// A typed GPU buffer that keeps a CPU-side mirror of its contents.
#[derive(Debug)]
pub struct GpuBuffer<T> {
    data: Vec<T>,
    buffer: wgpu::Buffer,
}

impl<T: bytemuck::Pod> GpuBuffer<T> {
    pub fn new(wgpu_context: &WgpuContext, label: &str, data: Vec<T>, usage: wgpu::BufferUsages) -> Self {
        let usage = usage | wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::COPY_SRC;
        let buffer = wgpu_context.get_device().create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: Self::size_in_bytes(data.len()),
            usage,
            mapped_at_creation: false,
        });
        wgpu_context.get_queue().write_buffer(&buffer, 0, bytemuck::cast_slice(&data));

        Self { data, buffer }
    }

    fn size_in_bytes(len: usize) -> u64 {
        // Zero sized buffers cannot be bound, keep at least one element around.
        (len.max(1) * size_of::<T>().max(1)) as u64
    }

    /// Replaces the contents of the buffer. The new data must fit in the allocation.
    pub fn write(&mut self, wgpu_context: &WgpuContext, data: Vec<T>) {
        debug_assert!(Self::size_in_bytes(data.len()) <= self.buffer.size());
        self.data = data;
        wgpu_context.get_queue().write_buffer(&self.buffer, 0, bytemuck::cast_slice(&self.data));
    }

    /// Downloads data from the GPU buffer to the CPU-side `Vec`.
    /// This method will overwrite the contents of `self.data`.
    ///
    /// # Returns
    ///
    /// `Ok(&Vec<T>)` if the readback was successful.
    /// `Err(wgpu::BufferAsyncError)` if the buffer mapping fails.
    pub fn download(&mut self, wgpu_context: &WgpuContext) -> Result<&Vec<T>, wgpu::BufferAsyncError> {
        let device = wgpu_context.get_device();
        let queue = wgpu_context.get_queue();

        // The CPU-side length is the number of valid elements on the GPU.
        let size = (self.data.len() * size_of::<T>()) as u64;
        if size == 0 {
            return Ok(&self.data);
        }

        let staging_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Staging Buffer (Download)"),
            size,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Download Encoder"),
        });
        encoder.copy_buffer_to_buffer(&self.buffer, 0, &staging_buffer, 0, size);
        queue.submit(Some(encoder.finish()));

        // map_async completes on poll, a channel turns it into a blocking call.
        let buffer_slice = staging_buffer.slice(..);
        let (sender, receiver) = std::sync::mpsc::channel();
        buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = sender.send(result);
        });

        if let Err(e) = device.poll(wgpu::PollType::Wait) {
            log::error!("Device poll failed while downloading a buffer: {e}");
        }

        match receiver.recv() {
            Ok(Ok(())) => {
                {
                    let mapped_range = buffer_slice.get_mapped_range();
                    let downloaded_data: &[T] = bytemuck::cast_slice(&mapped_range);
                    self.data.clear();
                    self.data.extend_from_slice(downloaded_data);
                }
                staging_buffer.unmap();
                Ok(&self.data)
            }
            Ok(Err(e)) => Err(e),
            Err(_) => Err(wgpu::BufferAsyncError),
        }
    }

    pub fn data(&self) -> &Vec<T> {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }
}
