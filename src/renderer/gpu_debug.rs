//! Reporting of GPU errors raised outside of an error scope.
//!
//! Every error is logged and then stops the program: the renderer has no
//! recovery path for a broken pipeline or an exhausted device.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GpuDebugSeverity {
    Medium,
    High,
}

impl GpuDebugSeverity {
    pub fn from_error(error: &wgpu::Error) -> Self {
        match error {
            wgpu::Error::OutOfMemory { .. } => GpuDebugSeverity::High,
            wgpu::Error::Validation { .. } => GpuDebugSeverity::High,
            wgpu::Error::Internal { .. } => GpuDebugSeverity::Medium,
        }
    }
}

impl fmt::Display for GpuDebugSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GpuDebugSeverity::Medium => "medium",
            GpuDebugSeverity::High => "high",
        };
        f.write_str(name)
    }
}

/// Installs the handler for errors no error scope captured.
pub fn install_error_handler(device: &wgpu::Device) {
    device.on_uncaptured_error(Box::new(|error: wgpu::Error| {
        let severity = GpuDebugSeverity::from_error(&error);
        log::error!("GPU error ({severity}): {error}");
        panic!("GPU error ({severity}): {error}");
    }));
}
