use std::time::{Duration, Instant};

const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(1);

pub struct RenderTimer {
    last_render_time: Instant,
    frames_since_report: u32,
    last_report_time: Instant,
}

impl RenderTimer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_render_time: now,
            frames_since_report: 0,
            last_report_time: now,
        }
    }

    /// Time elapsed since the previous call. Logs the frame rate once per second.
    pub fn get_delta(&mut self) -> Duration {
        let now = Instant::now();
        let delta_time = now - self.last_render_time;
        self.last_render_time = now;

        self.frames_since_report += 1;
        let since_report = now - self.last_report_time;
        if since_report >= FPS_REPORT_INTERVAL {
            let fps = self.frames_since_report as f32 / since_report.as_secs_f32();
            log::debug!("{:.1} fps ({:.2} ms/frame)", fps, 1000.0 / fps);
            self.frames_since_report = 0;
            self.last_report_time = now;
        }

        delta_time
    }
}

impl Default for RenderTimer {
    fn default() -> Self {
        Self::new()
    }
}
