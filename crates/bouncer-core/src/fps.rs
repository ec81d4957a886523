/// Frame-rate readout sampled once per second.
#[derive(Debug, Clone)]
pub struct FpsMeter {
    frames: u32,
    last_sample_ms: f64,
    fps: u32,
}

impl FpsMeter {
    /// Nominal rate shown before the first sample.
    pub const INITIAL_FPS: u32 = 60;

    pub fn new(now_ms: f64) -> Self {
        Self {
            frames: 0,
            last_sample_ms: now_ms,
            fps: Self::INITIAL_FPS,
        }
    }

    /// Count one animated frame.
    pub fn record_frame(&mut self) {
        self.frames = self.frames.saturating_add(1);
    }

    /// Compute the rate since the previous sample and start a new window.
    pub fn sample(&mut self, now_ms: f64) -> u32 {
        let elapsed = now_ms - self.last_sample_ms;
        if elapsed > 0.0 {
            self.fps = (f64::from(self.frames) * 1000.0 / elapsed).round() as u32;
        }
        self.frames = 0;
        self.last_sample_ms = now_ms;
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
