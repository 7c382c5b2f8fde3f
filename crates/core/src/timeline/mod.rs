/// Turns host frame timestamps into elapsed seconds.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    last_timestamp_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous timestamp. The first frame, a timestamp
    /// that goes backwards, or a non-finite one all count as zero.
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        if !timestamp_ms.is_finite() {
            return 0.0;
        }
        let previous = self.last_timestamp_ms.replace(timestamp_ms);
        match previous {
            Some(last) if timestamp_ms > last => ((timestamp_ms - last) / 1000.0) as f32,
            _ => 0.0,
        }
    }
}
