//! Animation-frame timestamps to per-frame deltas

use crate::consts::MAX_FRAME_DELTA_MS;

/// Turns successive `requestAnimationFrame` timestamps into frame deltas
///
/// The first frame has no predecessor and yields 0. Negative, non-finite and
/// oversized deltas (clock jumps, a tab returning from the background) also
/// yield 0 so they cannot feed the spawn timer or the score.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_timestamp: Option<f64>,
    max_delta_ms: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DELTA_MS)
    }
}

impl FrameClock {
    pub fn new(max_delta_ms: f64) -> Self {
        Self {
            last_timestamp: None,
            max_delta_ms,
        }
    }

    /// Record a frame timestamp (ms) and return the sanitized delta
    pub fn delta(&mut self, timestamp_ms: f64) -> f64 {
        if !timestamp_ms.is_finite() {
            log::debug!("Ignoring non-finite frame timestamp {}", timestamp_ms);
            return 0.0;
        }

        let Some(previous) = self.last_timestamp.replace(timestamp_ms) else {
            return 0.0;
        };

        let delta = timestamp_ms - previous;
        if delta < 0.0 || delta > self.max_delta_ms {
            log::debug!("Clamping anomalous frame delta {:.1}ms to 0", delta);
            return 0.0;
        }
        delta
    }
}
