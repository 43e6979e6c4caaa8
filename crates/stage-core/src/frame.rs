use crate::constants::{FRAME_DT_MAX_MS, FRAME_DT_MIN_MS, REFERENCE_FRAME_MS};
use instant::Instant;

/// Per-frame timing handed to every tracked item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInfo {
    pub delta_ms: f32,
    pub elapsed_ms: f32,
    /// `delta_ms` relative to a 60 Hz frame; scales every smoothing rate.
    pub slow_down_factor: f32,
    pub frame_index: u64,
}

impl FrameInfo {
    pub fn from_delta(delta_ms: f32) -> Self {
        Self {
            delta_ms,
            elapsed_ms: delta_ms,
            slow_down_factor: delta_ms / REFERENCE_FRAME_MS,
            frame_index: 0,
        }
    }
}

/// Frame clock producing [`FrameInfo`] snapshots.
///
/// Delta time is clamped so a backgrounded tab does not resume with one
/// enormous step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    frame_index: u64,
    elapsed_ms: f32,
    dt_min_ms: f32,
    dt_max_ms: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(FRAME_DT_MIN_MS, FRAME_DT_MAX_MS)
    }

    pub fn with_clamps(dt_min_ms: f32, dt_max_ms: f32) -> Self {
        debug_assert!(dt_min_ms <= dt_max_ms);
        Self {
            last: None,
            frame_index: 0,
            elapsed_ms: 0.0,
            dt_min_ms,
            dt_max_ms,
        }
    }

    /// Forget the previous tick, e.g. after the page was hidden.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn tick(&mut self) -> FrameInfo {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> FrameInfo {
        let delta_ms = match self.last {
            // first frame counts as one reference frame
            None => REFERENCE_FRAME_MS,
            Some(last) if now > last => {
                let ms = now.duration_since(last).as_secs_f32() * 1000.0;
                ms.clamp(self.dt_min_ms, self.dt_max_ms)
            }
            Some(_) => self.dt_min_ms,
        };
        self.last = Some(now);
        self.elapsed_ms += delta_ms;

        let info = FrameInfo {
            delta_ms,
            elapsed_ms: self.elapsed_ms,
            slow_down_factor: delta_ms / REFERENCE_FRAME_MS,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        info
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
