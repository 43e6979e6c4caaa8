//! Time-bounded interpolation of a handful of scalar channels.

use crate::easing::Easing;
use smallvec::SmallVec;

/// Channel values of one tween. Four inline slots cover every animated
/// property (opacity, scale x/y, enter x/y/progress).
pub type Channels = SmallVec<[f32; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenPhase {
    /// Still inside the start delay; values are not applied yet.
    Delayed,
    Running,
    Completed,
}

#[derive(Clone, Debug)]
pub struct Tween {
    from: Channels,
    to: Channels,
    duration_ms: f32,
    delay_ms: f32,
    easing: Easing,
    elapsed_ms: f32,
}

impl Tween {
    pub fn new(from: &[f32], to: &[f32], duration_ms: f32) -> Self {
        debug_assert_eq!(from.len(), to.len(), "tween channel count mismatch");
        Self {
            from: SmallVec::from_slice(from),
            to: SmallVec::from_slice(to),
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::Linear,
            elapsed_ms: 0.0,
        }
    }

    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn advance(&mut self, dt_ms: f32) {
        self.elapsed_ms += dt_ms;
    }

    pub fn phase(&self) -> TweenPhase {
        if self.elapsed_ms < self.delay_ms {
            TweenPhase::Delayed
        } else if self.elapsed_ms >= self.delay_ms + self.duration_ms {
            TweenPhase::Completed
        } else {
            TweenPhase::Running
        }
    }

    /// Linear progress in [0, 1], before easing.
    pub fn progress(&self) -> f32 {
        let active = self.elapsed_ms - self.delay_ms;
        if self.duration_ms <= 0.0 {
            return if active >= 0.0 { 1.0 } else { 0.0 };
        }
        if active <= 0.0 {
            return 0.0;
        }
        (active / self.duration_ms).min(1.0)
    }

    pub fn values(&self) -> Channels {
        if self.progress() >= 1.0 {
            return self.to.clone();
        }
        let t = self.easing.apply(self.progress());
        self.from
            .iter()
            .zip(self.to.iter())
            .map(|(a, b)| a + (b - a) * t)
            .collect()
    }
}
