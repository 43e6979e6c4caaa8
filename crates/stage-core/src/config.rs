//! Tracking configuration. Defaults come from [`crate::constants`]; front-ends
//! may override any subset (missing fields keep their default).

use crate::constants::*;
use crate::error::StageError;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    pub idle_rate: f32,
    pub follow_rate_first: f32,
    pub follow_rate_quotient: f32,
    pub rate_smoothing: f32,
    pub follow_scale: f32,
    pub follow_in_delay_per_key_ms: f32,
    pub follow_in_duration_ms: f32,
    pub follow_out_delay_per_key_ms: f32,
    pub follow_out_duration_ms: f32,
    pub enter_duration_ms: f32,
    pub enter_tilt_factor: f32,
    pub default_opacity: f32,
    pub exclusion_width_fraction: f32,
    pub exclusion_height_fraction: f32,
    pub scatter_max_attempts: u32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            idle_rate: IDLE_LERP_RATE,
            follow_rate_first: FOLLOW_LERP_FIRST,
            follow_rate_quotient: FOLLOW_LERP_QUOTIENT,
            rate_smoothing: RATE_SMOOTHING,
            follow_scale: FOLLOW_SCALE_FACTOR,
            follow_in_delay_per_key_ms: FOLLOW_IN_DELAY_PER_KEY_MS,
            follow_in_duration_ms: FOLLOW_IN_DURATION_MS,
            follow_out_delay_per_key_ms: FOLLOW_OUT_DELAY_PER_KEY_MS,
            follow_out_duration_ms: FOLLOW_OUT_DURATION_MS,
            enter_duration_ms: ENTER_DURATION_MS,
            enter_tilt_factor: ENTER_TILT_FACTOR,
            default_opacity: DEFAULT_OPACITY,
            exclusion_width_fraction: EXCLUSION_WIDTH_FRACTION,
            exclusion_height_fraction: EXCLUSION_HEIGHT_FRACTION,
            scatter_max_attempts: SCATTER_MAX_ATTEMPTS,
        }
    }
}

// comparisons are written so NaN fails every check

#[inline]
fn unit_rate(v: f32) -> bool {
    v > 0.0 && v <= 1.0
}

#[inline]
fn open_fraction(v: f32) -> bool {
    v > 0.0 && v < 1.0
}

#[inline]
fn finite_non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}

impl TrackingConfig {
    pub fn validate(&self) -> Result<(), StageError> {
        if !unit_rate(self.idle_rate) || !unit_rate(self.follow_rate_first) {
            return Err(StageError::InvalidConfig("smoothing rates must be in (0, 1]"));
        }
        if !unit_rate(self.rate_smoothing) {
            return Err(StageError::InvalidConfig("rate_smoothing must be in (0, 1]"));
        }
        if !unit_rate(self.follow_rate_quotient) {
            return Err(StageError::InvalidConfig(
                "follow_rate_quotient must be in (0, 1]",
            ));
        }
        if !(self.follow_scale.is_finite() && self.follow_scale > 0.0) {
            return Err(StageError::InvalidConfig(
                "follow_scale must be positive and finite",
            ));
        }
        let timings = [
            self.follow_in_delay_per_key_ms,
            self.follow_in_duration_ms,
            self.follow_out_delay_per_key_ms,
            self.follow_out_duration_ms,
            self.enter_duration_ms,
        ];
        if !timings.into_iter().all(finite_non_negative) {
            return Err(StageError::InvalidConfig(
                "delays and durations must be finite and non-negative",
            ));
        }
        if !self.enter_tilt_factor.is_finite() || !self.default_opacity.is_finite() {
            return Err(StageError::InvalidConfig(
                "enter_tilt_factor and default_opacity must be finite",
            ));
        }
        if !open_fraction(self.exclusion_width_fraction)
            || !open_fraction(self.exclusion_height_fraction)
        {
            return Err(StageError::InvalidConfig(
                "exclusion zone fractions must be in (0, 1)",
            ));
        }
        if self.scatter_max_attempts == 0 {
            return Err(StageError::InvalidConfig(
                "scatter_max_attempts must be at least 1",
            ));
        }
        Ok(())
    }

    /// Follow-mode smoothing rate for the item at ordinal `key`.
    pub fn follow_rate(&self, key: u32) -> f32 {
        crate::pointer::staggered_rate(self.follow_rate_first, self.follow_rate_quotient, key)
    }
}
