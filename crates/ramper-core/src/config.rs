//! Shared ramp configuration.
//!
//! Hosts hand ramp durations in sample frames, but control surfaces think in
//! milliseconds. [`RampConfig`] carries the sample rate needed to convert
//! between the two, the default glide time, and the capacity of the
//! control-to-render command queue.
//!
//! # Example
//!
//! ```
//! use ramper_core::RampConfig;
//!
//! pub static CONFIG: RampConfig = RampConfig::new()
//!     .with_sample_rate(44_100.0)
//!     .with_default_ramp_ms(20.0)
//!     .with_queue_capacity(64);
//!
//! assert_eq!(CONFIG.default_ramp_frames(), 882);
//! ```

use crate::error::{RampError, RampResult};
use crate::types::FrameCount;

/// Sample rate assumed until the host reports one.
pub const DEFAULT_SAMPLE_RATE: f64 = 48_000.0;

/// Glide time used by [`RampSender::glide`](crate::RampSender::glide).
pub const DEFAULT_RAMP_MS: f64 = 10.0;

/// Number of commands the render thread can fall behind by.
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Ramp timing and handoff configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampConfig {
    /// Sample rate in Hz.
    pub sample_rate: f64,

    /// Default ramp time in milliseconds.
    pub default_ramp_ms: f64,

    /// Capacity of the [`RampQueue`](crate::RampQueue).
    pub queue_capacity: usize,
}

impl RampConfig {
    /// Create a configuration with default values.
    pub const fn new() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            default_ramp_ms: DEFAULT_RAMP_MS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    /// Set the sample rate.
    pub const fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the default ramp time.
    pub const fn with_default_ramp_ms(mut self, ms: f64) -> Self {
        self.default_ramp_ms = ms;
        self
    }

    /// Set the command queue capacity.
    pub const fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Convert milliseconds to a frame count at the configured sample rate.
    ///
    /// Rounds to the nearest frame and saturates at `FrameCount::MAX`.
    /// Negative and NaN times give 0, which means an instant snap.
    pub fn ms_to_frames(&self, ms: f64) -> FrameCount {
        let frames = (ms * self.sample_rate / 1000.0).round();
        if frames.is_nan() || frames <= 0.0 {
            0
        } else if frames >= FrameCount::MAX as f64 {
            FrameCount::MAX
        } else {
            frames as FrameCount
        }
    }

    /// The default ramp time in frames.
    pub fn default_ramp_frames(&self) -> FrameCount {
        self.ms_to_frames(self.default_ramp_ms)
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> RampResult<()> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(invalid(format!(
                "sample rate must be positive and finite, got {}",
                self.sample_rate
            )));
        }
        if !(self.default_ramp_ms.is_finite() && self.default_ramp_ms >= 0.0) {
            return Err(invalid(format!(
                "default ramp time must be non-negative and finite, got {} ms",
                self.default_ramp_ms
            )));
        }
        if self.queue_capacity == 0 {
            return Err(invalid("queue capacity must be non-zero".to_string()));
        }
        Ok(())
    }
}

impl Default for RampConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(msg: String) -> RampError {
    log::debug!("Rejected ramp configuration: {}", msg);
    RampError::InvalidConfig(msg)
}
