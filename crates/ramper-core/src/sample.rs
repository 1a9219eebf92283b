//! Sample type abstraction for f32/f64 ramping.
//!
//! Lets [`RampedParameter`](crate::RampedParameter) run in single or double
//! precision through monomorphization, with no runtime cost.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

use crate::types::FrameCount;

/// Trait for audio sample types (f32, f64).
///
/// Only the operations a ramp needs in the render loop: the line equation
/// `slope * frames + goal`, conversion of frame counts and f32 commands,
/// and bound checks.
///
/// # Example
///
/// ```
/// use ramper_core::{RampedParameter, Sample};
///
/// fn halfway<S: Sample>(from: S, to: S) -> S {
///     let mut ramp = RampedParameter::new(from);
///     ramp.start_ramp(to, 2);
///     ramp.step();
///     ramp.value()
/// }
///
/// assert_eq!(halfway(0.0f32, 1.0), 0.5);
/// assert_eq!(halfway(0.0f64, 1.0), 0.5);
/// ```
pub trait Sample:
    Copy
    + Default
    + Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + PartialOrd
{
    /// Zero value (0.0).
    const ZERO: Self;

    /// Negative infinity, the default lower clamp bound.
    const NEG_INFINITY: Self;

    /// Positive infinity, the default upper clamp bound.
    const INFINITY: Self;

    /// Convert from f32.
    fn from_f32(value: f32) -> Self;

    /// Convert to f64.
    fn to_f64(self) -> f64;

    /// Convert a sample-frame count.
    fn from_frames(frames: FrameCount) -> Self;

    /// True if the value is NaN.
    fn is_nan(self) -> bool;
}

impl Sample for f32 {
    const ZERO: Self = 0.0;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
    const INFINITY: Self = f32::INFINITY;

    #[inline(always)]
    fn from_f32(value: f32) -> Self {
        value
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline(always)]
    fn from_frames(frames: FrameCount) -> Self {
        frames as f32
    }

    #[inline(always)]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

impl Sample for f64 {
    const ZERO: Self = 0.0;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
    const INFINITY: Self = f64::INFINITY;

    #[inline(always)]
    fn from_f32(value: f32) -> Self {
        value as f64
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline(always)]
    fn from_frames(frames: FrameCount) -> Self {
        frames as f64
    }

    #[inline(always)]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_frames_is_exact_for_block_sizes() {
        assert_eq!(f32::from_frames(512), 512.0);
        assert_eq!(f64::from_frames(u32::MAX), 4_294_967_295.0);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(<f64 as Sample>::from_f32(0.25), 0.25);
        assert_eq!(Sample::to_f64(0.5f32), 0.5);
        assert!(Sample::is_nan(f64::NAN));
        assert!(<f64 as Sample>::NEG_INFINITY < <f64 as Sample>::ZERO);
        assert!(<f32 as Sample>::INFINITY > <f32 as Sample>::ZERO);
    }
}
