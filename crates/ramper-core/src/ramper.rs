//! Sample-accurate linear parameter ramping.
//!
//! [`RampedParameter`] moves a control value to a new goal over an exact
//! number of samples, so a parameter change in the middle of a buffer does
//! not produce a click.
//!
//! # Usage
//!
//! ```
//! use ramper_core::RampedParameter;
//!
//! let mut cutoff = RampedParameter::new(0.0f32);
//! cutoff.start_ramp(10.0, 5);
//!
//! let mut out = [0.0f32; 6];
//! for sample in out.iter_mut() {
//!     *sample = cutoff.get_step();
//! }
//! assert_eq!(out, [0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
//! ```
//!
//! # Precision
//!
//! The value is never accumulated. It is recomputed from the line equation
//! `inverse_slope * samples_remaining + goal`, so a ramp of any length lands
//! on its goal exactly when `samples_remaining` reaches zero.
//!
//! # Thread Safety
//!
//! All mutation goes through `&mut self`. The ramper belongs to the render
//! thread; other threads hand it requests through
//! [`RampCell`](crate::RampCell) or [`RampQueue`](crate::RampQueue).

use crate::error::{RampError, RampResult};
use crate::sample::Sample;
use crate::types::FrameCount;

/// A parameter value that ramps linearly to its goal, one sample at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct RampedParameter<S: Sample = f32> {
    clamp_low: S,
    clamp_high: S,

    goal: S,
    // Per-sample distance from goal, signed. Zero while at rest.
    inverse_slope: S,
    samples_remaining: FrameCount,
}

impl<S: Sample> RampedParameter<S> {
    /// Create a ramper at rest on `value`, with unbounded clamp range.
    pub fn new(value: S) -> Self {
        Self {
            clamp_low: S::NEG_INFINITY,
            clamp_high: S::INFINITY,
            goal: value,
            inverse_slope: S::ZERO,
            samples_remaining: 0,
        }
    }

    /// Create a ramper at rest on `value` with declared clamp bounds.
    ///
    /// The bounds are recorded for the owner to consult; the ramper never
    /// clips its goal or output against them.
    ///
    /// Fails with [`RampError::InvalidBounds`] if either bound is NaN or
    /// `low > high`.
    pub fn with_bounds(value: S, low: S, high: S) -> RampResult<Self> {
        if low.is_nan() || high.is_nan() || low > high {
            return Err(RampError::InvalidBounds {
                low: low.to_f64(),
                high: high.to_f64(),
            });
        }
        Ok(Self {
            clamp_low: low,
            clamp_high: high,
            ..Self::new(value)
        })
    }

    /// Snap to `value` immediately, cancelling any ramp in progress.
    #[inline]
    pub fn set(&mut self, value: S) {
        self.goal = value;
        self.inverse_slope = S::ZERO;
        self.samples_remaining = 0;
    }

    /// Ramp from the current value to `new_goal` over `duration` samples.
    ///
    /// A zero duration is the same as [`set()`](Self::set). Calling this
    /// mid-ramp restarts from wherever the old ramp had got to, so the
    /// output stays continuous.
    #[inline]
    pub fn start_ramp(&mut self, new_goal: S, duration: FrameCount) {
        if duration == 0 {
            self.set(new_goal);
            return;
        }
        // The slope must be taken from the old goal before it is replaced.
        self.inverse_slope = (self.value() - new_goal) / S::from_frames(duration);
        self.samples_remaining = duration;
        self.goal = new_goal;
    }

    /// Current value, without advancing.
    #[inline]
    pub fn value(&self) -> S {
        self.inverse_slope * S::from_frames(self.samples_remaining) + self.goal
    }

    /// The value the ramp ends on (or is already resting at).
    #[inline]
    pub fn goal(&self) -> S {
        self.goal
    }

    /// Advance by one sample.
    ///
    /// Call once per sample, after reading [`value()`](Self::value) for it.
    #[inline]
    pub fn step(&mut self) {
        if self.samples_remaining != 0 {
            self.samples_remaining -= 1;
        }
    }

    /// Read the current value, then advance by one sample.
    ///
    /// At rest this returns the goal without evaluating the line equation.
    #[inline]
    pub fn get_step(&mut self) -> S {
        if self.samples_remaining != 0 {
            let value = self.value();
            self.samples_remaining -= 1;
            value
        } else {
            self.goal
        }
    }

    /// Advance by `n` samples at once.
    ///
    /// For parameters that are not read inside the per-sample loop: call
    /// this once after the loop with the buffer length.
    #[inline]
    pub fn step_by(&mut self, n: FrameCount) {
        self.samples_remaining = self.samples_remaining.saturating_sub(n);
    }

    /// Fill a slice with consecutive values, advancing one sample per slot.
    pub fn fill(&mut self, buffer: &mut [S]) {
        for sample in buffer.iter_mut() {
            *sample = self.get_step();
        }
    }

    /// Returns true while a ramp is in progress.
    #[inline]
    pub fn is_ramping(&self) -> bool {
        self.samples_remaining != 0
    }

    /// Samples left until the goal is reached.
    #[inline]
    pub fn samples_remaining(&self) -> FrameCount {
        self.samples_remaining
    }

    /// Declared lower bound.
    pub fn clamp_low(&self) -> S {
        self.clamp_low
    }

    /// Declared upper bound.
    pub fn clamp_high(&self) -> S {
        self.clamp_high
    }

    /// Whether `value` lies inside the declared bounds (inclusive).
    pub fn is_within_bounds(&self, value: S) -> bool {
        self.clamp_low <= value && value <= self.clamp_high
    }
}

impl<S: Sample> Default for RampedParameter<S> {
    fn default() -> Self {
        Self::new(S::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn ramping_from(start: f32, goal: f32, duration: FrameCount) -> RampedParameter {
        let mut r = RampedParameter::new(start);
        r.start_ramp(goal, duration);
        r
    }

    #[test]
    fn test_new_is_at_rest() {
        let r = RampedParameter::new(0.75f32);
        assert_eq!(r.value(), 0.75);
        assert_eq!(r.goal(), 0.75);
        assert!(!r.is_ramping());
        assert_eq!(r.clamp_low(), f32::NEG_INFINITY);
        assert_eq!(r.clamp_high(), f32::INFINITY);
    }

    #[test]
    fn test_set_snaps_and_step_is_noop() {
        for v in [-3.5f32, 0.0, 1.0, 1e6] {
            let mut r = ramping_from(0.0, 100.0, 64);
            r.step();
            r.set(v);
            assert_eq!(r.value(), v);
            assert_eq!(r.goal(), v);
            r.step();
            assert_eq!(r.value(), v);
            assert_eq!(r.goal(), v);
        }
    }

    #[test]
    fn test_sequence_zero_to_ten_over_five() {
        let mut r = ramping_from(0.0, 10.0, 5);
        let values: Vec<f32> = (0..6).map(|_| r.get_step()).collect();
        assert_eq!(values, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert!(!r.is_ramping());
    }

    #[test]
    fn test_ramp_reaches_goal_after_duration_steps() {
        for &(v0, v1, d) in &[
            (0.0f32, 1.0f32, 1u32),
            (1.0, -1.0, 7),
            (440.0, 880.0, 480),
            (5.0, 5.0, 3),
        ] {
            let mut r = ramping_from(v0, v1, d);
            for _ in 0..d {
                r.step();
            }
            assert!((r.value() - v1).abs() < EPS);
            r.step();
            r.step();
            assert!((r.value() - v1).abs() < EPS);
            assert_eq!(r.samples_remaining(), 0);
        }
    }

    #[test]
    fn test_long_ramp_lands_exactly_on_goal() {
        // An accumulating smoother drifts over this many additions.
        let mut r = ramping_from(0.1, 0.7, 1_000_000);
        let mut last = 0.0;
        for _ in 0..1_000_000 {
            last = r.get_step();
        }
        assert!(last < 0.7 + EPS);
        assert_eq!(r.value(), 0.7);
        assert_eq!(r.get_step(), 0.7);
    }

    #[test]
    fn test_start_ramp_is_continuous() {
        let mut r = RampedParameter::new(3.0f32);
        let before = r.value();
        r.start_ramp(-9.0, 17);
        assert!((r.value() - before).abs() < EPS);
    }

    #[test]
    fn test_restart_mid_ramp_is_continuous() {
        let mut r = ramping_from(0.0, 10.0, 10);
        for _ in 0..4 {
            r.step();
        }
        let before = r.value();
        assert!((before - 4.0).abs() < EPS);

        r.start_ramp(0.0, 8);
        assert!((r.value() - before).abs() < EPS);
        assert_eq!(r.goal(), 0.0);
        assert_eq!(r.samples_remaining(), 8);

        r.step_by(8);
        assert_eq!(r.value(), 0.0);
    }

    #[test]
    fn test_zero_duration_equals_set() {
        let mut a = ramping_from(2.0, 8.0, 10);
        let mut b = a.clone();
        a.step();
        b.step();
        a.start_ramp(-1.0, 0);
        b.set(-1.0);
        assert_eq!(a, b);
        assert_eq!(a.value(), -1.0);
    }

    #[test]
    fn test_step_by_saturates() {
        let mut r = ramping_from(0.0, 1.0, 10);
        r.step_by(3);
        assert_eq!(r.samples_remaining(), 7);
        r.step_by(7);
        assert_eq!(r.samples_remaining(), 0);

        let mut r = ramping_from(0.0, 1.0, 10);
        r.step_by(u32::MAX);
        assert_eq!(r.samples_remaining(), 0);
        assert_eq!(r.value(), 1.0);
    }

    #[test]
    fn test_get_step_matches_value_then_step() {
        let mut a = ramping_from(-2.0, 6.0, 9);
        let mut b = a.clone();
        for _ in 0..12 {
            let expected = b.value();
            b.step();
            assert_eq!(a.get_step(), expected);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_value_is_pure() {
        let r = ramping_from(0.0, 1.0, 4);
        let first = r.value();
        assert_eq!(r.value(), first);
        assert_eq!(r.samples_remaining(), 4);
    }

    #[test]
    fn test_fill() {
        let mut r = ramping_from(1.0, 0.0, 4);
        let mut buffer = [9.0f32; 6];
        r.fill(&mut buffer);
        assert_eq!(buffer, [1.0, 0.75, 0.5, 0.25, 0.0, 0.0]);
    }

    #[test]
    fn test_with_bounds() {
        let r = RampedParameter::with_bounds(0.5f32, 0.0, 1.0).unwrap();
        assert_eq!(r.clamp_low(), 0.0);
        assert_eq!(r.clamp_high(), 1.0);
        assert!(r.is_within_bounds(1.0));
        assert!(!r.is_within_bounds(1.5));

        assert_eq!(
            RampedParameter::with_bounds(0.5f32, 1.0, 0.0),
            Err(RampError::InvalidBounds { low: 1.0, high: 0.0 })
        );
        assert!(RampedParameter::with_bounds(0.5f32, f32::NAN, 1.0).is_err());
    }

    #[test]
    fn test_bounds_are_not_enforced() {
        let mut r = RampedParameter::with_bounds(0.5f32, 0.0, 1.0).unwrap();
        r.start_ramp(4.0, 2);
        r.step_by(2);
        assert_eq!(r.value(), 4.0);
        assert!(!r.is_within_bounds(r.value()));
    }

    #[test]
    fn test_f64_ramp() {
        let mut r = RampedParameter::new(0.0f64);
        r.start_ramp(1.0, 4);
        assert_eq!(r.get_step(), 0.0);
        assert_eq!(r.get_step(), 0.25);
        r.step_by(2);
        assert_eq!(r.get_step(), 1.0);
    }

    #[test]
    fn test_default_rests_on_zero() {
        let r: RampedParameter = RampedParameter::default();
        assert_eq!(r.value(), 0.0);
        assert!(!r.is_ramping());
    }
}
