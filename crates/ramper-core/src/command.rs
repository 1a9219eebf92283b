//! Ramp commands and render events.
//!
//! A [`RampCommand`] is a request to change one addressed parameter, either
//! a snap ([`RampKind::Set`]) or a linear ramp ([`RampKind::Ramp`]). A
//! [`RampEvent`] schedules a command at a sample offset inside a render
//! buffer, the way host automation arrives.
//!
//! Values are `f32` on the wire regardless of the ramper's sample type,
//! since host and UI parameter values are single precision.

use crate::ramper::RampedParameter;
use crate::sample::Sample;
use crate::types::{FrameCount, ParamAddress};

/// What to do to a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RampKind {
    /// Snap to the value.
    Set(f32),
    /// Ramp from the current value to `goal` over `duration` samples.
    Ramp { goal: f32, duration: FrameCount },
}

impl RampKind {
    /// Build a ramp, folding a zero duration into [`RampKind::Set`].
    pub fn ramp(goal: f32, duration: FrameCount) -> Self {
        if duration == 0 {
            Self::Set(goal)
        } else {
            Self::Ramp { goal, duration }
        }
    }

    /// The value the parameter ends up at.
    pub fn goal(&self) -> f32 {
        match *self {
            Self::Set(value) => value,
            Self::Ramp { goal, .. } => goal,
        }
    }

    /// Ramp length in samples, 0 for a snap.
    pub fn duration(&self) -> FrameCount {
        match *self {
            Self::Set(_) => 0,
            Self::Ramp { duration, .. } => duration,
        }
    }

    /// Apply to a ramper.
    #[inline]
    pub fn apply_to<S: Sample>(&self, ramper: &mut RampedParameter<S>) {
        match *self {
            Self::Set(value) => ramper.set(S::from_f32(value)),
            Self::Ramp { goal, duration } => ramper.start_ramp(S::from_f32(goal), duration),
        }
    }
}

/// A [`RampKind`] addressed to one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampCommand {
    /// Target parameter.
    pub address: ParamAddress,
    pub kind: RampKind,
}

impl RampCommand {
    /// Snap `address` to `value`.
    pub fn set(address: ParamAddress, value: f32) -> Self {
        Self {
            address,
            kind: RampKind::Set(value),
        }
    }

    /// Ramp `address` to `goal` over `duration` samples.
    pub fn ramp(address: ParamAddress, goal: f32, duration: FrameCount) -> Self {
        Self {
            address,
            kind: RampKind::ramp(goal, duration),
        }
    }
}

/// A command scheduled at a sample offset within a render buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampEvent {
    /// Offset from the first frame of the buffer.
    pub sample_offset: FrameCount,
    pub command: RampCommand,
}

impl RampEvent {
    /// Schedule `command` at `sample_offset`.
    pub fn new(sample_offset: FrameCount, command: RampCommand) -> Self {
        Self {
            sample_offset,
            command,
        }
    }
}
