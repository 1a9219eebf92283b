//! Error types for ramper.
//!
//! Ramping itself is total: every [`RampedParameter`](crate::RampedParameter)
//! operation succeeds. Errors only come from configuration and from the
//! control-thread side of the cross-thread handoffs.

use std::fmt;

/// Errors from ramp construction, configuration and handoff.
#[derive(Debug, Clone, PartialEq)]
pub enum RampError {
    /// Clamp bounds are NaN or inverted.
    InvalidBounds { low: f64, high: f64 },
    /// A NaN or infinite ramp goal was rejected before reaching the render thread.
    NonFiniteValue(f32),
    /// A [`RampConfig`](crate::RampConfig) field is out of range.
    InvalidConfig(String),
    /// The command queue to the render thread has no free slot.
    QueueFull,
}

impl fmt::Display for RampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { low, high } => {
                write!(f, "Invalid clamp bounds: low {} high {}", low, high)
            }
            Self::NonFiniteValue(value) => write!(f, "Non-finite ramp value: {}", value),
            Self::InvalidConfig(msg) => write!(f, "Invalid ramp configuration: {}", msg),
            Self::QueueFull => write!(f, "Ramp command queue is full"),
        }
    }
}

impl std::error::Error for RampError {}

/// Result type for ramper operations.
pub type RampResult<T> = Result<T, RampError>;
