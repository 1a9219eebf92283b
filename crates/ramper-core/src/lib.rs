//! # ramper-core
//!
//! Sample-accurate linear parameter ramping for real-time audio.
//!
//! A hard jump in a gain or cutoff value halfway through a buffer is
//! audible as a click. This crate moves the value to its new goal over an
//! exact number of samples instead, without allocating, locking, or
//! drifting off the goal on long ramps.
//!
//! ## Main Types
//!
//! - [`RampedParameter`] - one ramped value, owned by the render thread
//! - [`RampedParameters`] - address-based access to a set of rampers
//! - [`RampCell`] - lock-free latest-wins handoff for one parameter
//! - [`RampQueue`] - lock-free FIFO of [`RampCommand`]s, drained per buffer
//! - [`render_with_events`] - splits a buffer at [`RampEvent`] offsets
//! - [`RampConfig`] - sample rate, default ramp time, queue capacity
//! - [`RampError`] - configuration and handoff errors
//!
//! ## Threading
//!
//! Rampers are plain `&mut self` state. The control thread never touches
//! one directly: it publishes to a [`RampCell`] or sends through a
//! [`RampSender`], and the render thread applies the request between
//! samples. No ramp is ever observed half-written.

pub mod command;
pub mod config;
pub mod error;
pub mod handoff;
pub mod params;
pub mod queue;
pub mod ramper;
pub mod render;
pub mod sample;
pub mod types;

// Re-exports for convenience
pub use command::{RampCommand, RampEvent, RampKind};
pub use config::{RampConfig, DEFAULT_QUEUE_CAPACITY, DEFAULT_RAMP_MS, DEFAULT_SAMPLE_RATE};
pub use error::{RampError, RampResult};
pub use handoff::RampCell;
pub use params::RampedParameters;
pub use queue::{RampQueue, RampReceiver, RampSender};
pub use ramper::RampedParameter;
pub use render::{render_with_events, RenderSummary};
pub use sample::Sample;
pub use types::{FrameCount, ParamAddress};
