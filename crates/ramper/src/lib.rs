//! # ramper
//!
//! Sample-accurate parameter ramping for Rust audio code.
//!
//! ## Architecture
//!
//! ```text
//! control thread                     render thread
//! --------------                     -------------
//! RampSender ---- RampQueue ------>  RampReceiver::drain_into(params)
//! RampCell::publish_ramp -------->   RampCell::apply_to(ramper)
//!                     host events -> render_with_events(params, ...)
//!                                          |
//!                                    RampedParameter::get_step()
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use ramper::prelude::*;
//!
//! #[derive(RampedParameters)]
//! struct GainParams {
//!     #[ramp(address = 0)]
//!     level: RampedParameter,
//! }
//!
//! let config = RampConfig::new().with_sample_rate(1000.0);
//! let (mut tx, mut rx) = RampQueue::new(&config).unwrap();
//! let mut params = GainParams { level: RampedParameter::new(0.0) };
//!
//! // Control thread
//! tx.start_ramp(GainParams::ADDRESS_LEVEL, 1.0, 4).unwrap();
//!
//! // Render thread
//! rx.drain_into(&mut params);
//! let mut out = [0.0f32; 5];
//! params.level.fill(&mut out);
//! assert_eq!(out, [0.0, 0.25, 0.5, 0.75, 1.0]);
//! ```

// Re-export sub-crates
pub use ramper_core as core;

// Re-export derive macros when feature is enabled
#[cfg(feature = "derive")]
pub use ramper_macros::RampedParameters;

/// Prelude module for convenient imports.
///
/// ```rust
/// use ramper::prelude::*;
/// ```
pub mod prelude {
    pub use ramper_core::{
        // Ramping
        RampedParameter, RampedParameters, Sample,
        // Commands and events
        RampCommand, RampEvent, RampKind,
        // Cross-thread handoff
        RampCell, RampQueue, RampReceiver, RampSender,
        // Sub-block rendering
        render_with_events, RenderSummary,
        // Configuration and errors
        RampConfig, RampError, RampResult,
        // Types
        FrameCount, ParamAddress,
    };

    #[cfg(feature = "derive")]
    pub use ramper_macros::RampedParameters;
}
