//! Common types used throughout ramper.

/// Number of sample frames.
///
/// Unsigned, so a negative ramp duration cannot be expressed. Matches the
/// 32-bit frame counts hosts hand to render callbacks.
pub type FrameCount = u32;

/// Host-facing parameter address.
///
/// Used to route ramp commands and render events to the ramper that owns
/// the parameter. 64 bits wide to hold any host address scheme.
pub type ParamAddress = u64;
