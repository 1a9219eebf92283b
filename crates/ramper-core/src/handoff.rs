//! Lock-free, tear-free ramp request handoff for a single parameter.
//!
//! A ramp is three fields (goal, slope, remaining) that must change together.
//! Writing them from a control thread while the render thread reads them
//! gives torn ramps. [`RampCell`] avoids that by never sharing the ramper at
//! all: the control thread publishes a whole request in one 64-bit atomic
//! store, and the render thread takes it in one atomic swap and applies it to
//! the [`RampedParameter`] it owns.
//!
//! Requests are latest-wins: publishing twice before the render thread looks
//! replaces the first request. Use [`RampQueue`](crate::RampQueue) when every
//! command must be delivered.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ramper_core::{RampCell, RampedParameter};
//!
//! let cell = Arc::new(RampCell::new());
//! let mut gain = RampedParameter::new(1.0f32);
//!
//! // Control thread
//! cell.publish_ramp(0.0, 4).unwrap();
//!
//! // Render thread, once per buffer
//! assert!(cell.apply_to(&mut gain));
//! assert_eq!(gain.goal(), 0.0);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use crate::command::RampKind;
use crate::error::{RampError, RampResult};
use crate::ramper::RampedParameter;
use crate::sample::Sample;
use crate::types::FrameCount;

// High word is a NaN bit pattern, which publish() never stores.
const EMPTY: u64 = u64::MAX;

#[inline]
fn pack(goal: f32, duration: FrameCount) -> u64 {
    ((goal.to_bits() as u64) << 32) | duration as u64
}

#[inline]
fn unpack(bits: u64) -> RampKind {
    let goal = f32::from_bits((bits >> 32) as u32);
    RampKind::ramp(goal, bits as u32)
}

/// Single-slot atomic mailbox for one parameter's next ramp request.
#[derive(Debug)]
pub struct RampCell {
    bits: AtomicU64,
}

impl RampCell {
    /// Create an empty cell.
    pub const fn new() -> Self {
        Self {
            bits: AtomicU64::new(EMPTY),
        }
    }

    /// Publish a snap to `value`. Called from the control thread.
    pub fn publish_set(&self, value: f32) -> RampResult<()> {
        self.publish(RampKind::Set(value))
    }

    /// Publish a ramp to `goal` over `duration` samples. Called from the
    /// control thread.
    pub fn publish_ramp(&self, goal: f32, duration: FrameCount) -> RampResult<()> {
        self.publish(RampKind::ramp(goal, duration))
    }

    /// Publish a request, replacing any request not yet taken.
    ///
    /// NaN and infinite goals are rejected with [`RampError::NonFiniteValue`].
    pub fn publish(&self, kind: RampKind) -> RampResult<()> {
        let goal = kind.goal();
        if !goal.is_finite() {
            log::warn!("Rejected non-finite ramp goal {}", goal);
            return Err(RampError::NonFiniteValue(goal));
        }
        self.bits.store(pack(goal, kind.duration()), Ordering::Release);
        Ok(())
    }

    /// Take the pending request, leaving the cell empty.
    #[inline]
    pub fn take(&self) -> Option<RampKind> {
        match self.bits.swap(EMPTY, Ordering::AcqRel) {
            EMPTY => None,
            bits => Some(unpack(bits)),
        }
    }

    /// Take the pending request and apply it to `ramper`.
    ///
    /// Returns true if a request was applied. Call from the render thread,
    /// typically at the start of each buffer.
    #[inline]
    pub fn apply_to<S: Sample>(&self, ramper: &mut RampedParameter<S>) -> bool {
        match self.take() {
            Some(kind) => {
                kind.apply_to(ramper);
                true
            }
            None => false,
        }
    }

    /// Whether a request is waiting.
    pub fn is_pending(&self) -> bool {
        self.bits.load(Ordering::Acquire) != EMPTY
    }
}

impl Default for RampCell {
    fn default() -> Self {
        Self::new()
    }
}
