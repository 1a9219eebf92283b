//! Collections of addressed rampers.
//!
//! A DSP kernel usually owns several ramped parameters (cutoff, resonance,
//! gain, ...). [`RampedParameters`] lets commands and render events reach
//! them by [`ParamAddress`] without the kernel writing its own dispatch.
//!
//! Implement it by hand or with `#[derive(RampedParameters)]` from the
//! `ramper` crate:
//!
//! ```
//! use ramper_core::{ParamAddress, RampedParameter, RampedParameters};
//!
//! struct FilterParams {
//!     cutoff: RampedParameter,
//!     resonance: RampedParameter,
//! }
//!
//! impl RampedParameters for FilterParams {
//!     fn addresses(&self) -> &'static [ParamAddress] {
//!         &[0, 1]
//!     }
//!
//!     fn ramper(&self, address: ParamAddress) -> Option<&RampedParameter> {
//!         match address {
//!             0 => Some(&self.cutoff),
//!             1 => Some(&self.resonance),
//!             _ => None,
//!         }
//!     }
//!
//!     fn ramper_mut(&mut self, address: ParamAddress) -> Option<&mut RampedParameter> {
//!         match address {
//!             0 => Some(&mut self.cutoff),
//!             1 => Some(&mut self.resonance),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut params = FilterParams {
//!     cutoff: RampedParameter::new(1000.0),
//!     resonance: RampedParameter::new(0.1),
//! };
//! assert!(params.start_ramp(0, 2000.0, 64));
//! assert!(!params.set(7, 0.0));
//! ```

use crate::command::{RampCommand, RampKind};
use crate::ramper::RampedParameter;
use crate::sample::Sample;
use crate::types::{FrameCount, ParamAddress};

/// A set of rampers reachable by address.
pub trait RampedParameters<S: Sample = f32> {
    /// Every address this collection answers to, in declaration order.
    fn addresses(&self) -> &'static [ParamAddress];

    /// Look up a ramper.
    fn ramper(&self, address: ParamAddress) -> Option<&RampedParameter<S>>;

    /// Look up a ramper for mutation.
    fn ramper_mut(&mut self, address: ParamAddress) -> Option<&mut RampedParameter<S>>;

    /// Number of rampers.
    fn count(&self) -> usize {
        self.addresses().len()
    }

    /// Snap a parameter. Returns false for an unknown address.
    fn set(&mut self, address: ParamAddress, value: S) -> bool {
        match self.ramper_mut(address) {
            Some(ramper) => {
                ramper.set(value);
                true
            }
            None => false,
        }
    }

    /// Start a ramp. Returns false for an unknown address.
    fn start_ramp(&mut self, address: ParamAddress, goal: S, duration: FrameCount) -> bool {
        match self.ramper_mut(address) {
            Some(ramper) => {
                ramper.start_ramp(goal, duration);
                true
            }
            None => false,
        }
    }

    /// Apply a command. Returns false for an unknown address.
    fn apply(&mut self, command: &RampCommand) -> bool {
        self.apply_kind(command.address, command.kind)
    }

    /// Apply a [`RampKind`] to one address. Returns false for an unknown
    /// address.
    fn apply_kind(&mut self, address: ParamAddress, kind: RampKind) -> bool {
        match self.ramper_mut(address) {
            Some(ramper) => {
                kind.apply_to(ramper);
                true
            }
            None => false,
        }
    }

    /// Advance every ramper by `n` samples.
    ///
    /// Use after a render loop for the parameters it did not step itself.
    fn step_all_by(&mut self, n: FrameCount) {
        for &address in self.addresses() {
            if let Some(ramper) = self.ramper_mut(address) {
                ramper.step_by(n);
            }
        }
    }

    /// Whether any ramper is mid-ramp.
    fn any_ramping(&self) -> bool {
        self.addresses()
            .iter()
            .filter_map(|&address| self.ramper(address))
            .any(|ramper| ramper.is_ramping())
    }
}
