//! Derive macros for the ramper crates.
//!
//! Provides `#[derive(RampedParameters)]`, which routes addressed ramp
//! commands to the `RampedParameter` fields of a struct.
//!
//! # Example
//!
//! ```ignore
//! use ramper::prelude::*;
//!
//! #[derive(RampedParameters)]
//! pub struct FilterParams {
//!     #[ramp(address = 0)]
//!     pub cutoff: RampedParameter,
//!
//!     #[ramp(address = 1)]
//!     pub resonance: RampedParameter,
//! }
//! ```

use proc_macro::TokenStream;

mod codegen;
mod ir;
mod parse;
mod validate;

/// Derive macro for the `RampedParameters` trait.
///
/// This macro generates:
/// - `RampedParameters<S>` implementation (addresses, ramper, ramper_mut)
/// - an `ADDRESS_<FIELD>` constant per ramp field
///
/// # Attributes
///
/// - `#[ramp(address = N)]` - Required on every `RampedParameter` field.
///   `N` is the `u64` address commands and events use to reach the field.
///
/// Addresses must be unique, and all ramp fields must share one sample
/// type (`RampedParameter` and `RampedParameter<f32>` count as the same).
/// Other fields are ignored.
#[proc_macro_derive(RampedParameters, attributes(ramp))]
pub fn derive_ramped_parameters(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    match derive_ramped_parameters_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_ramped_parameters_impl(input: syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ir = parse::parse(input)?;
    validate::validate(&ir)?;
    Ok(codegen::generate(&ir))
}
