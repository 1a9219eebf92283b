//! Intermediate representation for the derive macro.
//!
//! Holds a parsed ramp struct after AST parsing and before code generation.

use proc_macro2::Span;

/// A struct deriving `RampedParameters`.
pub struct RampsIR {
    /// The struct name (e.g., `FilterParams`)
    pub struct_name: syn::Ident,
    /// Generic parameters, if any
    pub generics: syn::Generics,
    /// Fields carrying `#[ramp(...)]`, in declaration order
    pub fields: Vec<RampFieldIR>,
}

/// A `RampedParameter` field.
pub struct RampFieldIR {
    /// Field name (e.g., `cutoff`)
    pub field_name: syn::Ident,
    /// Address from `#[ramp(address = N)]`
    pub address: u64,
    /// Sample type argument, `None` for the `f32` default
    pub sample_ty: Option<syn::Type>,
    /// Span for error reporting
    pub span: Span,
}

impl RampsIR {
    /// Sample type shared by every field.
    ///
    /// Validation has already checked that all fields agree.
    pub fn sample_ty(&self) -> syn::Type {
        self.fields
            .first()
            .and_then(|field| field.sample_ty.clone())
            .unwrap_or_else(|| syn::parse_quote!(f32))
    }
}

impl RampFieldIR {
    /// Name of the generated address constant.
    ///
    /// E.g., `cutoff` -> `ADDRESS_CUTOFF`
    pub fn const_name(&self) -> syn::Ident {
        let name = self.field_name.to_string().to_uppercase();
        syn::Ident::new(&format!("ADDRESS_{}", name), self.span)
    }

    /// Sample type as a string, for comparing fields.
    pub fn sample_key(&self) -> String {
        match &self.sample_ty {
            Some(ty) => quote::quote!(#ty).to_string(),
            None => "f32".to_string(),
        }
    }
}
