//! AST parsing for the derive macro.
//!
//! Transforms `syn::DeriveInput` into [`RampsIR`].

use syn::{Data, DeriveInput, Field, Fields, GenericArgument, PathArguments, Type};

use crate::ir::{RampFieldIR, RampsIR};

/// Parse a `DeriveInput` into our intermediate representation.
pub fn parse(input: DeriveInput) -> syn::Result<RampsIR> {
    let data_struct = match &input.data {
        Data::Struct(s) => s,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                &input,
                "#[derive(RampedParameters)] only supports structs, not enums",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input,
                "#[derive(RampedParameters)] only supports structs, not unions",
            ))
        }
    };

    let fields = match &data_struct.fields {
        Fields::Named(named) => &named.named,
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "#[derive(RampedParameters)] only supports structs with named fields",
            ))
        }
    };

    let mut parsed_fields = Vec::new();
    for field in fields {
        if let Some(field_ir) = parse_field(field)? {
            parsed_fields.push(field_ir);
        }
        // Fields without #[ramp] are left alone
    }

    if parsed_fields.is_empty() {
        return Err(syn::Error::new_spanned(
            &input,
            "#[derive(RampedParameters)] requires at least one #[ramp(address = ...)] field",
        ));
    }

    Ok(RampsIR {
        struct_name: input.ident.clone(),
        generics: input.generics.clone(),
        fields: parsed_fields,
    })
}

/// Parse a single field, returning None if it is not a ramp.
fn parse_field(field: &Field) -> syn::Result<Option<RampFieldIR>> {
    let attr = field.attrs.iter().find(|attr| attr.path().is_ident("ramp"));
    let sample_ty = ramped_parameter_arg(&field.ty);

    let attr = match (attr, &sample_ty) {
        (Some(attr), Some(_)) => attr,
        (Some(_), None) => {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "#[ramp] can only be applied to RampedParameter fields",
            ))
        }
        (None, Some(_)) => {
            return Err(syn::Error::new_spanned(
                field,
                "RampedParameter field is missing #[ramp(address = ...)] attribute",
            ))
        }
        (None, None) => return Ok(None),
    };

    let field_name = field
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new_spanned(field, "Field must have a name"))?;

    let mut address: Option<u64> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("address") {
            let value: syn::LitInt = meta.value()?.parse()?;
            address = Some(value.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unknown ramp attribute, expected `address`"))
        }
    })?;

    let address = address.ok_or_else(|| {
        syn::Error::new_spanned(attr, "#[ramp] requires `address = <integer>`")
    })?;

    Ok(Some(RampFieldIR {
        span: field_name.span(),
        field_name,
        address,
        sample_ty: sample_ty.flatten(),
    }))
}

/// If `ty` is `RampedParameter` or `RampedParameter<S>`, return its sample
/// type argument (`Some(None)` for the default).
fn ramped_parameter_arg(ty: &Type) -> Option<Option<Type>> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "RampedParameter" {
        return None;
    }
    match &segment.arguments {
        PathArguments::None => Some(None),
        PathArguments::AngleBracketed(args) => match args.args.first() {
            Some(GenericArgument::Type(sample)) => Some(Some(sample.clone())),
            _ => Some(None),
        },
        PathArguments::Parenthesized(_) => None,
    }
}
