//! Semantic validation for the derive macro.

use std::collections::HashMap;

use crate::ir::RampsIR;

/// Validate the IR for semantic correctness.
pub fn validate(ir: &RampsIR) -> syn::Result<()> {
    check_unique_addresses(ir)?;
    check_single_sample_type(ir)?;
    Ok(())
}

/// Check that no two fields share an address.
fn check_unique_addresses(ir: &RampsIR) -> syn::Result<()> {
    let mut seen: HashMap<u64, &syn::Ident> = HashMap::new();

    for field in &ir.fields {
        if let Some(first_field) = seen.get(&field.address) {
            return Err(syn::Error::new(
                field.span,
                format!(
                    "Duplicate ramp address {}: already used by field `{}`",
                    field.address, first_field
                ),
            ));
        }
        seen.insert(field.address, &field.field_name);
    }

    Ok(())
}

/// Check that every field ramps in the same sample type.
fn check_single_sample_type(ir: &RampsIR) -> syn::Result<()> {
    let Some(first) = ir.fields.first() else {
        return Ok(());
    };
    let expected = first.sample_key();

    for field in &ir.fields[1..] {
        let found = field.sample_key();
        if found != expected {
            return Err(syn::Error::new(
                field.span,
                format!(
                    "Field `{}` ramps in `{}` but `{}` ramps in `{}`; \
                     all ramps in one struct must share a sample type",
                    field.field_name, found, first.field_name, expected
                ),
            ));
        }
    }

    Ok(())
}
