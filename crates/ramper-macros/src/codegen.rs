//! Code generation for the derive macro.
//!
//! Emits the `RampedParameters` impl and one address constant per field.

use proc_macro2::TokenStream;
use quote::quote;

use crate::ir::RampsIR;

/// Generate all code for the derive macro.
pub fn generate(ir: &RampsIR) -> TokenStream {
    let address_consts = generate_address_consts(ir);
    let trait_impl = generate_trait_impl(ir);

    quote! {
        #address_consts
        #trait_impl
    }
}

/// Generate `ADDRESS_<FIELD>` constants.
fn generate_address_consts(ir: &RampsIR) -> TokenStream {
    let struct_name = &ir.struct_name;
    let (impl_generics, ty_generics, where_clause) = ir.generics.split_for_impl();

    let const_defs = ir.fields.iter().map(|field| {
        let const_name = field.const_name();
        let address = field.address;
        quote! {
            pub const #const_name: ::ramper::core::ParamAddress = #address;
        }
    });

    quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#const_defs)*
        }
    }
}

/// Generate the `RampedParameters` trait implementation.
fn generate_trait_impl(ir: &RampsIR) -> TokenStream {
    let struct_name = &ir.struct_name;
    let (impl_generics, ty_generics, where_clause) = ir.generics.split_for_impl();
    let sample_ty = ir.sample_ty();

    let addresses: Vec<u64> = ir.fields.iter().map(|field| field.address).collect();
    let field_names: Vec<&syn::Ident> = ir.fields.iter().map(|field| &field.field_name).collect();

    quote! {
        impl #impl_generics ::ramper::core::RampedParameters<#sample_ty>
            for #struct_name #ty_generics #where_clause
        {
            fn addresses(&self) -> &'static [::ramper::core::ParamAddress] {
                const ADDRESSES: &[::ramper::core::ParamAddress] = &[#(#addresses),*];
                ADDRESSES
            }

            fn ramper(
                &self,
                address: ::ramper::core::ParamAddress,
            ) -> ::std::option::Option<&::ramper::core::RampedParameter<#sample_ty>> {
                match address {
                    #(#addresses => ::std::option::Option::Some(&self.#field_names),)*
                    _ => ::std::option::Option::None,
                }
            }

            fn ramper_mut(
                &mut self,
                address: ::ramper::core::ParamAddress,
            ) -> ::std::option::Option<&mut ::ramper::core::RampedParameter<#sample_ty>> {
                match address {
                    #(#addresses => ::std::option::Option::Some(&mut self.#field_names),)*
                    _ => ::std::option::Option::None,
                }
            }
        }
    }
}
