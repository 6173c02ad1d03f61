//! # cstructgen Derive
//!
//! Procedural macro for deriving `CShape` on plain structs.
//!
//! Deriving `CShape` lets a struct describe its own shape for C struct
//! generation, field by field in declaration order.
//!
//! # Example
//!
//! ```rust,ignore
//! use cstructgen::prelude::*;
//!
//! #[derive(CShape)]
//! struct Sample {
//!     id: u64,
//!     values: [f64; 8],
//!     active: bool,
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, parse_macro_input};

/// Derives the `CShape` trait for a struct with named fields.
///
/// The generated implementation produces a record shape whose name is the
/// struct's identifier and whose fields appear in declaration order, each
/// described by its own type's `CShape` implementation. The deriving crate
/// must depend on `cstructgen-shape`.
///
/// Enums, unions, tuple structs, unit structs, and generic structs are
/// rejected with a compile error.
#[proc_macro_derive(CShape)]
pub fn derive_cshape(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_cshape_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_cshape_impl(input: DeriveInput) -> Result<proc_macro2::TokenStream, Error> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "CShape cannot be derived for generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new_spanned(
                    name,
                    "CShape can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(Error::new_spanned(
                name,
                "CShape can only be derived for structs",
            ));
        }
    };

    let field_shapes = fields.iter().map(|field| {
        // Fields::Named guarantees the ident is present.
        let field_name = field.ident.as_ref().unwrap().to_string();
        let ty = &field.ty;
        quote! {
            ::cstructgen_shape::FieldShape::new(
                #field_name,
                <#ty as ::cstructgen_shape::CShape>::shape(),
            )
        }
    });

    let record_name = name.to_string();

    Ok(quote! {
        impl ::cstructgen_shape::CShape for #name {
            fn shape() -> ::cstructgen_shape::TypeShape {
                ::cstructgen_shape::TypeShape::Record(
                    ::cstructgen_shape::RecordShape::new(
                        #record_name,
                        vec![#(#field_shapes),*],
                    ),
                )
            }
        }
    })
}
