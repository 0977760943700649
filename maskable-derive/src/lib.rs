//! Derive macro for `maskable`.
//!
//! This crate generates the code behind `#[derive(Maskable)]`. It:
//! - reads `#[mask(...)]` attributes on fields and on the container
//! - emits the `Maskable` impl: the field/rule table, one accessor per annotated
//!   field, and a field-by-field copy
//!
//! It does **not** implement the masking rules. Those live in the main
//! `maskable` crate and are applied at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Result, parse_macro_input, spanned::Spanned};

mod container;
mod derive_struct;
mod generics;
mod strategy;
mod types;
use container::parse_container_options;
use derive_struct::derive_struct;
use generics::add_maskable_bounds;

/// Derives `maskable::Maskable` for structs.
///
/// # Field Attributes
///
/// - **No annotation**: the field is copied and never changed.
/// - `#[mask(email)]` / `#[mask(email(n))]`: masks the local part of an email
///   address, keeping 2 (or `n`) leading characters.
/// - `#[mask(name)]` / `#[mask(name(n))]`: keeps the first character (or `n`
///   characters) and masks the rest.
/// - `#[mask(phone)]`, `#[mask(credit_card)]`, `#[mask(passport)]`: fixed
///   formats, no arguments.
///
/// Annotated fields must implement `maskable::MaskableField` (`String`,
/// `Option<String>`, `Box<str>`, `Cow<'static, str>`). Every other field must
/// implement `Clone`.
///
/// # Container Attributes
///
/// - `#[mask(no_copy)]`: the type cannot be copied. Masking then returns the
///   original value unmasked (`Masked::Original`), and fields need not be
///   `Clone`.
///
/// Negative counts, unknown rules, arguments on argument-less rules, more than
/// one rule per field, annotated scalar fields, lifetime parameters, enums and
/// unions are rejected at compile time.
#[proc_macro_derive(Maskable, attributes(mask))]
pub fn derive_maskable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn crate_root() -> TokenStream {
    // `maskable` aliases itself with `extern crate self`, so `::maskable` also
    // resolves inside the crate and its doctests.
    match crate_name("maskable") {
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::maskable },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item = Ident::new(item, Span::call_site());
    quote! { #root::#item }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let data = match data {
        Data::Struct(data) => data,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`Maskable` can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "`Maskable` can only be derived for structs",
            ));
        }
    };

    if let Some(lifetime) = generics.lifetimes().next() {
        return Err(syn::Error::new(
            lifetime.span(),
            "`Maskable` cannot be derived for types with lifetime parameters",
        ));
    }

    let options = parse_container_options(&attrs)?;
    let output = derive_struct(data, &generics, options)?;

    let crate_root = crate_root();
    let descriptor_path = crate_path("FieldDescriptor");
    let accessor_path = crate_path("FieldAccessor");
    let error_path = crate_path("MaskingError");

    let bounded = add_maskable_bounds(
        generics.clone(),
        &output.copied_generics,
        &output.masked_generics,
    );
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();

    let descriptors = &output.descriptors;
    let accessor_arms = &output.accessor_arms;
    let copy_body = &output.copy_body;

    Ok(quote! {
        impl #impl_generics #crate_root::Maskable for #ident #ty_generics #where_clause {
            fn masking_fields() -> ::std::vec::Vec<#descriptor_path> {
                ::std::vec![#(#descriptors),*]
            }

            fn field_accessor(
                field: &str,
            ) -> ::core::option::Option<#accessor_path<Self>> {
                match field {
                    #(#accessor_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn shallow_copy(&self) -> ::core::result::Result<Self, #error_path> {
                #copy_body
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn expand_tokens(tokens: TokenStream) -> Result<TokenStream> {
        expand(syn::parse2(tokens).expect("should parse as DeriveInput"))
    }

    #[test]
    fn expands_a_maskable_impl() {
        let tokens = expand_tokens(quote! {
            struct Customer {
                #[mask(email)]
                email: String,
                id: u64,
            }
        })
        .unwrap()
        .to_string();
        assert!(tokens.contains("Maskable for Customer"));
        assert!(tokens.contains("MaskingRule :: email (2usize)"));
        assert!(tokens.contains("\"email\" =>"));
    }

    #[test]
    fn unannotated_struct_has_no_descriptors() {
        let tokens = expand_tokens(quote! {
            struct Plain { id: u64 }
        })
        .unwrap()
        .to_string();
        assert!(tokens.contains(":: std :: vec ! []"));
    }

    #[test]
    fn enums_are_rejected() {
        let err = expand_tokens(quote! {
            enum Contact { Email(String) }
        })
        .unwrap_err();
        assert!(err.to_string().contains("only be derived for structs"));
    }

    #[test]
    fn unions_are_rejected() {
        let err = expand_tokens(quote! {
            union Raw { a: u32, b: f32 }
        })
        .unwrap_err();
        assert!(err.to_string().contains("only be derived for structs"));
    }

    #[test]
    fn lifetime_parameters_are_rejected() {
        let err = expand_tokens(quote! {
            struct Borrowed<'a> { #[mask(name)] name: &'a str }
        })
        .unwrap_err();
        assert!(err.to_string().contains("lifetime parameters"));
    }
}
