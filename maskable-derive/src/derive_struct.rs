//! Struct-specific `Maskable` derivation.
//!
//! For every field this module decides whether it carries a rule, emits the
//! descriptor entry and accessor for annotated fields, and builds the
//! field-by-field copy used by `shallow_copy`.

use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};
use syn::{DataStruct, Fields, Member, Result, ext::IdentExt, spanned::Spanned};

use crate::{
    container::ContainerOptions,
    crate_path,
    generics::collect_generics_from_type,
    strategy::parse_field_rule,
    types::is_scalar_type,
};

/// Pieces of the generated `Maskable` impl.
pub(crate) struct DeriveOutput {
    /// Body of `masking_fields`.
    pub(crate) descriptors: Vec<TokenStream>,
    /// Match arms of `field_accessor`.
    pub(crate) accessor_arms: Vec<TokenStream>,
    /// Body of `shallow_copy`.
    pub(crate) copy_body: TokenStream,
    /// Type parameters used by copied fields.
    pub(crate) copied_generics: Vec<Ident>,
    /// Type parameters used by annotated fields.
    pub(crate) masked_generics: Vec<Ident>,
}

pub(crate) fn derive_struct(
    data: DataStruct,
    generics: &syn::Generics,
    options: ContainerOptions,
) -> Result<DeriveOutput> {
    let descriptor_path = crate_path("FieldDescriptor");
    let accessor_path = crate_path("FieldAccessor");
    let field_trait = crate_path("MaskableField");
    let rule_path = crate_path("MaskingRule");

    let mut output = DeriveOutput {
        descriptors: Vec::new(),
        accessor_arms: Vec::new(),
        copy_body: TokenStream::new(),
        copied_generics: Vec::new(),
        masked_generics: Vec::new(),
    };
    let mut copies = Vec::new();

    let named = matches!(data.fields, Fields::Named(_));
    let unit = matches!(data.fields, Fields::Unit);

    for (index, field) in data.fields.into_iter().enumerate() {
        let span = field.span();
        let member = field
            .ident
            .clone()
            .map_or_else(|| Member::Unnamed(index.into()), Member::Named);
        let name = match &member {
            Member::Named(ident) => ident.unraw().to_string(),
            Member::Unnamed(index) => index.index.to_string(),
        };
        let ty = &field.ty;

        if !options.no_copy {
            collect_generics_from_type(ty, generics, &mut output.copied_generics);
            let copy = quote_spanned! { span =>
                ::core::clone::Clone::clone(&self.#member)
            };
            copies.push((member.clone(), copy));
        }

        let Some(rule) = parse_field_rule(&field.attrs)? else {
            continue;
        };
        if is_scalar_type(ty) {
            return Err(syn::Error::new(
                ty.span(),
                "`#[mask]` can only be applied to string fields \
                 (`String`, `Option<String>`, `Box<str>`, `Cow<'static, str>`)",
            ));
        }
        collect_generics_from_type(ty, generics, &mut output.masked_generics);

        let rule = rule.to_tokens(&rule_path);
        output.descriptors.push(quote! {
            #descriptor_path::new(#name, ::core::any::type_name::<Self>(), #rule)
        });
        output.accessor_arms.push(quote_spanned! { span =>
            #name => ::core::option::Option::Some(#accessor_path::<Self>::new(
                #name,
                |target| #field_trait::masked_value(&target.#member),
                |target, value| #field_trait::replace_masked(&mut target.#member, value),
            )),
        });
    }

    let error_path = crate_path("MaskingError");
    output.copy_body = if options.no_copy {
        quote! {
            ::core::result::Result::Err(#error_path::NotCopyable {
                type_name: ::core::any::type_name::<Self>(),
            })
        }
    } else if unit {
        quote! { ::core::result::Result::Ok(Self) }
    } else if named {
        let fields = copies.iter().map(|(member, copy)| quote! { #member: #copy });
        quote! { ::core::result::Result::Ok(Self { #(#fields),* }) }
    } else {
        let values = copies.iter().map(|(_, copy)| copy);
        quote! { ::core::result::Result::Ok(Self(#(#values),*)) }
    };

    Ok(output)
}
