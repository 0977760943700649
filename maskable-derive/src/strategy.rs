//! Parsing of `#[mask(...)]` field attributes.
//!
//! This module maps attribute syntax to masking rules and produces structured
//! errors for invalid forms.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Attribute, Result, meta::ParseNestedMeta, spanned::Spanned};

const DEFAULT_EMAIL_VISIBLE_CHARS: usize = 2;
const DEFAULT_NAME_VISIBLE_CHARS: usize = 1;

const EXPECTED_RULES: &str = "expected one of `email`, `email(n)`, `name`, `name(n)`, \
                              `phone`, `credit_card`, `passport`";

/// Masking rule requested by a `#[mask(...)]` field attribute.
///
/// | Attribute               | Rule                |
/// |-------------------------|---------------------|
/// | `#[mask(email)]`        | `Email(2)`          |
/// | `#[mask(email(n))]`     | `Email(n)`          |
/// | `#[mask(name)]`         | `Name(1)`           |
/// | `#[mask(name(n))]`      | `Name(n)`           |
/// | `#[mask(phone)]`        | `Phone`             |
/// | `#[mask(credit_card)]`  | `CreditCard`        |
/// | `#[mask(passport)]`     | `Passport`          |
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RuleSpec {
    Email(usize),
    Name(usize),
    Phone,
    CreditCard,
    Passport,
}

impl RuleSpec {
    /// Expression constructing the runtime `MaskingRule`.
    pub(crate) fn to_tokens(&self, rule_path: &TokenStream) -> TokenStream {
        match self {
            Self::Email(visible_chars) => quote! { #rule_path::email(#visible_chars) },
            Self::Name(visible_chars) => quote! { #rule_path::name(#visible_chars) },
            Self::Phone => quote! { #rule_path::Phone },
            Self::CreditCard => quote! { #rule_path::CreditCard },
            Self::Passport => quote! { #rule_path::Passport },
        }
    }
}

fn visible_chars(meta: &ParseNestedMeta<'_>, default: usize) -> Result<usize> {
    if meta.input.is_empty() || meta.input.peek(syn::Token![,]) {
        return Ok(default);
    }

    let content;
    syn::parenthesized!(content in meta.input);
    if content.peek(syn::Token![-]) {
        return Err(content.error("visible character count must be non-negative"));
    }
    let count: syn::LitInt = content.parse()?;
    if !content.is_empty() {
        return Err(content.error("expected a single visible character count"));
    }
    count.base10_parse::<usize>()
}

fn reject_arguments(meta: &ParseNestedMeta<'_>, rule: &str) -> Result<()> {
    if meta.input.is_empty() || meta.input.peek(syn::Token![,]) {
        return Ok(());
    }
    Err(meta.error(format!("`{rule}` does not take arguments")))
}

fn parse_rule(meta: &ParseNestedMeta<'_>) -> Result<RuleSpec> {
    let Some(ident) = meta.path.get_ident() else {
        return Err(meta.error(format!("unknown masking rule; {EXPECTED_RULES}")));
    };

    match ident.to_string().as_str() {
        "email" => Ok(RuleSpec::Email(visible_chars(meta, DEFAULT_EMAIL_VISIBLE_CHARS)?)),
        "name" => Ok(RuleSpec::Name(visible_chars(meta, DEFAULT_NAME_VISIBLE_CHARS)?)),
        "phone" => reject_arguments(meta, "phone").map(|()| RuleSpec::Phone),
        "credit_card" => reject_arguments(meta, "credit_card").map(|()| RuleSpec::CreditCard),
        "passport" => reject_arguments(meta, "passport").map(|()| RuleSpec::Passport),
        other => Err(meta.error(format!("unknown masking rule `{other}`; {EXPECTED_RULES}"))),
    }
}

fn set_rule(target: &mut Option<RuleSpec>, next: RuleSpec, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "a field can carry only one masking rule",
        ));
    }
    *target = Some(next);
    Ok(())
}

/// Returns the rule declared on a field, or `None` for an unannotated field.
pub(crate) fn parse_field_rule(attrs: &[Attribute]) -> Result<Option<RuleSpec>> {
    let mut rule: Option<RuleSpec> = None;
    for attr in attrs {
        if !attr.path().is_ident("mask") {
            continue;
        }
        if !matches!(attr.meta, syn::Meta::List(_)) {
            return Err(syn::Error::new(
                attr.span(),
                format!("missing masking rule: use #[mask(rule)]; {EXPECTED_RULES}"),
            ));
        }

        let mut found = false;
        attr.parse_nested_meta(|meta| {
            let next = parse_rule(&meta)?;
            found = true;
            set_rule(&mut rule, next, attr.span())
        })?;
        if !found {
            return Err(syn::Error::new(
                attr.span(),
                format!("missing masking rule; {EXPECTED_RULES}"),
            ));
        }
    }
    Ok(rule)
}
