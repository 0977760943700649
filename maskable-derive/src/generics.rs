//! Generic parameter handling for `#[derive(Maskable)]`.
//!
//! `Maskable` requires `Self: 'static`, so every type parameter is bounded by
//! `'static`. Parameters that appear in copied fields additionally need
//! `Clone`, and parameters that appear in annotated fields need
//! `MaskableField`.
//!
//! `PhantomData<T>` is skipped when collecting generics: a
//! `struct Tagged<T> { id: String, _marker: PhantomData<T> }` does not require
//! `T: Clone`.

use syn::{Ident, parse_quote};

use crate::crate_path;

// Walks a field type and records which of the container's type parameters it
// mentions, in first-seen order.
struct Collector<'g> {
    generics: &'g syn::Generics,
    found: &'g mut Vec<Ident>,
}

impl Collector<'_> {
    fn record(&mut self, ident: &Ident) {
        let is_param = self.generics.type_params().any(|param| param.ident == *ident);
        if is_param && !self.found.contains(ident) {
            self.found.push(ident.clone());
        }
    }

    fn bound(&mut self, bound: &syn::TypeParamBound) {
        if let syn::TypeParamBound::Trait(bound) = bound {
            self.path(&bound.path);
        }
    }

    fn arguments(&mut self, arguments: &syn::PathArguments) {
        match arguments {
            syn::PathArguments::AngleBracketed(bracketed) => {
                for argument in &bracketed.args {
                    match argument {
                        syn::GenericArgument::Type(ty) => self.ty(ty),
                        syn::GenericArgument::AssocType(assoc) => self.ty(&assoc.ty),
                        syn::GenericArgument::Constraint(constraint) => {
                            constraint.bounds.iter().for_each(|bound| self.bound(bound));
                        }
                        _ => {}
                    }
                }
            }
            syn::PathArguments::Parenthesized(parenthesized) => {
                parenthesized.inputs.iter().for_each(|input| self.ty(input));
                self.output(&parenthesized.output);
            }
            syn::PathArguments::None => {}
        }
    }

    fn output(&mut self, output: &syn::ReturnType) {
        if let syn::ReturnType::Type(_, ty) = output {
            self.ty(ty);
        }
    }

    fn path(&mut self, path: &syn::Path) {
        // PhantomData<T> is Clone for every T.
        if path.segments.last().is_some_and(|last| last.ident == "PhantomData") {
            return;
        }
        for segment in &path.segments {
            self.record(&segment.ident);
            self.arguments(&segment.arguments);
        }
    }

    fn ty(&mut self, ty: &syn::Type) {
        match ty {
            syn::Type::Path(path) => {
                if let Some(qself) = &path.qself {
                    self.ty(&qself.ty);
                }
                self.path(&path.path);
            }
            syn::Type::Reference(inner) => self.ty(&inner.elem),
            syn::Type::Ptr(inner) => self.ty(&inner.elem),
            syn::Type::Slice(inner) => self.ty(&inner.elem),
            syn::Type::Array(inner) => self.ty(&inner.elem),
            syn::Type::Paren(inner) => self.ty(&inner.elem),
            syn::Type::Group(inner) => self.ty(&inner.elem),
            syn::Type::Tuple(tuple) => tuple.elems.iter().for_each(|elem| self.ty(elem)),
            syn::Type::TraitObject(object) => {
                object.bounds.iter().for_each(|bound| self.bound(bound));
            }
            syn::Type::ImplTrait(object) => {
                object.bounds.iter().for_each(|bound| self.bound(bound));
            }
            syn::Type::BareFn(function) => {
                function.inputs.iter().for_each(|input| self.ty(&input.ty));
                self.output(&function.output);
            }
            _ => {}
        }
    }
}

/// Appends the type parameters of `generics` that `ty` mentions to `result`.
pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    Collector {
        generics,
        found: result,
    }
    .ty(ty);
}

fn push_bound(generics: &mut syn::Generics, used: &[Ident], bound: &syn::TypeParamBound) {
    for param in generics.type_params_mut() {
        if used.iter().any(|g| g == &param.ident) {
            param.bounds.push(bound.clone());
        }
    }
}

/// Adds the bounds required by the generated `Maskable` impl.
///
/// `copied` lists parameters used by fields that `shallow_copy` clones;
/// `masked` lists parameters used by annotated fields.
pub(crate) fn add_maskable_bounds(
    mut generics: syn::Generics,
    copied: &[Ident],
    masked: &[Ident],
) -> syn::Generics {
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }
    push_bound(&mut generics, copied, &parse_quote!(::core::clone::Clone));
    let field_path = crate_path("MaskableField");
    push_bound(&mut generics, masked, &parse_quote!(#field_path));
    generics
}
