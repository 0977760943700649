//! Parsing of container-level `#[mask(...)]` attributes.

use syn::{Attribute, Result, spanned::Spanned};

/// Options set on the struct itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ContainerOptions {
    /// `#[mask(no_copy)]`: the type cannot be copied, so masking always
    /// returns the original value.
    pub(crate) no_copy: bool,
}

pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();
    for attr in attrs {
        if !attr.path().is_ident("mask") {
            continue;
        }
        if !matches!(attr.meta, syn::Meta::List(_)) {
            return Err(syn::Error::new(
                attr.span(),
                "expected #[mask(no_copy)] on the container",
            ));
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("no_copy") {
                if options.no_copy {
                    return Err(meta.error("duplicate `no_copy` option"));
                }
                options.no_copy = true;
                return Ok(());
            }
            Err(meta.error(
                "unknown container option; masking rules belong on fields, \
                 the only container option is `no_copy`",
            ))
        })?;
    }
    Ok(options)
}
