//! Core traits for types that can be masked.
//!
//! - [`Maskable`]: Field metadata, accessors and copying for one type
//! - [`MaskableExt`]: User-facing `.masked_with()` method

use super::{
    accessor::FieldAccessor, descriptor::FieldDescriptor, engine::Masker, output::Masked,
};
use crate::MaskingError;

/// A type whose string fields carry masking rules.
///
/// Derive it with `#[derive(Maskable)]` and annotate fields with
/// `#[mask(...)]`. A manual implementation is the explicit-registration route:
/// return no fields from [`Maskable::masking_fields`] and install a policy table
/// with [`DescriptorRegistry::register`](crate::DescriptorRegistry::register).
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Maskable`",
    label = "this type has no masking declarations",
    note = "use `#[derive(Maskable)]` on the type definition"
)]
pub trait Maskable: Sized + 'static {
    /// The declared (field, rule) pairs, in field declaration order.
    fn masking_fields() -> Vec<FieldDescriptor>;

    /// Getter/setter pair for a string field, or `None` if the type has no
    /// accessible string field called `field`.
    ///
    /// The derive only generates accessors for fields annotated with
    /// `#[mask(...)]`.
    fn field_accessor(field: &str) -> Option<FieldAccessor<Self>>;

    /// Produces a one-level copy of `self`.
    ///
    /// Field values are cloned individually; sub-objects behind `Arc` or `Rc`
    /// are shared with the original.
    fn shallow_copy(&self) -> Result<Self, MaskingError>;
}

/// Convenience method for masking with an explicit engine.
pub trait MaskableExt: Maskable {
    /// Masks `self` with `masker`. Equivalent to `masker.mask(self)`.
    fn masked_with<'a>(&'a self, masker: &Masker) -> Masked<'a, Self> {
        masker.mask(self)
    }
}

impl<T> MaskableExt for T where T: Maskable {}
