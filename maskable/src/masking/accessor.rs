//! Generated field accessors.
//!
//! A [`FieldAccessor`] is a pair of plain function pointers that read and write
//! one string field. `#[derive(Maskable)]` emits them as ordinary field
//! accesses, so using one costs an indirect call and nothing more.

use std::{borrow::Cow, fmt};

/// Reads and writes one named string field of a `T`.
pub struct FieldAccessor<T> {
    field: &'static str,
    get: fn(&T) -> Option<&str>,
    set: fn(&mut T, String),
}

fn absent<T>(_target: &T) -> Option<&str> {
    None
}

fn ignore<T>(_target: &mut T, _value: String) {}

impl<T> FieldAccessor<T> {
    /// Creates an accessor from a getter and a setter.
    #[must_use]
    pub const fn new(
        field: &'static str,
        get: fn(&T) -> Option<&str>,
        set: fn(&mut T, String),
    ) -> Self {
        Self { field, get, set }
    }

    /// An accessor that never reads a value and ignores writes.
    ///
    /// Fields that cannot be accessed degrade to this instead of failing.
    #[must_use]
    pub fn noop(field: &'static str) -> Self {
        Self::new(field, absent::<T>, ignore::<T>)
    }

    /// The field this accessor is bound to.
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Current value of the field, or `None` if there is none.
    pub fn get<'a>(&self, target: &'a T) -> Option<&'a str> {
        (self.get)(target)
    }

    /// Replaces the field's value.
    pub fn set(&self, target: &mut T, value: String) {
        (self.set)(target, value);
    }
}

impl<T> Clone for FieldAccessor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldAccessor<T> {}

impl<T> fmt::Debug for FieldAccessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// MaskableField - Field types that can carry a masking rule
// =============================================================================

/// A field type holding a string that can be masked in place.
///
/// Generated accessors go through this trait, so annotating a field of any
/// other type is rejected at compile time.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot carry a masking rule",
    label = "only string fields can be masked",
    note = "`#[mask(...)]` applies to `String`, `Option<String>`, `Box<str>` and `Cow<'static, str>` fields"
)]
pub trait MaskableField {
    /// The current string value, if present.
    fn masked_value(&self) -> Option<&str>;

    /// Stores a masked value.
    fn replace_masked(&mut self, value: String);
}

impl MaskableField for String {
    fn masked_value(&self) -> Option<&str> {
        Some(self.as_str())
    }

    fn replace_masked(&mut self, value: String) {
        *self = value;
    }
}

// An absent value stays absent.
impl MaskableField for Option<String> {
    fn masked_value(&self) -> Option<&str> {
        self.as_deref()
    }

    fn replace_masked(&mut self, value: String) {
        if let Some(current) = self {
            *current = value;
        }
    }
}

impl MaskableField for Box<str> {
    fn masked_value(&self) -> Option<&str> {
        Some(&**self)
    }

    fn replace_masked(&mut self, value: String) {
        *self = value.into_boxed_str();
    }
}

impl MaskableField for Cow<'static, str> {
    fn masked_value(&self) -> Option<&str> {
        Some(&**self)
    }

    fn replace_masked(&mut self, value: String) {
        *self = Cow::Owned(value);
    }
}
