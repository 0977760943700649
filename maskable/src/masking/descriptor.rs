//! Field and type descriptors.
//!
//! A [`TypeDescriptor`] is the memoized answer to "which fields of this type
//! are masked, and how". It is built once per type and never changes.

use std::any::type_name;

use super::traits::Maskable;
use crate::policy::MaskingRule;

/// One masked field: its name, the type declaring it, and its rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: &'static str,
    declaring_type: &'static str,
    rule: MaskingRule,
}

impl FieldDescriptor {
    /// Creates a descriptor for `name` declared on `declaring_type`.
    #[must_use]
    pub const fn new(name: &'static str, declaring_type: &'static str, rule: MaskingRule) -> Self {
        Self {
            name,
            declaring_type,
            rule,
        }
    }

    /// Creates a descriptor for a field of `T`, naming the type automatically.
    #[must_use]
    pub fn of<T: ?Sized>(name: &'static str, rule: MaskingRule) -> Self {
        Self::new(name, type_name::<T>(), rule)
    }

    /// The field name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the type that declares the field.
    pub const fn declaring_type(&self) -> &'static str {
        self.declaring_type
    }

    /// The rule applied to the field.
    pub const fn rule(&self) -> MaskingRule {
        self.rule
    }
}

/// The ordered masked fields of one type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    type_name: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Builds the descriptor declared by `T` itself.
    #[must_use]
    pub fn of<T: Maskable>() -> Self {
        Self::from_fields::<T>(T::masking_fields())
    }

    /// Builds a descriptor for `T` from an explicit field table.
    ///
    /// Order is preserved. A field listed twice keeps its first rule, and a
    /// field `T::field_accessor` does not know is left out with a warning.
    /// Neither is fatal.
    #[must_use]
    pub fn from_fields<T: Maskable>(fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        let type_name = type_name::<T>();
        let mut kept: Vec<FieldDescriptor> = Vec::new();

        for field in fields {
            if kept.iter().any(|existing| existing.name == field.name) {
                tracing::warn!(
                    type_name,
                    field = field.name,
                    rule = %field.rule,
                    "duplicate masking rule ignored"
                );
                continue;
            }
            if T::field_accessor(field.name).is_none() {
                tracing::warn!(
                    type_name,
                    field = field.name,
                    rule = %field.rule,
                    "field has no masking accessor; excluded from masking"
                );
                continue;
            }
            kept.push(field);
        }

        Self {
            type_name,
            fields: kept,
        }
    }

    /// Name of the described type.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The masked fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// The rule declared for `field`, if any.
    pub fn rule_for(&self, field: &str) -> Option<MaskingRule> {
        self.fields
            .iter()
            .find(|descriptor| descriptor.name == field)
            .map(FieldDescriptor::rule)
    }

    /// Number of masked fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the type has no masked fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
