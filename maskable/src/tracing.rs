//! Adapters for emitting masked values through `tracing`.
//!
//! - **`TracingMaskedExt`**: Masks a [`Maskable`] value and logs its `Debug`
//!   form as a display string.
//! - **`tracing_masked_str`**: Masks a single string with a rule for use as a
//!   field value.
//!
//! # Example
//!
//! ```ignore
//! use maskable::tracing::TracingMaskedExt;
//!
//! tracing::info!(customer = customer.tracing_masked(&masker), "booking created");
//! ```

use std::fmt;

use tracing::field::{DisplayValue, display};

use crate::{
    masking::{Maskable, Masker},
    policy::MaskingRule,
};

/// Extension trait for logging masked values as display strings.
///
/// The output is the `Debug` representation of the masked copy. When the value
/// cannot be copied, the original is logged as `<unmasked>` instead so that
/// the fail-open path never leaks into logs.
pub trait TracingMaskedExt: Maskable + fmt::Debug {
    /// Masks the value and wraps it as a `tracing` display value.
    fn tracing_masked(&self, masker: &Masker) -> DisplayValue<String> {
        let masked = masker.mask(self);
        let text = if masked.is_redacted() {
            format!("{:?}", &*masked)
        } else {
            format!("<unmasked {}>", std::any::type_name::<Self>())
        };
        display(text)
    }
}

impl<T> TracingMaskedExt for T where T: Maskable + fmt::Debug {}

/// Masks `value` with `rule` and wraps it as a `tracing` display value.
pub fn tracing_masked_str(value: &str, rule: MaskingRule) -> DisplayValue<String> {
    display(rule.apply_to(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldAccessor, FieldDescriptor, MaskingError};

    #[derive(Debug)]
    struct Ticket {
        holder: String,
        copyable: bool,
    }

    impl Maskable for Ticket {
        fn masking_fields() -> Vec<FieldDescriptor> {
            vec![FieldDescriptor::of::<Self>("holder", MaskingRule::name(1))]
        }

        fn field_accessor(field: &str) -> Option<FieldAccessor<Self>> {
            (field == "holder").then(|| {
                FieldAccessor::<Self>::new(
                    "holder",
                    |t| Some(t.holder.as_str()),
                    |t, v| t.holder = v,
                )
            })
        }

        fn shallow_copy(&self) -> Result<Self, MaskingError> {
            if !self.copyable {
                return Err(MaskingError::NotCopyable {
                    type_name: "Ticket",
                });
            }
            Ok(Self {
                holder: self.holder.clone(),
                copyable: self.copyable,
            })
        }
    }

    #[test]
    fn tracing_masked_logs_the_masked_copy() {
        let masker = Masker::new();
        let ticket = Ticket {
            holder: "Alice".into(),
            copyable: true,
        };
        let rendered = format!("{:?}", ticket.tracing_masked(&masker));
        assert!(rendered.contains("A****"));
        assert!(!rendered.contains("Alice"));
    }

    #[test]
    fn tracing_masked_hides_uncopyable_values() {
        let masker = Masker::new();
        let ticket = Ticket {
            holder: "Alice".into(),
            copyable: false,
        };
        let rendered = format!("{:?}", ticket.tracing_masked(&masker));
        assert!(rendered.contains("<unmasked"));
        assert!(!rendered.contains("Alice"));
    }

    #[test]
    fn tracing_masked_str_applies_the_rule() {
        let rendered = format!("{:?}", tracing_masked_str("010-1234-5678", MaskingRule::Phone));
        assert!(rendered.contains("010-****-5678"));
    }
}
