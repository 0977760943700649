//! Error type shared by the runtime crate.
//!
//! Only caller mistakes surface as errors. Dirty input data never does: rules
//! return their input unchanged and the engine falls back to the original value.

use thiserror::Error;

/// Errors reported to callers of the masking API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MaskingError {
    /// A visible character count was negative.
    #[error("visible character count for `{rule}` must be non-negative (got {value})")]
    NegativeVisibleChars {
        /// Tag of the rule being constructed.
        rule: &'static str,
        /// The rejected count.
        value: i64,
    },

    /// `mask_with_rule` was called without a rule.
    #[error("a masking rule is required")]
    MissingRule,

    /// The value could not be copied, so it cannot be masked.
    #[error("`{type_name}` cannot be copied for masking")]
    NotCopyable {
        /// Name of the type that refused the copy.
        type_name: &'static str,
    },

    /// A policy table was registered for a type that already has one.
    #[error("a masking descriptor for `{type_name}` is already registered")]
    AlreadyRegistered {
        /// Name of the type.
        type_name: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::MaskingError;

    #[test]
    fn messages_name_the_offending_input() {
        let err = MaskingError::NegativeVisibleChars {
            rule: "Email",
            value: -1,
        };
        assert_eq!(
            err.to_string(),
            "visible character count for `Email` must be non-negative (got -1)"
        );

        let err = MaskingError::NotCopyable { type_name: "Ticket" };
        assert_eq!(err.to_string(), "`Ticket` cannot be copied for masking");
    }

    #[test]
    fn errors_are_plain_values() {
        let err = MaskingError::AlreadyRegistered { type_name: "Guest" };
        let copied = err;
        assert_eq!(copied, err);
    }
}
