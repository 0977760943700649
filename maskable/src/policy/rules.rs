//! The masking rules a field can be declared with.
//!
//! A [`MaskingRule`] is a value: it names the transformation and carries its
//! parameters. Applying it is a pure function of the input string.

use std::fmt;

use super::text;
use crate::MaskingError;

/// A masking policy for one string value.
///
/// Rules are immutable once constructed. `visible_chars` is unsigned, so a
/// negative count cannot be represented; use [`MaskingRule::try_email`] or
/// [`MaskingRule::try_name`] when the count comes from signed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaskingRule {
    /// Keeps the first `visible_chars` characters of the local part of an
    /// email address and the whole domain.
    Email {
        /// Number of leading local-part characters left visible.
        visible_chars: usize,
    },
    /// Masks the middle group of a `DDD-DDDD-DDDD` phone number.
    Phone,
    /// Keeps the first `visible_chars` characters of a name.
    Name {
        /// Number of leading characters left visible.
        visible_chars: usize,
    },
    /// Masks the third group of a 15- or 16-digit card number.
    CreditCard,
    /// Masks the serial digits of a passport number.
    Passport,
}

impl MaskingRule {
    /// Email rule keeping `visible_chars` characters of the local part.
    #[must_use]
    pub const fn email(visible_chars: usize) -> Self {
        Self::Email { visible_chars }
    }

    /// Name rule keeping `visible_chars` leading characters.
    #[must_use]
    pub const fn name(visible_chars: usize) -> Self {
        Self::Name { visible_chars }
    }

    /// Email rule from a signed count, rejecting negative values.
    pub fn try_email(visible_chars: i64) -> Result<Self, MaskingError> {
        checked_visible_chars("Email", visible_chars).map(Self::email)
    }

    /// Name rule from a signed count, rejecting negative values.
    pub fn try_name(visible_chars: i64) -> Result<Self, MaskingError> {
        checked_visible_chars("Name", visible_chars).map(Self::name)
    }

    /// Identifying tag of the rule, e.g. `"Email"`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Email { .. } => "Email",
            Self::Phone => "Phone",
            Self::Name { .. } => "Name",
            Self::CreditCard => "CreditCard",
            Self::Passport => "Passport",
        }
    }

    /// The visible character count, for rules that have one.
    #[must_use]
    pub const fn visible_chars(&self) -> Option<usize> {
        match self {
            Self::Email { visible_chars } | Self::Name { visible_chars } => Some(*visible_chars),
            Self::Phone | Self::CreditCard | Self::Passport => None,
        }
    }

    /// Applies the rule to `value`.
    ///
    /// This method is total: empty input and input that does not match the
    /// rule's expected shape are returned unchanged.
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        if value.is_empty() {
            return String::new();
        }
        match *self {
            Self::Email { visible_chars } => text::email_local(value, visible_chars),
            Self::Phone => text::phone(value),
            Self::Name { visible_chars } => text::keep_prefix(value, visible_chars),
            Self::CreditCard => text::credit_card(value),
            Self::Passport => text::passport(value),
        }
    }
}

impl fmt::Display for MaskingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.visible_chars() {
            Some(visible_chars) => write!(f, "{}({visible_chars})", self.kind()),
            None => f.write_str(self.kind()),
        }
    }
}

fn checked_visible_chars(rule: &'static str, value: i64) -> Result<usize, MaskingError> {
    if value < 0 {
        return Err(MaskingError::NegativeVisibleChars { rule, value });
    }
    Ok(usize::try_from(value).unwrap_or(usize::MAX))
}

// =============================================================================
// Tests
// =============================================================================
