//! String-level masking.
//!
//! Each rule is available as a free function on a raw `&str`, through the
//! [`MaskStrExt`] extension trait, and through a [`MaskingService`] whose
//! behavior can be swapped by injecting a custom [`MaskingProvider`].
//!
//! ```
//! use maskable::{MaskStrExt, mask_phone};
//!
//! assert_eq!(mask_phone("010-1234-5678"), "010-****-5678");
//! assert_eq!("홍길동".mask_name(1), "홍**");
//! ```

use std::{fmt, sync::Arc};

use crate::{error::MaskingError, policy::MaskingRule};

/// Visible characters kept by `#[mask(email)]`.
pub const DEFAULT_EMAIL_VISIBLE_CHARS: usize = 2;

/// Visible characters kept by `#[mask(name)]`.
pub const DEFAULT_NAME_VISIBLE_CHARS: usize = 1;

// =============================================================================
// Free functions
// =============================================================================

/// Masks the local part of an email address.
#[must_use]
pub fn mask_email(value: &str, visible_chars: usize) -> String {
    MaskingRule::email(visible_chars).apply_to(value)
}

/// Masks the middle group of a `DDD-DDDD-DDDD` phone number.
#[must_use]
pub fn mask_phone(value: &str) -> String {
    MaskingRule::Phone.apply_to(value)
}

/// Keeps the first `visible_chars` characters of a name.
#[must_use]
pub fn mask_name(value: &str, visible_chars: usize) -> String {
    MaskingRule::name(visible_chars).apply_to(value)
}

/// Masks the third digit group of a 15 or 16 digit card number.
#[must_use]
pub fn mask_credit_card(value: &str) -> String {
    MaskingRule::CreditCard.apply_to(value)
}

/// Masks the digits between the prefix and check digit of a passport number.
#[must_use]
pub fn mask_passport(value: &str) -> String {
    MaskingRule::Passport.apply_to(value)
}

/// Applies `rule` to `value`.
///
/// # Errors
///
/// Returns [`MaskingError::MissingRule`] when `rule` is `None`.
pub fn mask_with_rule(value: &str, rule: Option<&MaskingRule>) -> Result<String, MaskingError> {
    rule.map(|rule| rule.apply_to(value))
        .ok_or(MaskingError::MissingRule)
}

// =============================================================================
// MaskingProvider - Pluggable string masking
// =============================================================================

/// String masking operations.
///
/// Every method has a default that delegates to the stock rules, so an
/// implementation only overrides what it wants to change.
pub trait MaskingProvider: Send + Sync {
    /// Masks the local part of an email address.
    fn mask_email(&self, value: &str, visible_chars: usize) -> String {
        mask_email(value, visible_chars)
    }

    /// Masks the middle group of a phone number.
    fn mask_phone_number(&self, value: &str) -> String {
        mask_phone(value)
    }

    /// Keeps the first `visible_chars` characters of a name.
    fn mask_name(&self, value: &str, visible_chars: usize) -> String {
        mask_name(value, visible_chars)
    }

    /// Masks the third digit group of a card number.
    fn mask_credit_card(&self, value: &str) -> String {
        mask_credit_card(value)
    }

    /// Masks the middle digits of a passport number.
    fn mask_passport(&self, value: &str) -> String {
        mask_passport(value)
    }

    /// Dispatches on `rule` to the matching method of this provider.
    ///
    /// # Errors
    ///
    /// Returns [`MaskingError::MissingRule`] when `rule` is `None`.
    fn mask_with_rule(&self, value: &str, rule: Option<&MaskingRule>) -> Result<String, MaskingError> {
        let rule = rule.ok_or(MaskingError::MissingRule)?;
        Ok(match *rule {
            MaskingRule::Email { visible_chars } => self.mask_email(value, visible_chars),
            MaskingRule::Phone => self.mask_phone_number(value),
            MaskingRule::Name { visible_chars } => self.mask_name(value, visible_chars),
            MaskingRule::CreditCard => self.mask_credit_card(value),
            MaskingRule::Passport => self.mask_passport(value),
        })
    }
}

/// The stock provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultMaskingProvider;

impl MaskingProvider for DefaultMaskingProvider {}

// =============================================================================
// MaskingService - Provider-backed entry point
// =============================================================================

/// Entry point for string masking backed by a [`MaskingProvider`].
#[derive(Clone)]
pub struct MaskingService {
    provider: Arc<dyn MaskingProvider>,
}

impl MaskingService {
    /// Creates a service using [`DefaultMaskingProvider`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_provider(Arc::new(DefaultMaskingProvider))
    }

    /// Creates a service backed by `provider`.
    #[must_use]
    pub fn with_provider(provider: Arc<dyn MaskingProvider>) -> Self {
        Self { provider }
    }

    /// Masks an email address with the configured provider.
    pub fn mask_email(&self, value: &str, visible_chars: usize) -> String {
        self.provider.mask_email(value, visible_chars)
    }

    /// Masks a phone number with the configured provider.
    pub fn mask_phone_number(&self, value: &str) -> String {
        self.provider.mask_phone_number(value)
    }

    /// Masks a name with the configured provider.
    pub fn mask_name(&self, value: &str, visible_chars: usize) -> String {
        self.provider.mask_name(value, visible_chars)
    }

    /// Masks a card number with the configured provider.
    pub fn mask_credit_card(&self, value: &str) -> String {
        self.provider.mask_credit_card(value)
    }

    /// Masks a passport number with the configured provider.
    pub fn mask_passport(&self, value: &str) -> String {
        self.provider.mask_passport(value)
    }

    /// Applies `rule` through the configured provider.
    ///
    /// # Errors
    ///
    /// Returns [`MaskingError::MissingRule`] when `rule` is `None`.
    pub fn mask_with_rule(
        &self,
        value: &str,
        rule: Option<&MaskingRule>,
    ) -> Result<String, MaskingError> {
        self.provider.mask_with_rule(value, rule)
    }
}

impl Default for MaskingService {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MaskingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskingService").finish_non_exhaustive()
    }
}

// =============================================================================
// MaskStrExt - Extension methods on str
// =============================================================================

/// Masking rules as methods on `str`.
pub trait MaskStrExt {
    /// See [`mask_email`].
    fn mask_email(&self, visible_chars: usize) -> String;
    /// See [`mask_phone`].
    fn mask_phone_number(&self) -> String;
    /// See [`mask_name`].
    fn mask_name(&self, visible_chars: usize) -> String;
    /// See [`mask_credit_card`].
    fn mask_credit_card(&self) -> String;
    /// See [`mask_passport`].
    fn mask_passport(&self) -> String;
    /// Applies an arbitrary rule.
    fn mask_with(&self, rule: MaskingRule) -> String;
}

impl MaskStrExt for str {
    fn mask_email(&self, visible_chars: usize) -> String {
        mask_email(self, visible_chars)
    }

    fn mask_phone_number(&self) -> String {
        mask_phone(self)
    }

    fn mask_name(&self, visible_chars: usize) -> String {
        mask_name(self, visible_chars)
    }

    fn mask_credit_card(&self) -> String {
        mask_credit_card(self)
    }

    fn mask_passport(&self) -> String {
        mask_passport(self)
    }

    fn mask_with(&self, rule: MaskingRule) -> String {
        rule.apply_to(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OneCharProvider;

    impl MaskingProvider for OneCharProvider {
        fn mask_email(&self, value: &str, _visible_chars: usize) -> String {
            mask_email(value, 1)
        }
    }

    #[test]
    fn free_functions_apply_their_rule() {
        assert_eq!(
            mask_email("honggildong@example.com", DEFAULT_EMAIL_VISIBLE_CHARS),
            "ho*********@example.com"
        );
        assert_eq!(mask_name("Hong", DEFAULT_NAME_VISIBLE_CHARS), "H***");
        assert_eq!(mask_credit_card("1234 5678 9012 3456"), "1234-5678-****-3456");
        assert_eq!(mask_passport("M12345678"), "M1******8");
    }

    #[test]
    fn mask_with_rule_requires_a_rule() {
        assert_eq!(mask_with_rule("abc", None), Err(MaskingError::MissingRule));
        assert_eq!(
            mask_with_rule("010-1234-5678", Some(&MaskingRule::Phone)),
            Ok("010-****-5678".to_string())
        );
    }

    #[test]
    fn service_uses_the_injected_provider() {
        let service = MaskingService::with_provider(Arc::new(OneCharProvider));
        assert_eq!(service.mask_email("test@example.com", 3), "t***@example.com");
        assert_eq!(
            service.mask_with_rule("test@example.com", Some(&MaskingRule::email(3))),
            Ok("t***@example.com".to_string())
        );
        // Methods the provider does not override keep the stock behavior.
        assert_eq!(service.mask_phone_number("010-1234-5678"), "010-****-5678");
    }

    #[test]
    fn default_service_matches_free_functions() {
        let service = MaskingService::default();
        assert_eq!(service.mask_name("홍길동", 1), mask_name("홍길동", 1));
        assert_eq!(service.mask_passport("AB1234567"), "AB12****7");
        assert_eq!(service.mask_credit_card("not a card"), "not a card");
    }

    #[test]
    fn str_extension_mirrors_free_functions() {
        assert_eq!("user@test.io".mask_email(2), "us**@test.io");
        assert_eq!("010-1234-5678".mask_phone_number(), "010-****-5678");
        assert_eq!("123456789012345".mask_credit_card(), "1234-567890-*****-2345");
        assert_eq!("Kim".mask_with(MaskingRule::name(1)), "K**");
        assert_eq!("".mask_passport(), "");
    }
}
