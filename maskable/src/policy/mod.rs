//! Masking rules and the text transformations behind them.
//!
//! This module provides:
//!
//! - **Rules** (`rules`): the [`MaskingRule`] enum naming each policy and its
//!   parameters, with [`MaskingRule::apply_to`] as the single entrypoint.
//!
//! - **Text** (`text`): the pure string transformations each rule delegates to.
//!
//! # Example
//!
//! ```rust
//! use maskable::MaskingRule;
//!
//! assert_eq!(MaskingRule::Phone.apply_to("010-1234-5678"), "010-****-5678");
//! assert_eq!(MaskingRule::name(1).apply_to("홍길동"), "홍**");
//!
//! // Input that does not look like the rule's shape passes through unchanged.
//! assert_eq!(MaskingRule::CreditCard.apply_to("12345"), "12345");
//! ```

pub mod rules;
pub(crate) mod text;

pub use rules::MaskingRule;
pub use text::MASK_CHAR;
