//! Declaration-driven masking for structured data.
//!
//! This crate separates:
//! - **Masking rules**: how one string value is masked (e.g., `Email`, `Phone`).
//! - **Declarations**: which fields of a type carry which rule, written as
//!   `#[mask(...)]` attributes and collected by `#[derive(Maskable)]`.
//!
//! The [`Masker`] engine copies a value, looks up the cached descriptor for its
//! type, and applies each field's rule to the copy. The original value is never
//! modified.
//!
//! What this crate does:
//! - defines the masking rules and the string-level facade (`mask_email`, ...)
//! - caches per-type descriptors and field accessors in a [`DescriptorRegistry`]
//! - masks single values and batches, sequentially or across worker threads
//! - provides logging integrations (`tracing`, and `slog` behind a feature flag)
//!
//! What it does not do:
//! - traverse nested structures (only top-level string fields are masked)
//! - mask non-string values
//!
//! The `Maskable` derive macro lives in `maskable-derive` and is re-exported
//! from this crate.
//!
//! # Example
//!
//! ```rust
//! use maskable::{Maskable, Masker};
//!
//! #[derive(Clone, Maskable)]
//! struct Customer {
//!     id: u32,
//!     #[mask(name)]
//!     name: String,
//!     #[mask(email)]
//!     email: String,
//!     address: String,
//! }
//!
//! let masker = Masker::new();
//! let customer = Customer {
//!     id: 7,
//!     name: "Hong Gildong".into(),
//!     email: "honggildong@example.com".into(),
//!     address: "Seoul".into(),
//! };
//!
//! let masked = masker.mask(&customer);
//! assert_eq!(masked.name, "H***********");
//! assert_eq!(masked.email, "ho*********@example.com");
//! assert_eq!(masked.address, "Seoul");
//! assert_eq!(customer.name, "Hong Gildong");
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use maskable_derive::Maskable;

#[allow(unused_extern_crates)]
extern crate self as maskable;

// Module declarations
mod error;
pub mod facade;
mod masking;
pub mod policy;
#[cfg(feature = "slog")]
pub mod slog;
pub mod tracing;

pub use error::MaskingError;
// Re-exports from facade module
pub use facade::{
    DEFAULT_EMAIL_VISIBLE_CHARS, DEFAULT_NAME_VISIBLE_CHARS, DefaultMaskingProvider,
    MaskStrExt, MaskingProvider, MaskingService, mask_credit_card, mask_email, mask_name,
    mask_passport, mask_phone, mask_with_rule,
};
// Re-exports from masking module
#[cfg(feature = "json")]
pub use masking::{MaskedJson, MaskedJsonExt};
pub use masking::{
    DEFAULT_PARALLEL_THRESHOLD, DescriptorRegistry, FieldAccessor, FieldDescriptor, Maskable,
    MaskableExt, MaskableField, Masked, Masker, MaskerBuilder, MaskerConfig, TypeDescriptor,
};
// Re-exports from policy module
pub use policy::{MASK_CHAR, MaskingRule};
