//! Results of masking.
//!
//! - [`Masked`]: The value returned by [`Masker::mask`](crate::Masker::mask)
//! - [`MaskedJson`]: A masked value serialized to JSON (`json` feature)

use std::ops::Deref;

#[cfg(feature = "json")]
use serde::Serialize;
#[cfg(feature = "json")]
use serde_json::Value as JsonValue;

#[cfg(feature = "json")]
use super::{engine::Masker, traits::Maskable};

// =============================================================================
// Masked - Result of masking one value
// =============================================================================

/// The outcome of masking one value.
///
/// Masking fails open: when the value cannot be copied, the engine hands back
/// the original, **unmasked** value as [`Masked::Original`] rather than
/// failing the call. Callers that must never emit unmasked data should check
/// [`Masked::is_redacted`].
#[derive(Debug)]
pub enum Masked<'a, T> {
    /// A masked copy of the input.
    Redacted(T),
    /// The input itself, returned because it could not be copied.
    Original(&'a T),
}

impl<'a, T> Masked<'a, T> {
    /// Whether masking was applied.
    pub const fn is_redacted(&self) -> bool {
        matches!(self, Self::Redacted(_))
    }

    /// The masked copy, or `None` if the original was returned.
    pub fn into_redacted(self) -> Option<T> {
        match self {
            Self::Redacted(value) => Some(value),
            Self::Original(_) => None,
        }
    }

    /// Converts into an owned value, cloning the original if necessary.
    pub fn into_owned(self) -> T
    where
        T: Clone,
    {
        match self {
            Self::Redacted(value) => value,
            Self::Original(original) => original.clone(),
        }
    }
}

impl<T> Deref for Masked<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Self::Redacted(value) => value,
            Self::Original(original) => original,
        }
    }
}

impl<T> AsRef<T> for Masked<'_, T> {
    fn as_ref(&self) -> &T {
        self
    }
}

// =============================================================================
// MaskedJson - Masked value as structured JSON
// =============================================================================

/// A masked value converted to `serde_json::Value`.
#[cfg(feature = "json")]
#[derive(Clone, Debug, PartialEq)]
pub struct MaskedJson(JsonValue);

#[cfg(feature = "json")]
impl MaskedJson {
    /// Wraps an already-masked JSON value.
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// The JSON value.
    pub fn value(&self) -> &JsonValue {
        &self.0
    }

    pub fn into_value(self) -> JsonValue {
        self.0
    }
}

/// Extension trait producing the JSON form of a masked value.
#[cfg(feature = "json")]
pub trait MaskedJsonExt: Maskable + Serialize {
    /// Masks `self` with `masker` and serializes the result.
    ///
    /// If serialization fails, the returned value holds a JSON string with the
    /// message `"Failed to serialize masked value"`. A value that cannot be
    /// copied is replaced by an `"<unmasked ...>"` placeholder string.
    fn masked_json(&self, masker: &Masker) -> MaskedJson {
        let masked = masker.mask(self);
        if !masked.is_redacted() {
            return MaskedJson::new(JsonValue::String(format!(
                "<unmasked {}>",
                std::any::type_name::<Self>()
            )));
        }
        let json = serde_json::to_value(&*masked).unwrap_or_else(|err| {
            JsonValue::String(format!("Failed to serialize masked value: {err}"))
        });
        MaskedJson::new(json)
    }
}

#[cfg(feature = "json")]
impl<T> MaskedJsonExt for T where T: Maskable + Serialize {}
