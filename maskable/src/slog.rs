//! Adapters for emitting masked values through `slog`.
//!
//! [`MaskedJson`] implements `slog::Value` by handing its JSON to `slog`'s
//! nested-value support, so drains that understand nested values receive the
//! masked structure rather than a flat string.
//!
//! Serialization failures are represented as placeholder strings rather than
//! propagated as errors.

use serde::Serialize;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::masking::{Maskable, MaskedJson, MaskedJsonExt, Masker};

/// Marker trait for `slog::Value` types that only ever emit masked output.
///
/// ```compile_fail
/// use maskable::slog::SlogMasked;
///
/// fn assert_slog_masked<T: SlogMasked>() {}
///
/// assert_slog_masked::<String>();
/// ```
pub trait SlogMasked: SlogValue {}

impl<T: SlogMasked + ?Sized> SlogMasked for &T {}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value().clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogMasked for MaskedJson {}

/// Extension trait for logging masked values through `slog` as JSON.
///
/// ## Example
/// ```ignore
/// use maskable::slog::SlogMaskedExt;
///
/// info!(logger, "booking"; "customer" => customer.slog_masked_json(&masker));
/// ```
pub trait SlogMaskedExt: Maskable + Serialize {
    /// Masks `self` and returns a `slog::Value` that serializes as structured JSON.
    ///
    /// A value that cannot be copied is logged as a placeholder string, never
    /// in its unmasked form.
    fn slog_masked_json(&self, masker: &Masker) -> MaskedJson {
        self.masked_json(masker)
    }
}

impl<T> SlogMaskedExt for T where T: Maskable + Serialize {}
