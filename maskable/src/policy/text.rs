//! Text transformations for string values.
//!
//! Every function here is total: input that does not have the expected shape is
//! returned unchanged. Lengths are counted in Unicode scalar values.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Character used to mask hidden characters.
pub const MASK_CHAR: char = '*';

static PHONE: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^([0-9]{3})-([0-9]{4})-([0-9]{4})$"));

static PASSPORT: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^([A-Z][0-9])([0-9]{6})([0-9])$"));

static PASSPORT_FLEXIBLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^([A-Z]{1,2}[0-9]{1,2})([0-9]{4,6})([0-9]{1,2})$"));

// A pattern that fails to compile disables its rule instead of panicking.
fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(err) => {
            tracing::error!(pattern, error = %err, "masking pattern failed to compile");
            None
        }
    }
}

fn group<'h>(captures: &Captures<'h>, index: usize) -> &'h str {
    captures.get(index).map_or("", |m| m.as_str())
}

fn mask_run(count: usize) -> String {
    std::iter::repeat_n(MASK_CHAR, count).collect()
}

/// Keeps the first `visible` characters and masks the rest.
///
/// Values of `visible` characters or fewer are returned unchanged.
pub(crate) fn keep_prefix(value: &str, visible: usize) -> String {
    let total = value.chars().count();
    if total <= visible {
        return value.to_string();
    }

    let mut masked: String = value.chars().take(visible).collect();
    masked.push_str(&mask_run(total - visible));
    masked
}

/// Masks the local part of `local@domain`, keeping `visible` leading characters.
pub(crate) fn email_local(value: &str, visible: usize) -> String {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return value.to_string();
    };

    if local.trim().is_empty() || domain.trim().is_empty() {
        return value.to_string();
    }
    if local.chars().count() <= visible {
        return value.to_string();
    }

    format!("{}@{domain}", keep_prefix(local, visible))
}

/// Masks the middle group of a `DDD-DDDD-DDDD` phone number.
pub(crate) fn phone(value: &str) -> String {
    let Some(pattern) = PHONE.as_ref() else {
        return value.to_string();
    };
    match pattern.captures(value) {
        Some(captures) => format!(
            "{}-{}-{}",
            group(&captures, 1),
            mask_run(4),
            group(&captures, 3)
        ),
        None => value.to_string(),
    }
}

/// Masks a 16-digit card as `AAAA-BBBB-****-DDDD` and a 15-digit card as
/// `AAAA-BBBBBB-*****-DDDD`.
///
/// Dashes and spaces are ignored when counting digits.
pub(crate) fn credit_card(value: &str) -> String {
    let digits: String = value.chars().filter(|ch| !matches!(ch, '-' | ' ')).collect();
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return value.to_string();
    }

    // All ASCII from here on, so byte slicing is on character boundaries.
    match digits.len() {
        16 => format!(
            "{}-{}-{}-{}",
            &digits[..4],
            &digits[4..8],
            mask_run(4),
            &digits[12..]
        ),
        15 => format!(
            "{}-{}-{}-{}",
            &digits[..4],
            &digits[4..10],
            mask_run(5),
            &digits[11..]
        ),
        _ => value.to_string(),
    }
}

/// Masks the digits between the prefix and the check digit of a passport number.
///
/// The primary shape is `M12345678`; a wider shape (`AB1234567`) is tried next
/// and only its middle group is masked.
pub(crate) fn passport(value: &str) -> String {
    if let Some(captures) = PASSPORT.as_ref().and_then(|p| p.captures(value)) {
        return format!(
            "{}{}{}",
            group(&captures, 1),
            mask_run(6),
            group(&captures, 3)
        );
    }

    if let Some(captures) = PASSPORT_FLEXIBLE.as_ref().and_then(|p| p.captures(value)) {
        let middle = group(&captures, 2);
        return format!(
            "{}{}{}",
            group(&captures, 1),
            mask_run(middle.len()),
            group(&captures, 3)
        );
    }

    value.to_string()
}
