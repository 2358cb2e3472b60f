//! Hex-or-int coercion for memory region base addresses.
//!
//! Addresses may be written in the config file either as `"0x…"` strings or
//! as plain JSON integers. Coercion is total: every input produces an
//! address, falling back to the compiled-in default with a warning.

use serde_json::Value;

use super::error::ConfigWarning;

/// Parse a `0x`-prefixed hexadecimal string.
///
/// Surrounding whitespace is ignored and single `_` separators are allowed
/// between digits or directly after the prefix (`"0x1_0"`, `"0x_ff"`).
/// Returns `None` when the prefix is missing, the digits are empty or not
/// hexadecimal, a separator is doubled or trailing, or the value does not
/// fit in 64 bits.
pub fn parse_hex(s: &str) -> Option<u64> {
    let body = s.trim().strip_prefix("0x")?;
    let body = body.strip_prefix('_').unwrap_or(body);
    if body.is_empty() || body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return None;
    }
    if !body.bytes().all(|b| b.is_ascii_hexdigit() || b == b'_') {
        return None;
    }

    let digits: String = body.chars().filter(|c| *c != '_').collect();
    u64::from_str_radix(&digits, 16).ok()
}

/// Coerce a raw JSON value into an address.
///
/// - `"0x…"` strings are parsed as base 16.
/// - Non-negative integers pass through unchanged.
/// - An absent value yields `default` with `AddressAbsent`.
/// - Anything else (null, other types, negative or fractional numbers,
///   strings without the prefix) yields `default`.
///
/// The returned warning is `Some` exactly when `default` was used.
pub fn coerce_address(
    field: &str,
    value: Option<&Value>,
    default: u64,
) -> (u64, Option<ConfigWarning>) {
    if let Some(Value::Number(n)) = value
        && let Some(address) = n.as_u64()
    {
        return (address, None);
    }

    match value {
        None => (
            default,
            Some(ConfigWarning::AddressAbsent {
                field: field.to_string(),
                default,
            }),
        ),
        Some(Value::String(s)) if s.starts_with("0x") => match parse_hex(s) {
            Some(address) => (address, None),
            None => (
                default,
                Some(ConfigWarning::MalformedAddress {
                    field: field.to_string(),
                    value: s.clone(),
                    default,
                }),
            ),
        },
        Some(other) => (
            default,
            Some(ConfigWarning::UnexpectedAddressType {
                field: field.to_string(),
                value: other.to_string(),
                default,
            }),
        ),
    }
}
