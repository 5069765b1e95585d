//! Coercion of raw form text into numbers and booleans.
//!
//! Malformed numbers are not rejected: they become NaN and are forwarded to
//! the backend as-is (`NaN` in URLs, `null` in JSON bodies).

use serde::{Serialize, Serializer};
use std::fmt;

/// Largest integer an f64 represents exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A number read from a form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormNumber(f64);

impl FormNumber {
    pub const NAN: FormNumber = FormNumber(f64::NAN);

    /// Coerces a raw field value. Absent or non-numeric text yields NaN;
    /// blank text is zero.
    pub fn coerce(raw: Option<&str>) -> Self {
        raw.and_then(parse_number)
            .map(FormNumber)
            .unwrap_or(Self::NAN)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// The value as an integer, when it is finite and has no fractional part.
    pub fn as_integer(self) -> Option<i64> {
        if self.0.is_finite() && self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INTEGER {
            Some(self.0 as i64)
        } else {
            None
        }
    }
}

impl From<f64> for FormNumber {
    fn from(value: f64) -> Self {
        FormNumber(value)
    }
}

impl From<i64> for FormNumber {
    fn from(value: i64) -> Self {
        FormNumber(value as f64)
    }
}

impl fmt::Display for FormNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            f.write_str("NaN")
        } else if value.is_infinite() {
            f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
        } else if let Some(integer) = self.as_integer() {
            write!(f, "{}", integer)
        } else {
            write!(f, "{}", value)
        }
    }
}

impl Serialize for FormNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.0.is_finite() {
            serializer.serialize_none()
        } else if let Some(integer) = self.as_integer() {
            serializer.serialize_i64(integer)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// Only the exact value `"true"` is true.
pub fn coerce_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

fn parse_number(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|v| v as f64);
        }
    }

    // f64::from_str also takes "inf" and "nan" spellings, which are not numbers here.
    if !text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }
    text.parse::<f64>().ok()
}
