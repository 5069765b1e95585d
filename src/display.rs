//! Display sink: writes results into output regions.

use serde_json::Value;
use tracing::warn;

use crate::page::Document;

/// Writes `data` into the region `target_id`.
///
/// Strings are written verbatim; anything else is pretty-printed JSON with
/// sorted keys and two-space indentation. A missing region is ignored.
pub fn show(document: &dyn Document, target_id: &str, data: impl Into<Value>) {
    let text = render(&data.into());
    if !document.set_text_content(target_id, &text) {
        warn!("Output region #{} not found, dropping result", target_id);
    }
}

/// Largest integer an f64 represents exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Text that [`show`] writes for `data`.
pub fn render(data: &Value) -> String {
    match data {
        Value::String(text) => text.clone(),
        other => {
            let other = integral_floats_as_integers(other.clone());
            serde_json::to_string_pretty(&other).unwrap_or_else(|_| other.to_string())
        }
    }
}

/// Rewrites floats with no fractional part (`1.0`) as integers (`1`).
fn integral_floats_as_integers(value: Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER => Value::from(f as i64),
            _ => Value::Number(n),
        },
        Value::Array(items) => items.into_iter().map(integral_floats_as_integers).collect(),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, integral_floats_as_integers(v)))
                .collect(),
        ),
        other => other,
    }
}
