//! Canonical rendering of decimal values for summary payloads.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};

/// Renders a decimal as a string with exactly two fractional digits.
///
/// Ties round away from zero (2.505 becomes "2.51"), not to even.
pub fn money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// A composite value whose decimal leaves still carry full precision.
///
/// Summary documents are built as `DecimalValue` trees so every intermediate
/// sum stays exact; [`stringify`] performs the only rounding step when the
/// tree is rendered to JSON.
#[derive(Debug, Clone)]
pub enum DecimalValue {
    Map(BTreeMap<String, DecimalValue>),
    List(Vec<DecimalValue>),
    Number(Decimal),
    Other(serde_json::Value),
}

impl From<Decimal> for DecimalValue {
    fn from(value: Decimal) -> Self {
        DecimalValue::Number(value)
    }
}

/// Recursively replaces every decimal leaf with its two-decimal string.
///
/// Maps and lists are traversed structurally; any non-decimal leaf passes
/// through unchanged.
pub fn stringify(value: DecimalValue) -> serde_json::Value {
    match value {
        DecimalValue::Map(map) => serde_json::Value::Object(
            map.into_iter().map(|(k, v)| (k, stringify(v))).collect(),
        ),
        DecimalValue::List(items) => {
            serde_json::Value::Array(items.into_iter().map(stringify).collect())
        }
        DecimalValue::Number(decimal) => serde_json::Value::String(money(decimal)),
        DecimalValue::Other(other) => other,
    }
}
