//! Variant Model

use super::option::{OptionName, VariantOption};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Purchasable SKU-level entity, one per reachable combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Display label, e.g. "Red / M" (always derived from `options`)
    pub name: String,
    /// Combination that generated this variant; its identity key
    pub options: Vec<VariantOption>,
    pub price: Decimal,
    /// Missing, negative or non-numeric stock reads as 0
    #[serde(default, deserialize_with = "deserialize_lenient_stock")]
    pub stock: i64,
    #[serde(default)]
    pub sku: String,
}

impl Variant {
    /// Structural identity key of this variant
    pub fn key(&self) -> VariantKey {
        VariantKey::from_options(&self.options)
    }

}

/// Partial hand edit of a single variant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantPatch {
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
    pub sku: Option<String>,
}

/// Canonical, order-independent identity of a variant
///
/// The `{name, value}` pairs sorted by option name, so `[Size=M, Color=Red]`
/// and `[Color=Red, Size=M]` compare equal. Values are compared verbatim,
/// any text is allowed in them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantKey(Vec<(OptionName, String)>);

impl VariantKey {
    pub fn from_options(options: &[VariantOption]) -> Self {
        let mut pairs: Vec<(OptionName, String)> = options
            .iter()
            .map(|o| (o.name, o.value.clone()))
            .collect();
        pairs.sort();
        Self(pairs)
    }

    pub fn pairs(&self) -> &[(OptionName, String)] {
        &self.0
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={:?}", name, value)?;
        }
        Ok(())
    }
}

/// Accepts integers, floats (truncated), numeric strings; anything else is 0.
/// Negative stock is stored as 0.
fn deserialize_lenient_stock<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let stock = match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    };
    Ok(stock.max(0))
}
