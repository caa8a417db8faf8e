//! Stock Aggregator

use shared::models::Variant;

/// Sum of variant stock; negative entries count as 0
///
/// Callers only write the result into the product when `variants` is
/// non-empty, otherwise base stock stays independently editable.
pub fn aggregate_stock(variants: &[Variant]) -> i64 {
    variants
        .iter()
        .map(|v| v.stock.max(0))
        .fold(0i64, |acc, s| acc.saturating_add(s))
}

/// Product stock after a variant list change
///
/// `None` when there are no variants and the current base stock stands.
pub fn rollup(variants: &[Variant]) -> Option<i64> {
    if variants.is_empty() {
        None
    } else {
        Some(aggregate_stock(variants))
    }
}
