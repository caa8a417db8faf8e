//! Variant Synchronizer
//!
//! Merges freshly generated combinations with the previous variant list.
//! Matching is structural (see [`VariantKey`]), never by display name.

use super::sku::variant_sku;
use crate::config::EngineConfig;
use rust_decimal::Decimal;
use shared::models::{Combination, Variant, VariantKey, VariantOption};
use std::collections::HashMap;

/// Counts of what a sync did, for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub kept: usize,
    pub created: usize,
    pub dropped: usize,
}

/// Display label of a combination, e.g. "Red / M"
pub fn variant_name(options: &[VariantOption], separator: &str) -> String {
    options
        .iter()
        .map(|o| o.value.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Rebuild the variant list for a new combination set
///
/// - matched variants keep price, stock and sku; only `name` is re-derived
/// - new combinations get `base_price`, stock 0 and a derived sku
/// - variants whose combination disappeared are dropped
///
/// Output follows combination order. An empty combination set yields an
/// empty list.
pub fn sync_variants(
    combinations: &[Combination],
    existing: &[Variant],
    base_sku: &str,
    base_price: Decimal,
    config: &EngineConfig,
) -> Vec<Variant> {
    sync_variants_with_stats(combinations, existing, base_sku, base_price, config).0
}

pub fn sync_variants_with_stats(
    combinations: &[Combination],
    existing: &[Variant],
    base_sku: &str,
    base_price: Decimal,
    config: &EngineConfig,
) -> (Vec<Variant>, SyncStats) {
    let lookup: HashMap<VariantKey, &Variant> = existing.iter().map(|v| (v.key(), v)).collect();

    let mut stats = SyncStats::default();
    let variants: Vec<Variant> = combinations
        .iter()
        .map(|combination| {
            let name = variant_name(combination, &config.name_separator);
            match lookup.get(&VariantKey::from_options(combination)) {
                Some(previous) => {
                    stats.kept += 1;
                    Variant {
                        name,
                        options: combination.clone(),
                        ..(*previous).clone()
                    }
                }
                None => {
                    stats.created += 1;
                    Variant {
                        name,
                        options: combination.clone(),
                        price: base_price,
                        stock: 0,
                        sku: variant_sku(base_sku, combination, config),
                    }
                }
            }
        })
        .collect();

    stats.dropped = lookup.len().saturating_sub(stats.kept);
    tracing::debug!(
        kept = stats.kept,
        created = stats.created,
        dropped = stats.dropped,
        "Variants synchronized"
    );

    (variants, stats)
}

/// Overwrite every variant price with the base price
///
/// Explicit user action; setting the base price alone only seeds new variants.
pub fn broadcast_base_price(base_price: Decimal, variants: &[Variant]) -> Vec<Variant> {
    variants
        .iter()
        .map(|v| Variant {
            price: base_price,
            ..v.clone()
        })
        .collect()
}
