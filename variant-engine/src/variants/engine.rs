//! Variant Matrix Engine
//!
//! Entry point bundling the pure steps with one [`EngineConfig`]:
//! options → combinations → sync → (explicit) SKU propagation → stock rollup.

use super::combination::{combination_count, generate_combinations};
use super::sku::{self, UniqueSuffix};
use super::stock::{aggregate_stock, rollup};
use super::sync::{broadcast_base_price, sync_variants_with_stats};
use crate::config::EngineConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::AppResult;
use shared::models::{Combination, ProductDraft, ProductOption, Variant, VariantKey, VariantOption};
use std::collections::HashSet;

/// Lifecycle state of a product draft's variant matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantState {
    /// Feature disabled, or no option has values
    NoVariants,
    /// Options have values but the variant list has not converged yet
    VariantsEnabled,
    /// Variant keys match the option matrix and stock is rolled up
    Stable,
}

/// Variant matrix engine
///
/// Stateless apart from its configuration: every method reads a snapshot
/// and returns a new value.
#[derive(Debug, Clone, Default)]
pub struct VariantEngine {
    config: EngineConfig,
}

impl VariantEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn generate_combinations(&self, options: &[ProductOption]) -> Vec<Combination> {
        generate_combinations(options)
    }

    pub fn sync_variants(
        &self,
        combinations: &[Combination],
        existing: &[Variant],
        base_sku: &str,
        base_price: Decimal,
    ) -> Vec<Variant> {
        sync_variants_with_stats(combinations, existing, base_sku, base_price, &self.config).0
    }

    pub fn derive_suffix(&self, options: &[VariantOption]) -> String {
        sku::derive_suffix(options, &self.config)
    }

    pub fn propagate_base_sku(&self, base_sku: &str, variants: &[Variant]) -> Vec<Variant> {
        sku::propagate_base_sku(base_sku, variants, &self.config)
    }

    pub fn suggest_base_sku(
        &self,
        product_name: &str,
        current_sku: &str,
        force_unique: bool,
        suffix: &mut impl UniqueSuffix,
    ) -> AppResult<Option<String>> {
        sku::generate_base_sku(product_name, current_sku, force_unique, &self.config, suffix)
    }

    pub fn aggregate_stock(&self, variants: &[Variant]) -> i64 {
        aggregate_stock(variants)
    }

    pub fn broadcast_base_price(&self, base_price: Decimal, variants: &[Variant]) -> Vec<Variant> {
        broadcast_base_price(base_price, variants)
    }

    /// Recompute the variant list and stock of a draft
    ///
    /// With the feature disabled the variant list is cleared. Stock is only
    /// overwritten while variants exist.
    pub fn regenerate(&self, draft: &ProductDraft) -> ProductDraft {
        let mut next = draft.clone();
        if !draft.has_variants {
            next.variants.clear();
            return next;
        }

        let combinations = generate_combinations(&draft.options);
        let (variants, stats) = sync_variants_with_stats(
            &combinations,
            &draft.variants,
            &draft.sku,
            draft.price,
            &self.config,
        );
        next.variants = variants;
        if let Some(stock) = rollup(&next.variants) {
            next.stock = stock;
        }

        tracing::debug!(
            product = %draft.name,
            variants = next.variants.len(),
            created = stats.created,
            dropped = stats.dropped,
            stock = next.stock,
            "Variant matrix regenerated"
        );
        next
    }

    /// Classify a draft against the invariants of its option matrix
    pub fn state(&self, draft: &ProductDraft) -> VariantState {
        if !draft.has_variants || combination_count(&draft.options) == 0 {
            return VariantState::NoVariants;
        }

        let expected: HashSet<VariantKey> = generate_combinations(&draft.options)
            .iter()
            .map(|c| VariantKey::from_options(c))
            .collect();
        let actual: HashSet<VariantKey> = draft.variants.iter().map(Variant::key).collect();

        let keys_match = actual.len() == draft.variants.len() && expected == actual;
        if keys_match && draft.stock == aggregate_stock(&draft.variants) {
            VariantState::Stable
        } else {
            VariantState::VariantsEnabled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::OptionName;

    fn draft() -> ProductDraft {
        let mut draft = ProductDraft::new("T-Shirt", Decimal::new(120000, 0)).with_sku("TSHIRT");
        draft.has_variants = true;
        draft.options = vec![
            ProductOption::with_values(OptionName::Color, ["Red", "Blue"]),
            ProductOption::with_values(OptionName::Size, ["S", "M"]),
        ];
        draft
    }

    #[test]
    fn test_regenerate_builds_matrix_and_rolls_up() {
        let engine = VariantEngine::default();
        let mut start = draft();
        start.stock = 99;
        let next = engine.regenerate(&start);
        assert_eq!(next.variants.len(), 4);
        assert_eq!(next.stock, 0);
        assert_eq!(engine.state(&next), VariantState::Stable);
    }

    #[test]
    fn test_regenerate_is_idempotent() {
        let engine = VariantEngine::default();
        let once = engine.regenerate(&draft());
        let twice = engine.regenerate(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_regenerate_disabled_clears_variants_keeps_stock() {
        let engine = VariantEngine::default();
        let mut enabled = engine.regenerate(&draft());
        enabled.variants[0].stock = 6;
        enabled.stock = 6;

        let mut disabled = enabled.clone();
        disabled.has_variants = false;
        let next = engine.regenerate(&disabled);
        assert!(next.variants.is_empty());
        assert_eq!(next.stock, 6);
        assert_eq!(engine.state(&next), VariantState::NoVariants);
    }

    #[test]
    fn test_state_detects_stale_matrix() {
        let engine = VariantEngine::default();
        let mut stable = engine.regenerate(&draft());
        stable.options[1].values.push("L".into());
        assert_eq!(engine.state(&stable), VariantState::VariantsEnabled);

        let converged = engine.regenerate(&stable);
        assert_eq!(engine.state(&converged), VariantState::Stable);
    }

    #[test]
    fn test_state_no_values() {
        let engine = VariantEngine::default();
        let mut empty = ProductDraft::new("Mug", Decimal::ZERO);
        empty.has_variants = true;
        assert_eq!(engine.state(&empty), VariantState::NoVariants);
    }

    #[test]
    fn test_values_with_separator_characters_keep_their_identity() {
        let engine = VariantEngine::default();
        let mut start = draft();
        start.options = vec![
            ProductOption::with_values(OptionName::Color, ["a|Size=b", "a"]),
            ProductOption::with_values(OptionName::Size, ["c", "b|Size=c"]),
        ];
        let mut once = engine.regenerate(&start);
        assert_eq!(once.variants[0].name, "a|Size=b / c");
        once.variants[0].stock = 5;
        once.stock = 5;

        let twice = engine.regenerate(&once);
        let stocks: Vec<(&str, i64)> = twice
            .variants
            .iter()
            .map(|v| (v.name.as_str(), v.stock))
            .collect();
        assert_eq!(
            stocks,
            vec![
                ("a|Size=b / c", 5),
                ("a|Size=b / b|Size=c", 0),
                ("a / c", 0),
                ("a / b|Size=c", 0),
            ]
        );
        assert_eq!(twice.stock, 5);
        assert_eq!(engine.state(&twice), VariantState::Stable);
    }

    #[test]
    fn test_engine_uses_configured_separators() {
        let engine = VariantEngine::new(EngineConfig {
            name_separator: " - ".into(),
            sku_separator: "_".into(),
            ..EngineConfig::default()
        });
        let next = engine.regenerate(&draft());
        assert_eq!(next.variants[0].name, "Red - S");
        assert_eq!(next.variants[0].sku, "TSHIRT_RED_S");
    }
}
