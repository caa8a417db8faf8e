//! SKU Propagator
//!
//! Suffix derivation from option values, explicit base SKU propagation,
//! and base SKU suggestion from the product name.

use super::normalize::{normalize, normalize_compact};
use crate::config::EngineConfig;
use shared::models::{OptionName, Variant, VariantOption};
use shared::{AppError, AppResult, ErrorCode};

/// Source of the collision-avoidance suffix for forced SKU generation
///
/// This is the only non-deterministic input of the engine. Closures
/// returning a `String` implement it, so tests can pin the value.
pub trait UniqueSuffix {
    fn next_suffix(&mut self) -> String;
}

impl<F> UniqueSuffix for F
where
    F: FnMut() -> String,
{
    fn next_suffix(&mut self) -> String {
        self()
    }
}

/// Random zero-padded numeric suffix
#[derive(Debug, Clone, Copy)]
pub struct RandomSuffix {
    pub digits: u32,
}

impl RandomSuffix {
    pub fn new(digits: u32) -> Self {
        Self { digits }
    }
}

impl UniqueSuffix for RandomSuffix {
    fn next_suffix(&mut self) -> String {
        shared::util::random_digits(self.digits)
    }
}

/// Derive the option-based SKU suffix of one combination
///
/// When every option is Color or Size the suffix is `COLOR-SIZE` in that
/// fixed order whatever the input order: the color fragment is truncated
/// to `fragment_len`, the size fragment is kept whole. Any other option
/// name switches to the generic form: every value truncated to
/// `fragment_len`, in option list order. Empty fragments are omitted.
pub fn derive_suffix(options: &[VariantOption], config: &EngineConfig) -> String {
    let only_color_size = options
        .iter()
        .all(|o| matches!(o.name, OptionName::Color | OptionName::Size));

    let fragments: Vec<String> = if only_color_size {
        let color = options
            .iter()
            .find(|o| o.name == OptionName::Color)
            .map(|o| normalize_compact(&o.value, Some(config.fragment_len)));
        let size = options
            .iter()
            .find(|o| o.name == OptionName::Size)
            .map(|o| normalize_compact(&o.value, None));
        [color, size].into_iter().flatten().collect()
    } else {
        options
            .iter()
            .map(|o| normalize_compact(&o.value, Some(config.fragment_len)))
            .collect()
    };

    fragments
        .into_iter()
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(&config.sku_separator)
}

/// Join base SKU and suffix, omitting the separator around an empty side
pub fn compose_sku(base_sku: &str, suffix: &str, separator: &str) -> String {
    let base = base_sku.trim();
    match (base.is_empty(), suffix.is_empty()) {
        (true, _) => suffix.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{base}{separator}{suffix}"),
    }
}

/// SKU a variant with these options gets under `base_sku`
pub fn variant_sku(base_sku: &str, options: &[VariantOption], config: &EngineConfig) -> String {
    compose_sku(
        base_sku,
        &derive_suffix(options, config),
        &config.sku_separator,
    )
}

/// Recompute every variant SKU from the base SKU
///
/// Overwrites hand-entered SKUs unconditionally, so it must only run on an
/// explicit user action. Idempotent for a fixed `base_sku`.
pub fn propagate_base_sku(
    base_sku: &str,
    variants: &[Variant],
    config: &EngineConfig,
) -> Vec<Variant> {
    variants
        .iter()
        .map(|variant| Variant {
            sku: variant_sku(base_sku, &variant.options, config),
            ..variant.clone()
        })
        .collect()
}

/// Base SKU derived from a product name, e.g. "Áo thun basic" → "AO-THUN-BASIC"
///
/// Declined with `ProductNameRequired` when the name normalizes to nothing.
pub fn suggest_base_sku(product_name: &str, config: &EngineConfig) -> AppResult<String> {
    let normalized = normalize(product_name, Some(config.base_sku_max_len));
    if normalized.is_empty() {
        return Err(AppError::new(ErrorCode::ProductNameRequired).with_detail("field", "name"));
    }
    Ok(normalized.replace(' ', &config.sku_separator))
}

/// Name-derived base SKU for the SKU field
///
/// - `force_unique == false` (blur away from the name field): fills an empty
///   field only; `Ok(None)` when the user already entered a base SKU.
/// - `force_unique == true` (explicit "generate"): always returns a fresh
///   value with a random numeric suffix appended.
pub fn generate_base_sku(
    product_name: &str,
    current_sku: &str,
    force_unique: bool,
    config: &EngineConfig,
    suffix: &mut impl UniqueSuffix,
) -> AppResult<Option<String>> {
    if !force_unique && !current_sku.trim().is_empty() {
        return Ok(None);
    }

    let base = suggest_base_sku(product_name, config)?;
    if force_unique {
        let unique = suffix.next_suffix();
        Ok(Some(compose_sku(&base, &unique, &config.sku_separator)))
    } else {
        Ok(Some(base))
    }
}
