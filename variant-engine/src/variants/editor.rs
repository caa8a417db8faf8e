//! Draft Editor
//!
//! One [`DraftEdit`] is one atomic step: the edit is applied to a copy of
//! the previous snapshot, the matrix is re-derived when the edit touches
//! options, and the next snapshot is returned. Nothing observes the
//! intermediate state.

use super::engine::VariantEngine;
use super::sku::UniqueSuffix;
use super::stock::rollup;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{OptionName, ProductDraft, VariantKey, VariantOption, VariantPatch};
use shared::{AppError, AppResult, ErrorCode};

/// User edit on a product draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DraftEdit {
    SetName { name: String },
    /// Replace an option's values; duplicates or blanks are rejected
    SetOptionValues {
        option: OptionName,
        values: Vec<String>,
    },
    /// Replace an option's values from comma-separated input
    ParseOptionValues {
        option: OptionName,
        text: String,
    },
    AddOptionValue {
        option: OptionName,
        value: String,
    },
    RemoveOptionValue {
        option: OptionName,
        value: String,
    },
    EnableVariants,
    DisableVariants,
    Regenerate,
    SetBaseSku { sku: String },
    /// Overwrite every variant SKU from the base SKU
    SyncSkus,
    SetBasePrice { price: Decimal },
    /// Overwrite every variant price with the base price
    BroadcastBasePrice,
    UpdateVariant {
        options: Vec<VariantOption>,
        patch: VariantPatch,
    },
    SetBaseStock { stock: i64 },
    /// Fill an empty base SKU from the product name
    SuggestSku,
    /// Regenerate the base SKU from the product name with a unique suffix
    GenerateSku,
}

/// Split comma-separated input into trimmed, non-empty, distinct values
///
/// First occurrence wins; order is preserved.
pub fn parse_option_values(text: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for raw in text.split(',') {
        let value = raw.trim();
        if !value.is_empty() && !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}

/// Trim and check a pre-split value list
fn validate_option_values(option: OptionName, values: &[String]) -> AppResult<Vec<String>> {
    let mut clean: Vec<String> = Vec::with_capacity(values.len());
    for raw in values {
        let value = raw.trim();
        if value.is_empty() {
            return Err(AppError::validation("Option values must not be empty")
                .with_detail("option", option.as_str()));
        }
        if clean.iter().any(|v| v == value) {
            return Err(AppError::new(ErrorCode::OptionValueDuplicate)
                .with_detail("option", option.as_str())
                .with_detail("value", value));
        }
        clean.push(value.to_string());
    }
    Ok(clean)
}

fn validate_price(price: Decimal) -> AppResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::new(ErrorCode::ProductInvalidPrice)
            .with_detail("price", price.to_string()));
    }
    Ok(())
}

fn validate_stock(stock: i64) -> AppResult<()> {
    if stock < 0 {
        return Err(AppError::out_of_range("stock", "Stock must not be negative"));
    }
    Ok(())
}

impl VariantEngine {
    /// Apply one edit to a draft snapshot and return the next snapshot
    ///
    /// Declined edits return an error and leave the caller's snapshot as
    /// the current state; the caller surfaces the warning.
    pub fn apply(
        &self,
        draft: &ProductDraft,
        edit: DraftEdit,
        suffix: &mut impl UniqueSuffix,
    ) -> AppResult<ProductDraft> {
        let result = self.apply_edit(draft, edit, suffix);
        if let Err(err) = &result {
            tracing::warn!(
                code = %err.code,
                category = err.code.category().name(),
                product = %draft.name,
                "Edit declined: {}",
                err.message
            );
        }
        result
    }

    fn apply_edit(
        &self,
        draft: &ProductDraft,
        edit: DraftEdit,
        suffix: &mut impl UniqueSuffix,
    ) -> AppResult<ProductDraft> {
        let mut next = draft.clone();
        match edit {
            DraftEdit::SetName { name } => {
                next.name = name;
                Ok(next)
            }
            DraftEdit::SetOptionValues { option, values } => {
                let values = validate_option_values(option, &values)?;
                next.option_mut(option)?.values = values;
                Ok(self.after_option_edit(next))
            }
            DraftEdit::ParseOptionValues { option, text } => {
                next.option_mut(option)?.values = parse_option_values(&text);
                Ok(self.after_option_edit(next))
            }
            DraftEdit::AddOptionValue { option, value } => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(AppError::validation("Option value must not be empty")
                        .with_detail("option", option.as_str()));
                }
                let slot = next.option_mut(option)?;
                if slot.values.iter().any(|v| v == value) {
                    return Err(AppError::new(ErrorCode::OptionValueDuplicate)
                        .with_detail("option", option.as_str())
                        .with_detail("value", value));
                }
                slot.values.push(value.to_string());
                Ok(self.after_option_edit(next))
            }
            DraftEdit::RemoveOptionValue { option, value } => {
                let slot = next.option_mut(option)?;
                let before = slot.values.len();
                slot.values.retain(|v| v != value.trim());
                if slot.values.len() == before {
                    return Err(AppError::new(ErrorCode::OptionValueNotFound)
                        .with_detail("option", option.as_str())
                        .with_detail("value", value));
                }
                Ok(self.after_option_edit(next))
            }
            DraftEdit::EnableVariants => {
                next.has_variants = true;
                Ok(self.regenerate(&next))
            }
            DraftEdit::DisableVariants => {
                next.has_variants = false;
                next.variants.clear();
                tracing::info!(product = %next.name, "Variants disabled");
                Ok(next)
            }
            DraftEdit::Regenerate => Ok(self.regenerate(&next)),
            DraftEdit::SetBaseSku { sku } => {
                next.sku = sku.trim().to_string();
                Ok(next)
            }
            DraftEdit::SyncSkus => {
                next.variants = self.propagate_base_sku(&next.sku, &next.variants);
                tracing::info!(
                    product = %next.name,
                    base_sku = %next.sku,
                    variants = next.variants.len(),
                    "Variant SKUs propagated"
                );
                Ok(next)
            }
            DraftEdit::SetBasePrice { price } => {
                validate_price(price)?;
                next.price = price;
                Ok(next)
            }
            DraftEdit::BroadcastBasePrice => {
                next.variants = self.broadcast_base_price(next.price, &next.variants);
                tracing::info!(
                    product = %next.name,
                    price = %next.price,
                    variants = next.variants.len(),
                    "Base price broadcast to variants"
                );
                Ok(next)
            }
            DraftEdit::UpdateVariant { options, patch } => {
                let key = VariantKey::from_options(&options);
                let variant = next
                    .variants
                    .iter_mut()
                    .find(|v| v.key() == key)
                    .ok_or_else(|| {
                        AppError::new(ErrorCode::VariantNotFound)
                            .with_detail("variant", key.to_string())
                    })?;
                if let Some(price) = patch.price {
                    validate_price(price)?;
                    variant.price = price;
                }
                if let Some(stock) = patch.stock {
                    validate_stock(stock)?;
                    variant.stock = stock;
                }
                if let Some(sku) = patch.sku {
                    variant.sku = sku.trim().to_string();
                }
                if let Some(stock) = rollup(&next.variants) {
                    next.stock = stock;
                }
                Ok(next)
            }
            DraftEdit::SetBaseStock { stock } => {
                if !next.variants.is_empty() {
                    return Err(AppError::new(ErrorCode::StockManagedByVariants)
                        .with_detail("variants", next.variants.len()));
                }
                validate_stock(stock)?;
                next.stock = stock;
                Ok(next)
            }
            DraftEdit::SuggestSku => {
                if let Some(sku) = self.suggest_base_sku(&next.name, &next.sku, false, suffix)? {
                    next.sku = sku;
                }
                Ok(next)
            }
            DraftEdit::GenerateSku => {
                if let Some(sku) = self.suggest_base_sku(&next.name, &next.sku, true, suffix)? {
                    next.sku = sku;
                }
                Ok(next)
            }
        }
    }

    /// Option values changed: the first value enables variants, then the
    /// matrix is re-derived
    fn after_option_edit(&self, mut next: ProductDraft) -> ProductDraft {
        if !next.has_variants && next.options.iter().any(|o| !o.is_empty()) {
            next.has_variants = true;
        }
        self.regenerate(&next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::engine::VariantState;

    fn no_random() -> String {
        panic!("unique suffix not expected")
    }

    fn tshirt() -> ProductDraft {
        ProductDraft::new("T-Shirt", Decimal::new(120000, 0)).with_sku("TSHIRT")
    }

    fn apply(engine: &VariantEngine, draft: &ProductDraft, edit: DraftEdit) -> ProductDraft {
        engine.apply(draft, edit, &mut no_random).unwrap()
    }

    fn red_m() -> Vec<VariantOption> {
        vec![
            VariantOption::new(OptionName::Color, "Red"),
            VariantOption::new(OptionName::Size, "M"),
        ]
    }

    #[test]
    fn test_parse_option_values() {
        assert_eq!(
            parse_option_values(" Red, Blue ,,Red,  Green "),
            vec!["Red", "Blue", "Green"]
        );
        assert!(parse_option_values("").is_empty());
        assert!(parse_option_values(" , ,").is_empty());
    }

    #[test]
    fn test_set_option_values_rejects_duplicates() {
        let engine = VariantEngine::default();
        let err = engine
            .apply(
                &tshirt(),
                DraftEdit::SetOptionValues {
                    option: OptionName::Color,
                    values: vec!["Red".into(), " Red".into()],
                },
                &mut no_random,
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OptionValueDuplicate);
    }

    #[test]
    fn test_first_value_enables_variants() {
        let engine = VariantEngine::default();
        let next = apply(
            &engine,
            &tshirt(),
            DraftEdit::ParseOptionValues {
                option: OptionName::Color,
                text: "Red, Blue".into(),
            },
        );
        assert!(next.has_variants);
        assert_eq!(next.variants.len(), 2);
        assert_eq!(next.variants[0].sku, "TSHIRT-RED");
        assert_eq!(engine.state(&next), VariantState::Stable);
    }

    #[test]
    fn test_add_and_remove_value() {
        let engine = VariantEngine::default();
        let mut draft = apply(
            &engine,
            &tshirt(),
            DraftEdit::SetOptionValues {
                option: OptionName::Size,
                values: vec!["S".into()],
            },
        );
        draft = apply(
            &engine,
            &draft,
            DraftEdit::AddOptionValue {
                option: OptionName::Size,
                value: "M".into(),
            },
        );
        assert_eq!(draft.variants.len(), 2);

        let err = engine
            .apply(
                &draft,
                DraftEdit::AddOptionValue {
                    option: OptionName::Size,
                    value: "M".into(),
                },
                &mut no_random,
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OptionValueDuplicate);

        draft = apply(
            &engine,
            &draft,
            DraftEdit::RemoveOptionValue {
                option: OptionName::Size,
                value: "S".into(),
            },
        );
        assert_eq!(draft.variants.len(), 1);
        assert_eq!(draft.variants[0].name, "M");

        let err = engine
            .apply(
                &draft,
                DraftEdit::RemoveOptionValue {
                    option: OptionName::Size,
                    value: "XXL".into(),
                },
                &mut no_random,
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OptionValueNotFound);
    }

    #[test]
    fn test_unknown_slot() {
        let engine = VariantEngine::default();
        let err = engine
            .apply(
                &tshirt(),
                DraftEdit::AddOptionValue {
                    option: OptionName::Style,
                    value: "Slim".into(),
                },
                &mut no_random,
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OptionNotFound);
    }

    #[test]
    fn test_disable_clears_variants() {
        let engine = VariantEngine::default();
        let draft = apply(
            &engine,
            &tshirt(),
            DraftEdit::ParseOptionValues {
                option: OptionName::Color,
                text: "Red,Blue".into(),
            },
        );
        let disabled = apply(&engine, &draft, DraftEdit::DisableVariants);
        assert!(disabled.variants.is_empty());
        assert!(!disabled.has_variants);
        assert_eq!(disabled.options, draft.options);

        let enabled = apply(&engine, &disabled, DraftEdit::EnableVariants);
        assert_eq!(enabled.variants.len(), 2);
    }

    #[test]
    fn test_base_sku_edit_does_not_propagate() {
        let engine = VariantEngine::default();
        let mut draft = apply(
            &engine,
            &tshirt(),
            DraftEdit::SetOptionValues {
                option: OptionName::Color,
                values: vec!["Red".into()],
            },
        );
        draft = apply(&engine, &draft, DraftEdit::SetBaseSku { sku: " POLO ".into() });
        assert_eq!(draft.sku, "POLO");
        assert_eq!(draft.variants[0].sku, "TSHIRT-RED");

        draft = apply(&engine, &draft, DraftEdit::SyncSkus);
        assert_eq!(draft.variants[0].sku, "POLO-RED");
    }

    #[test]
    fn test_base_price_seeds_and_broadcasts() {
        let engine = VariantEngine::default();
        let mut draft = apply(
            &engine,
            &tshirt(),
            DraftEdit::SetOptionValues {
                option: OptionName::Color,
                values: vec!["Red".into()],
            },
        );
        draft = apply(
            &engine,
            &draft,
            DraftEdit::SetBasePrice {
                price: Decimal::new(150000, 0),
            },
        );
        assert_eq!(draft.variants[0].price, Decimal::new(120000, 0));

        draft = apply(
            &engine,
            &draft,
            DraftEdit::AddOptionValue {
                option: OptionName::Color,
                value: "Blue".into(),
            },
        );
        assert_eq!(draft.variants[1].price, Decimal::new(150000, 0));

        draft = apply(&engine, &draft, DraftEdit::BroadcastBasePrice);
        assert!(draft.variants.iter().all(|v| v.price == Decimal::new(150000, 0)));

        let err = engine
            .apply(
                &draft,
                DraftEdit::SetBasePrice {
                    price: Decimal::new(-1, 0),
                },
                &mut no_random,
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductInvalidPrice);
    }

    #[test]
    fn test_update_variant_rolls_up_stock() {
        let engine = VariantEngine::default();
        let mut draft = apply(
            &engine,
            &tshirt(),
            DraftEdit::SetOptionValues {
                option: OptionName::Color,
                values: vec!["Red".into()],
            },
        );
        draft = apply(
            &engine,
            &draft,
            DraftEdit::SetOptionValues {
                option: OptionName::Size,
                values: vec!["S".into(), "M".into()],
            },
        );
        // identity lookup is independent of pair order
        let mut reversed = red_m();
        reversed.reverse();
        draft = apply(
            &engine,
            &draft,
            DraftEdit::UpdateVariant {
                options: reversed,
                patch: VariantPatch {
                    stock: Some(7),
                    sku: Some("RED-M-SPECIAL".into()),
                    ..VariantPatch::default()
                },
            },
        );
        assert_eq!(draft.stock, 7);
        let red_m = draft.variants.iter().find(|v| v.name == "Red / M").unwrap();
        assert_eq!(red_m.sku, "RED-M-SPECIAL");

        let err = engine
            .apply(
                &draft,
                DraftEdit::UpdateVariant {
                    options: red_m.options.clone(),
                    patch: VariantPatch {
                        stock: Some(-1),
                        ..VariantPatch::default()
                    },
                },
                &mut no_random,
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);

        let err = engine
            .apply(
                &draft,
                DraftEdit::UpdateVariant {
                    options: vec![VariantOption::new(OptionName::Color, "Green")],
                    patch: VariantPatch::default(),
                },
                &mut no_random,
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::VariantNotFound);
    }

    #[test]
    fn test_base_stock_only_without_variants() {
        let engine = VariantEngine::default();
        let draft = apply(&engine, &tshirt(), DraftEdit::SetBaseStock { stock: 12 });
        assert_eq!(draft.stock, 12);

        let with_variants = apply(
            &engine,
            &draft,
            DraftEdit::SetOptionValues {
                option: OptionName::Color,
                values: vec!["Red".into()],
            },
        );
        let err = engine
            .apply(&with_variants, DraftEdit::SetBaseStock { stock: 3 }, &mut no_random)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StockManagedByVariants);
    }

    #[test]
    fn test_suggest_and_generate_sku() {
        let engine = VariantEngine::default();
        let blank = ProductDraft::new("Áo thun", Decimal::ZERO);

        let suggested = apply(&engine, &blank, DraftEdit::SuggestSku);
        assert_eq!(suggested.sku, "AO-THUN");

        let untouched = apply(&engine, &suggested, DraftEdit::SuggestSku);
        assert_eq!(untouched.sku, "AO-THUN");

        let mut fixed = || "0042".to_string();
        let generated = engine
            .apply(&suggested, DraftEdit::GenerateSku, &mut fixed)
            .unwrap();
        assert_eq!(generated.sku, "AO-THUN-0042");

        let nameless = ProductDraft::new("", Decimal::ZERO);
        let err = engine
            .apply(&nameless, DraftEdit::GenerateSku, &mut fixed)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNameRequired);
    }

    #[test]
    fn test_edit_serde_shape() {
        let edit: DraftEdit = serde_json::from_str(
            r#"{"type":"add_option_value","option":"Size","value":"L"}"#,
        )
        .unwrap();
        assert_eq!(
            edit,
            DraftEdit::AddOptionValue {
                option: OptionName::Size,
                value: "L".into()
            }
        );

        let edit: DraftEdit = serde_json::from_str(r#"{"type":"sync_skus"}"#).unwrap();
        assert_eq!(edit, DraftEdit::SyncSkus);
    }
}
