//! Product Draft Model

use super::option::{OptionName, ProductOption};
use super::variant::Variant;
use crate::error::{AppError, AppResult, ErrorCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// In-memory draft of a single product being edited
///
/// Owned by the form controller; the engine only reads a snapshot and
/// returns the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    /// Base SKU
    #[serde(default)]
    pub sku: String,
    /// Base price, seeds new variants
    pub price: Decimal,
    /// Aggregate of variant stock while variants exist, free otherwise
    #[serde(default)]
    pub stock: i64,
    /// Variants feature toggle
    #[serde(default)]
    pub has_variants: bool,
    /// Fixed option slots, unique by name
    pub options: Vec<ProductOption>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl ProductDraft {
    /// New draft with the default option slots, all empty
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            sku: String::new(),
            price,
            stock: 0,
            has_variants: false,
            options: OptionName::DEFAULT_SLOTS
                .iter()
                .copied()
                .map(ProductOption::new)
                .collect(),
            variants: Vec::new(),
        }
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }

    /// Mutable slot lookup, `OptionNotFound` when the product has no such slot
    pub fn option_mut(&mut self, name: OptionName) -> AppResult<&mut ProductOption> {
        self.options
            .iter_mut()
            .find(|o| o.name == name)
            .ok_or_else(|| {
                AppError::new(ErrorCode::OptionNotFound).with_detail("option", name.as_str())
            })
    }

    /// Checks option slot uniqueness, for drafts that arrive deserialized
    pub fn validate_slots(&self) -> AppResult<()> {
        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].iter().any(|o| o.name == option.name) {
                return Err(AppError::new(ErrorCode::OptionNameDuplicate)
                    .with_detail("option", option.name.as_str()));
            }
        }
        Ok(())
    }
}
