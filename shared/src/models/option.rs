//! Option Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumerated option axis
///
/// A product carries at most one option slot per name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionName {
    Color,
    Size,
    Material,
    Style,
}

impl OptionName {
    /// Slots every new product draft starts with
    pub const DEFAULT_SLOTS: [OptionName; 2] = [OptionName::Color, OptionName::Size];

    /// Display name (also the serialized form)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Color => "Color",
            Self::Size => "Size",
            Self::Material => "Material",
            Self::Style => "Style",
        }
    }

    /// Parse a display name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "color" | "colour" => Some(Self::Color),
            "size" => Some(Self::Size),
            "material" => Some(Self::Material),
            "style" => Some(Self::Style),
            _ => None,
        }
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configurable axis of variation on a product
///
/// `values` keep insertion order (display order) and hold no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub name: OptionName,
    #[serde(default)]
    pub values: Vec<String>,
}

impl ProductOption {
    /// Empty slot
    pub fn new(name: OptionName) -> Self {
        Self {
            name,
            values: Vec::new(),
        }
    }

    pub fn with_values<I, S>(name: OptionName, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// An option without values contributes nothing to combinations
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One `{name, value}` pair of a combination
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantOption {
    pub name: OptionName,
    pub value: String,
}

impl VariantOption {
    pub fn new(name: OptionName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// One selected value per non-empty option, in option order
pub type Combination = Vec<VariantOption>;
