//! Shared types for the variant engine
//!
//! Product draft models (options, variants), the unified error system,
//! and small utilities used across crates.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    Combination, OptionName, ProductDraft, ProductOption, Variant, VariantKey, VariantOption,
    VariantPatch,
};
