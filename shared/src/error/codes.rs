//! Unified error codes for the variant engine
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Product errors (options, variants, SKU, stock)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the form controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 6xxx: Product ====================
    /// Product has invalid price
    ProductInvalidPrice = 6002,
    /// Product name is required (e.g. to derive a base SKU)
    ProductNameRequired = 6004,
    /// Product stock is derived from its variants
    StockManagedByVariants = 6005,
    /// Option slot not found on the product
    OptionNotFound = 6301,
    /// Option slot name appears more than once
    OptionNameDuplicate = 6302,
    /// Option value already present
    OptionValueDuplicate = 6303,
    /// Option value not found
    OptionValueNotFound = 6304,
    /// Variant not found
    VariantNotFound = 6201,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Product
            ErrorCode::ProductInvalidPrice => "Product has invalid price",
            ErrorCode::ProductNameRequired => "Product name is required",
            ErrorCode::StockManagedByVariants => "Stock is managed by variants",
            ErrorCode::OptionNotFound => "Option not found",
            ErrorCode::OptionNameDuplicate => "Option name already exists",
            ErrorCode::OptionValueDuplicate => "Option value already exists",
            ErrorCode::OptionValueNotFound => "Option value not found",
            ErrorCode::VariantNotFound => "Variant not found",

            // System
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            8 => Ok(ErrorCode::ValueOutOfRange),

            6002 => Ok(ErrorCode::ProductInvalidPrice),
            6004 => Ok(ErrorCode::ProductNameRequired),
            6005 => Ok(ErrorCode::StockManagedByVariants),
            6201 => Ok(ErrorCode::VariantNotFound),
            6301 => Ok(ErrorCode::OptionNotFound),
            6302 => Ok(ErrorCode::OptionNameDuplicate),
            6303 => Ok(ErrorCode::OptionValueDuplicate),
            6304 => Ok(ErrorCode::OptionValueNotFound),

            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
