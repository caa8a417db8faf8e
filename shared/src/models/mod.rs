//! Data models
//!
//! Shared between the variant engine and the form controller (via JSON).

pub mod option;
pub mod product;
pub mod variant;

// Re-exports
pub use option::*;
pub use product::*;
pub use variant::*;
