//! Product Variant Matrix Engine
//!
//! Derives the purchasable variant matrix from a product's option slots and
//! keeps per-variant data consistent across option, SKU and price edits.
//! Every step is a pure function over a draft snapshot.

mod combination;
mod editor;
mod engine;
mod normalize;
mod sku;
mod stock;
mod sync;

pub use combination::*;
pub use editor::*;
pub use engine::*;
pub use normalize::*;
pub use sku::*;
pub use stock::*;
pub use sync::*;
