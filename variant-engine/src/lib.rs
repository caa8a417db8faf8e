//! Variant engine for product drafts
//!
//! # 模块
//!
//! - [`variants`] - 变体矩阵引擎 (组合生成、同步、SKU、库存汇总)
//! - [`config`] - 引擎配置 (环境变量)
//! - [`utils`] - 日志等工具

pub mod config;
pub mod utils;
pub mod variants;

pub use config::EngineConfig;
pub use variants::{DraftEdit, RandomSuffix, UniqueSuffix, VariantEngine, VariantState};
