use shared::{AppError, AppResult};

/// 引擎配置 - 变体矩阵的所有可调参数
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | VARIANT_NAME_SEPARATOR | " / " | 变体名称分隔符 |
/// | SKU_SEPARATOR | "-" | SKU 片段分隔符 |
/// | SKU_FRAGMENT_LEN | 3 | 单个选项值片段长度 |
/// | BASE_SKU_MAX_LEN | 20 | 由商品名生成的基础 SKU 最大长度 |
/// | SKU_UNIQUE_DIGITS | 4 | 强制生成时的随机数字位数 |
/// | LOG_LEVEL | info | 日志级别 |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// 变体名称分隔符，例如 "Red / M"
    pub name_separator: String,
    /// 基础 SKU 与后缀、后缀片段之间的分隔符
    pub sku_separator: String,
    /// 选项值片段截断长度
    pub fragment_len: usize,
    /// 基础 SKU 截断长度
    pub base_sku_max_len: usize,
    /// 唯一后缀位数
    pub unique_digits: u32,
    /// 日志级别
    pub log_level: String,
}

impl EngineConfig {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置（`from_env` 的实现，测试时注入）
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            name_separator: lookup("VARIANT_NAME_SEPARATOR").unwrap_or(defaults.name_separator),
            sku_separator: lookup("SKU_SEPARATOR").unwrap_or(defaults.sku_separator),
            fragment_len: lookup("SKU_FRAGMENT_LEN")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.fragment_len),
            base_sku_max_len: lookup("BASE_SKU_MAX_LEN")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.base_sku_max_len),
            unique_digits: lookup("SKU_UNIQUE_DIGITS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.unique_digits),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// 校验配置
    pub fn validate(&self) -> AppResult<()> {
        if self.sku_separator.is_empty() {
            return Err(AppError::config("SKU_SEPARATOR must not be empty"));
        }
        if self.fragment_len == 0 {
            return Err(AppError::config("SKU_FRAGMENT_LEN must be positive"));
        }
        if self.base_sku_max_len == 0 {
            return Err(AppError::config("BASE_SKU_MAX_LEN must be positive"));
        }
        if !(1..=18).contains(&self.unique_digits) {
            return Err(AppError::config("SKU_UNIQUE_DIGITS must be between 1 and 18"));
        }
        Ok(())
    }
}

/// 固定默认值，不读取环境变量（测试可复现）
impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name_separator: " / ".into(),
            sku_separator: "-".into(),
            fragment_len: 3,
            base_sku_max_len: 20,
            unique_digits: 4,
            log_level: "info".into(),
        }
    }
}
