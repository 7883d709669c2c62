//! mihomo-ruleset - 将 Clash Premium 广告拦截规则集转换为 mihomo rule-provider 格式

// 导出全局错误类型
pub use self::error::{RulesetError, ConvResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{
    RawDocument, RuleSet, RulesetDocument, Extraction, ExtractionStrategy,
    RuleLoader, RuleCleaner, RuleExtractor, RulesetWriter
};

// 导出报告模块核心接口
pub use self::report::ReportGenerator;

// 导出转换流程核心接口
pub use self::converter::{RulesetConverter, RunSummary};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod report;
pub mod utils;
pub mod converter;
