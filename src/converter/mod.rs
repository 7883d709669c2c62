//! 转换模块：串联下载、提取、写入与报告
pub mod converter;
pub mod summary;

// 导出核心接口
pub use self::converter::RulesetConverter;
pub use self::summary::RunSummary;
