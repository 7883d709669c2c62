//! 规则模块：负责规则集的下载、提取、写入与数据模型定义
pub mod model;
pub mod loader;
pub mod source;
pub mod cleaner;
pub mod line_scan;
pub mod extractor;
pub mod writer;

// 导出核心接口
pub use self::model::{
    RawDocument, RuleSet, RulesetDocument, Extraction, ExtractionStrategy
};
pub use self::loader::RuleLoader;
pub use self::cleaner::RuleCleaner;
pub use self::extractor::{RuleExtractor, STRATEGY_CHAIN};
pub use self::writer::RulesetWriter;
