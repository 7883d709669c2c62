//! 运行摘要（成功时输出给用户）

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::report::TIMESTAMP_FORMAT;
use crate::rule::ExtractionStrategy;
use crate::utils::preview_compact;

/// 样例中单条规则的最大展示长度
const SAMPLE_RULE_MAX_LEN: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rule_count: usize,
    pub strategy: ExtractionStrategy,
    pub ruleset_path: PathBuf,
    pub readme_path: PathBuf,
    pub generated_at: DateTime<Utc>,
    /// 前几条规则
    pub sample: Vec<String>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✅ 转换完成！规则数量: {}", self.rule_count)?;
        writeln!(f, "   提取策略: {}", self.strategy)?;
        writeln!(f, "   规则集已保存到: {}", self.ruleset_path.display())?;
        writeln!(f, "   README 已更新: {}", self.readme_path.display())?;
        write!(f, "   生成时间: {}", self.generated_at.format(TIMESTAMP_FORMAT))?;
        if !self.sample.is_empty() {
            write!(f, "\n   规则样例（前 {} 条）:", self.sample.len())?;
            for rule in &self.sample {
                write!(f, "\n     - {}", preview_compact(rule, SAMPLE_RULE_MAX_LEN))?;
            }
        }
        Ok(())
    }
}
