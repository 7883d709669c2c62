//! 规则集写入
//! 序列化为 mihomo rule-provider 文档（payload 单键、块序列风格）并覆盖写入

use std::path::Path;

use tracing::debug;

use super::model::{RuleSet, RulesetDocument};
use crate::error::ConvResult;

/// 规则集写入器
pub struct RulesetWriter;

impl RulesetWriter {
    /// 渲染规则集文档文本
    pub fn render(rule_set: &RuleSet) -> ConvResult<String> {
        let document = RulesetDocument::from_rule_set(rule_set);
        Ok(serde_yaml::to_string(&document)?)
    }

    /// 写入规则集文件（覆盖旧文件，不保留备份）
    pub async fn save(rule_set: &RuleSet, path: &Path) -> ConvResult<()> {
        let content = Self::render(rule_set)?;
        debug!("规则集序列化成功，数据大小：{} 字节", content.len());

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, content).await?;
        Ok(())
    }

    /// 读取已写入的规则集文件
    pub async fn load(path: &Path) -> ConvResult<RuleSet> {
        let content = tokio::fs::read_to_string(path).await?;
        let document = RulesetDocument::from_yaml_str(&content)?;
        Ok(document.payload.into())
    }
}
