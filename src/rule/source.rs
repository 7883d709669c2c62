//! 源规则文档结构化解析
//! 识别顶层 payload / rules 两个键，将序列元素转换为规则字符串

use serde_yaml::Value;
use tracing::debug;

use super::model::RuleSet;
use crate::error::{ConvResult, RulesetError};

/// 源文档中可识别的顶层键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKey {
    /// 已经是扁平规则列表
    Payload,
    /// 单键映射记录（需拼接为 "类型,值"）
    Rules,
}

impl SourceKey {
    /// 检查顺序：payload 优先于 rules
    pub const PRIORITY: [SourceKey; 2] = [SourceKey::Payload, SourceKey::Rules];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKey::Payload => "payload",
            SourceKey::Rules => "rules",
        }
    }
}

/// 严格解析：YAML 语法错误时返回 RuleParseError，由上层决定是否回退
pub fn parse_structured(text: &str) -> ConvResult<RuleSet> {
    let value: Value = serde_yaml::from_str(text)
        .map_err(|e| RulesetError::RuleParseError(e.to_string()))?;
    Ok(rules_from_value(&value))
}

/// 从已解析的文档中提取规则，顶层不是映射或无可识别键时返回空集
pub fn rules_from_value(value: &Value) -> RuleSet {
    for key in SourceKey::PRIORITY {
        let Some(Value::Sequence(items)) = value.get(key.as_str()) else {
            continue;
        };

        let rules: RuleSet = items.iter().filter_map(rule_from_item).collect();
        if !rules.is_empty() {
            debug!("顶层键 [{}] 提取规则 {} 条", key.as_str(), rules.len());
            return rules;
        }
        debug!("顶层键 [{}] 存在但未产出规则，继续检查下一个键", key.as_str());
    }

    RuleSet::default()
}

/// 单个序列元素 → 规则字符串
fn rule_from_item(item: &Value) -> Option<String> {
    match item {
        Value::Mapping(mapping) => {
            // 仅取第一个键，多余的键直接丢弃
            let mut entries = mapping.iter();
            let (rule_type, rule_value) = entries.next()?;
            let dropped = entries.count();
            if dropped > 0 {
                debug!("规则映射包含多个键，仅保留第一个，丢弃 {} 个", dropped);
            }
            let rule_type = scalar_text(rule_type)?;
            let rule_value = scalar_text(rule_value).unwrap_or_default();
            Some(format!("{},{}", rule_type, rule_value))
        }
        other => scalar_text(other),
    }
}

/// 标量转文本；null、序列、映射返回 None
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
