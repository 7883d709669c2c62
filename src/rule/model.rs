//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use std::str::Lines;
use serde::{Deserialize, Serialize};

use crate::error::{ConvResult, RulesetError};

/// 原始规则文档（下载后的未解析文本）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    origin: String,
    text: String,
}

impl RawDocument {
    pub fn new(origin: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
        }
    }

    /// 不关心来源时直接从文本构建（本地文件 / 测试）
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new("<inline>", text)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 按行切分的视图
    pub fn lines(&self) -> Lines<'_> {
        self.text.lines()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// 有序规则集
/// 不变量：元素均非空；允许重复，顺序与源文件一致
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<String>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.rules.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.rules
    }

    /// 取前 n 条规则作为样例
    pub fn sample(&self, n: usize) -> &[String] {
        &self.rules[..n.min(self.rules.len())]
    }

    pub fn into_inner(self) -> Vec<String> {
        self.rules
    }
}

// 空白条目在收集阶段丢弃，保证不变量
impl FromIterator<String> for RuleSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            rules: iter
                .into_iter()
                .filter(|rule| !rule.trim().is_empty())
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl From<Vec<String>> for RuleSet {
    fn from(rules: Vec<String>) -> Self {
        rules.into_iter().collect()
    }
}

/// mihomo rule-provider 文档（单键 payload）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesetDocument {
    pub payload: Vec<String>,
}

impl RulesetDocument {
    pub fn from_rule_set(rule_set: &RuleSet) -> Self {
        Self {
            payload: rule_set.as_slice().to_vec(),
        }
    }

    /// 读取已生成的规则集文档
    pub fn from_yaml_str(content: &str) -> ConvResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| RulesetError::RuleParseError(format!("规则集文档解析失败：{}", e)))
    }
}

/// 规则提取策略（按优先级排列）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// 严格结构化解析
    Structured,
    /// 清理 Checksum 注解后重新结构化解析
    CleanedStructured,
    /// 逐行扫描兜底
    LineScan,
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionStrategy::Structured => write!(f, "structured"),
            ExtractionStrategy::CleanedStructured => write!(f, "cleaned-structured"),
            ExtractionStrategy::LineScan => write!(f, "line-scan"),
        }
    }
}

/// 提取结果：规则集 + 实际生效的策略
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub strategy: ExtractionStrategy,
    pub rules: RuleSet,
}
