//! 规则提取器
//! 按固定优先级依次尝试：严格结构化解析 → 清理注解后重新解析 → 逐行扫描
//! 第一个产出非空规则集的策略胜出；全部为空则视为致命错误

use tracing::{debug, warn};

use super::cleaner::RuleCleaner;
use super::line_scan::scan_lines;
use super::model::{Extraction, ExtractionStrategy, RawDocument, RuleSet};
use super::source::parse_structured;
use crate::error::{ConvResult, RulesetError};
use crate::utils::log_format::preview_rules;

/// 策略链（顺序即优先级）
pub const STRATEGY_CHAIN: [ExtractionStrategy; 3] = [
    ExtractionStrategy::Structured,
    ExtractionStrategy::CleanedStructured,
    ExtractionStrategy::LineScan,
];

impl ExtractionStrategy {
    /// 执行单个策略；结构化策略在 YAML 语法错误时返回 RuleParseError
    pub fn apply(&self, doc: &RawDocument) -> ConvResult<RuleSet> {
        match self {
            ExtractionStrategy::Structured => parse_structured(doc.text()),
            ExtractionStrategy::CleanedStructured => parse_structured(&RuleCleaner::clean(doc.text())),
            ExtractionStrategy::LineScan => Ok(scan_lines(doc)),
        }
    }
}

/// 规则提取器
pub struct RuleExtractor;

impl RuleExtractor {
    /// 提取规则集
    pub fn extract(doc: &RawDocument) -> ConvResult<Extraction> {
        // 清理重试仅在严格解析报错后执行
        let mut parse_failed = false;

        for strategy in STRATEGY_CHAIN {
            if strategy == ExtractionStrategy::CleanedStructured && !parse_failed {
                continue;
            }

            match strategy.apply(doc) {
                Ok(rules) if !rules.is_empty() => {
                    debug!(
                        "策略 [{}] 提取规则 {} 条：{}",
                        strategy,
                        rules.len(),
                        preview_rules(rules.as_slice(), 5, 60)
                    );
                    return Ok(Extraction { strategy, rules });
                }
                Ok(_) => {
                    debug!("策略 [{}] 未产出规则，尝试下一个策略", strategy);
                }
                Err(e) => {
                    warn!("策略 [{}] 解析失败：{}", strategy, e);
                    if strategy == ExtractionStrategy::Structured {
                        parse_failed = true;
                    }
                }
            }
        }

        Err(RulesetError::EmptyRuleSet)
    }

    /// 仅返回规则集
    pub fn extract_rules(doc: &RawDocument) -> ConvResult<RuleSet> {
        Self::extract(doc).map(|extraction| extraction.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> ConvResult<Extraction> {
        RuleExtractor::extract(&RawDocument::from_text(text))
    }

    #[test]
    fn test_payload_document_uses_structured_strategy() {
        let extraction = extract("payload:\n  - \"a.com\"\n  - \"b.com\"\n").unwrap();
        assert_eq!(extraction.strategy, ExtractionStrategy::Structured);
        assert_eq!(extraction.rules.as_slice(), &["a.com", "b.com"]);
    }

    #[test]
    fn test_rules_document_is_joined() {
        let extraction = extract(
            "rules:\n  - DOMAIN-SUFFIX: ads.youtube.com\n  - DOMAIN: r1---sn-ad.googlevideo.com\n",
        )
        .unwrap();
        assert_eq!(
            extraction.rules.as_slice(),
            &["DOMAIN-SUFFIX,ads.youtube.com", "DOMAIN,r1---sn-ad.googlevideo.com"]
        );
    }

    #[test]
    fn test_checksum_annotation_is_recovered() {
        let text = "!Checksum: abc123\npayload:\n  - \"+.ads.example.com\"\n  - tracker.example.org\n";
        assert!(parse_structured(text).is_err());

        let extraction = extract(text).unwrap();
        assert_eq!(extraction.strategy, ExtractionStrategy::CleanedStructured);
        assert_eq!(
            extraction.rules.as_slice(),
            &["+.ads.example.com", "tracker.example.org"]
        );
    }

    #[test]
    fn test_checksum_between_payload_items_is_recovered() {
        let text = "payload:\n  - a.com\n!Checksum: abc\n  - b.com\n";
        assert!(parse_structured(text).is_err());

        let extraction = extract(text).unwrap();
        assert_eq!(extraction.strategy, ExtractionStrategy::CleanedStructured);
        assert_eq!(extraction.rules.as_slice(), &["a.com", "b.com"]);
    }

    #[test]
    fn test_cleaned_retry_skipped_without_parse_error() {
        // 严格解析成功但无可识别键：直接走逐行扫描，不经过清理重试
        let extraction = extract("list:\n  - a.com\n").unwrap();
        assert_eq!(extraction.strategy, ExtractionStrategy::LineScan);
    }

    #[test]
    fn test_cleaned_text_parses_structurally() {
        let text = "!Checksum: abc123\npayload:\n  - a.com\n";
        let cleaned = RuleCleaner::clean(text);
        let rules = parse_structured(&cleaned).unwrap();
        assert_eq!(rules.as_slice(), &["a.com"]);
    }

    #[test]
    fn test_broken_yaml_falls_back_to_line_scan() {
        // 缩进混乱 + 未闭合引号，严格解析与清理重试都会失败
        let text = "payload:\n  - \"+.ads.example.com\"\n    - 'b.example.com\n\t- c.example.com\n";
        let extraction = extract(text).unwrap();
        assert_eq!(extraction.strategy, ExtractionStrategy::LineScan);
        assert_eq!(
            extraction.rules.as_slice(),
            &["+.ads.example.com", "'b.example.com", "c.example.com"]
        );
    }

    #[test]
    fn test_unknown_keys_fall_back_to_line_scan() {
        let extraction = extract("list:\n  - \"+.ads.example.com\"\n").unwrap();
        assert_eq!(extraction.strategy, ExtractionStrategy::LineScan);
        assert_eq!(extraction.rules.as_slice(), &["+.ads.example.com"]);
    }

    #[test]
    fn test_empty_source_is_empty_rule_set_error() {
        for text in ["", "title: nothing here\nversion: 2\n", "! just a comment\n\n"] {
            let err = extract(text).unwrap_err();
            assert!(matches!(err, RulesetError::EmptyRuleSet), "input: {:?}", text);
        }
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let doc = RawDocument::from_text("rules:\n  - DOMAIN: a.com\n  - b.com\n  - b.com\n");
        let first = RuleExtractor::extract_rules(&doc).unwrap();
        let second = RuleExtractor::extract_rules(&doc).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.as_slice(), &["DOMAIN,a.com", "b.com", "b.com"]);
    }
}
