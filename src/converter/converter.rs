//! 转换流程编排
//! 下载 → 提取（空结果直接失败）→ 写规则集 → 写 README → 返回运行摘要
//! 任一步骤出错立即中止，不做部分回滚

use chrono::Utc;
use tracing::{debug, info};

use super::summary::RunSummary;
use crate::config::GlobalConfig;
use crate::error::ConvResult;
use crate::report::ReportGenerator;
use crate::rule::{Extraction, RawDocument, RuleExtractor, RuleLoader, RulesetWriter};
use crate::utils::preview_rules;

/// 规则集转换器
pub struct RulesetConverter {
    config: GlobalConfig,
    loader: RuleLoader,
}

impl RulesetConverter {
    pub fn new(config: GlobalConfig) -> ConvResult<Self> {
        let loader = RuleLoader::new(&config)?;
        Ok(Self::with_loader(config, loader))
    }

    /// 使用自定义下载器
    pub fn with_loader(config: GlobalConfig, loader: RuleLoader) -> Self {
        Self { config, loader }
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// 完整执行一次转换
    pub async fn run(&self) -> ConvResult<RunSummary> {
        info!("正在下载规则集: {}", self.config.source_url);
        let raw = self.loader.fetch(&self.config.source_url).await?;
        self.convert(&raw).await
    }

    /// 对已获取的源文档执行提取与写入
    pub async fn convert(&self, raw: &RawDocument) -> ConvResult<RunSummary> {
        let Extraction { strategy, rules } = RuleExtractor::extract(raw)?;
        info!("提取规则 {} 条（策略：{}）", rules.len(), strategy);
        debug!("规则预览：{}", preview_rules(rules.as_slice(), 10, 60));

        RulesetWriter::save(&rules, &self.config.ruleset_path).await?;
        info!("规则集已保存到: {}", self.config.ruleset_path.display());

        let generated_at = Utc::now();
        ReportGenerator::write(rules.len(), generated_at, &self.config).await?;
        info!("README 已更新: {}", self.config.readme_path.display());

        Ok(RunSummary {
            rule_count: rules.len(),
            strategy,
            ruleset_path: self.config.ruleset_path.clone(),
            readme_path: self.config.readme_path.clone(),
            generated_at,
            sample: rules.sample(self.config.sample_size).to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::error::RulesetError;
    use crate::rule::loader::tests::{direct_loader, serve_once};
    use crate::rule::ExtractionStrategy;
    use std::path::Path;

    fn config_in(dir: &Path, source_url: &str) -> GlobalConfig {
        ConfigManager::custom()
            .source_url(source_url)
            .ruleset_path(dir.join("mihomo-ruleset.yaml"))
            .readme_path(dir.join("README.md"))
            .http_timeout(Some(5))
            .sample_size(1)
            .build()
    }

    #[tokio::test]
    async fn test_run_end_to_end() {
        let url = serve_once("200 OK", "payload:\n  - \"a.com\"\n  - \"b.com\"\n").await;
        let dir = tempfile::tempdir().unwrap();
        let converter = RulesetConverter::with_loader(config_in(dir.path(), &url), direct_loader());

        let summary = converter.run().await.unwrap();
        assert_eq!(summary.rule_count, 2);
        assert_eq!(summary.strategy, ExtractionStrategy::Structured);
        assert_eq!(summary.sample, vec!["a.com"]);

        let ruleset = tokio::fs::read_to_string(dir.path().join("mihomo-ruleset.yaml")).await.unwrap();
        assert_eq!(ruleset, "payload:\n- a.com\n- b.com\n");
        let readme = tokio::fs::read_to_string(dir.path().join("README.md")).await.unwrap();
        assert!(readme.contains("## 规则数量\n\n2\n"));
        assert!(readme.contains(&url));
    }

    #[tokio::test]
    async fn test_run_fetch_failure_writes_nothing() {
        let url = serve_once("500 Internal Server Error", "boom").await;
        let dir = tempfile::tempdir().unwrap();
        let converter = RulesetConverter::with_loader(config_in(dir.path(), &url), direct_loader());

        let err = converter.run().await.unwrap_err();
        assert!(matches!(err, RulesetError::FetchError(_)));
        assert!(!dir.path().join("mihomo-ruleset.yaml").exists());
        assert!(!dir.path().join("README.md").exists());
    }

    #[tokio::test]
    async fn test_convert_empty_source_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let converter = RulesetConverter::new(config_in(dir.path(), "https://example.com/x.yaml")).unwrap();
        let raw = RawDocument::from_text("title: nothing\n");

        let err = converter.convert(&raw).await.unwrap_err();
        assert!(matches!(err, RulesetError::EmptyRuleSet));
        assert!(!dir.path().join("mihomo-ruleset.yaml").exists());
    }

    #[tokio::test]
    async fn test_convert_rules_document() {
        let dir = tempfile::tempdir().unwrap();
        let converter = RulesetConverter::new(config_in(dir.path(), "https://example.com/x.yaml")).unwrap();
        let raw = RawDocument::from_text(
            "rules:\n  - DOMAIN-SUFFIX: googleads.g.doubleclick.net\n  - DOMAIN-KEYWORD,adservice\n",
        );

        let summary = converter.convert(&raw).await.unwrap();
        assert_eq!(summary.rule_count, 2);

        let loaded = RulesetWriter::load(&dir.path().join("mihomo-ruleset.yaml")).await.unwrap();
        assert_eq!(
            loaded.as_slice(),
            &["DOMAIN-SUFFIX,googleads.g.doubleclick.net", "DOMAIN-KEYWORD,adservice"]
        );
    }
}
