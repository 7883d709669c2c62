//! 状态文档（README）生成
//! 固定模板：规则数量、更新时间、源地址、mihomo 使用说明

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::GlobalConfig;
use crate::error::ConvResult;

/// 更新时间格式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";
/// rule-provider 拉取间隔（秒），与 README 中的更新频率一致
pub const PROVIDER_INTERVAL_SECS: u64 = 86400;

/// 状态文档生成器
pub struct ReportGenerator;

impl ReportGenerator {
    /// 渲染 README 文本（纯函数）
    pub fn render(rule_count: usize, generated_at: DateTime<Utc>, config: &GlobalConfig) -> String {
        let ruleset_file = config.ruleset_file_name();
        let placeholder_note = if Self::has_placeholders(&config.provider_url) {
            "\n替换 `YOUR_USERNAME` 和 `YOUR_REPO` 为你的 GitHub 用户名和仓库名。\n"
        } else {
            ""
        };

        format!(
            r#"# Mihomo 规则集

自动转换的 YouTube 广告拦截规则集，适用于 mihomo (Clash Meta)。

## 规则集文件

- `{ruleset_file}` - 主规则集文件

## 规则数量

{rule_count}

## 更新频率

每24小时自动更新一次

## 最后更新

{timestamp}

## 源地址

{source_url}

## 使用方法

在 mihomo 配置文件中添加：

```yaml
rule-providers:
  {provider}:
    type: http
    behavior: domain
    url: "{provider_url}"
    path: ./ruleset/{provider}.yaml
    interval: {interval}

rules:
  - RULE-SET,{provider},REJECT
```
{placeholder_note}
## 许可证

本项目仅为格式转换，规则内容版权归原作者所有。
"#,
            ruleset_file = ruleset_file,
            rule_count = rule_count,
            timestamp = generated_at.format(TIMESTAMP_FORMAT),
            source_url = config.source_url,
            provider = config.provider_name,
            provider_url = config.provider_url,
            interval = PROVIDER_INTERVAL_SECS,
            placeholder_note = placeholder_note,
        )
    }

    /// 写入 README（覆盖旧文件）
    pub async fn write(
        rule_count: usize,
        generated_at: DateTime<Utc>,
        config: &GlobalConfig,
    ) -> ConvResult<()> {
        let content = Self::render(rule_count, generated_at, config);
        write_file(&config.readme_path, &content).await?;
        debug!("README 已写入：{}", config.readme_path.display());
        Ok(())
    }

    fn has_placeholders(url: &str) -> bool {
        url.contains("YOUR_USERNAME") || url.contains("YOUR_REPO")
    }
}

async fn write_file(path: &Path, content: &str) -> ConvResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, content).await?;
    Ok(())
}
