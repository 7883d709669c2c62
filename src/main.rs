//! 命令行入口：下载源规则集 → 转换为 mihomo 格式 → 更新 README

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mihomo_ruleset::config::{
    DEFAULT_PROVIDER_NAME, DEFAULT_PROVIDER_URL, DEFAULT_README_PATH, DEFAULT_RULESET_PATH,
    DEFAULT_SOURCE_URL,
};
use mihomo_ruleset::{ConfigManager, GlobalConfig, RulesetConverter};

/// 将 Clash Premium 广告拦截规则集转换为 mihomo rule-provider 格式
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// 源规则集URL
    #[arg(long, default_value = DEFAULT_SOURCE_URL)]
    source_url: String,

    /// 规则集输出路径
    #[arg(short, long, default_value = DEFAULT_RULESET_PATH)]
    output: PathBuf,

    /// README 输出路径
    #[arg(long, default_value = DEFAULT_README_PATH)]
    readme: PathBuf,

    /// README 使用说明中的 rule-provider 名称
    #[arg(long, default_value = DEFAULT_PROVIDER_NAME)]
    provider_name: String,

    /// README 使用说明中的 rule-provider 拉取地址
    #[arg(long, default_value = DEFAULT_PROVIDER_URL)]
    provider_url: String,

    /// HTTP 超时（秒），不指定则使用客户端默认值
    #[arg(long)]
    timeout: Option<u64>,

    /// 运行摘要中展示的规则样例数量
    #[arg(long, default_value_t = 5)]
    sample: usize,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> GlobalConfig {
        ConfigManager::custom()
            .source_url(self.source_url)
            .ruleset_path(self.output)
            .readme_path(self.readme)
            .provider_name(self.provider_name)
            .provider_url(self.provider_url)
            .http_timeout(self.timeout)
            .sample_size(self.sample)
            .verbose(self.verbose)
            .build()
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run(config: GlobalConfig) -> anyhow::Result<()> {
    let converter = RulesetConverter::new(config).context("初始化转换器失败")?;
    let summary = converter
        .run()
        .await
        .with_context(|| format!("转换失败：{}", converter.config().source_url))?;

    println!("\n{}", summary);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();
    init_logging(config.verbose);

    if let Err(e) = run(config).await {
        eprintln!("❌ 错误: {:#}", e);
        debug!("转换中止：{:?}", e);
        return Err(e);
    }
    Ok(())
}
