//! 全局配置管理,存储所有可配置项
//! 默认值即固定常量：不传任何参数时行为与原始转换脚本一致

use std::path::PathBuf;

/// 源规则集URL（Clash Premium 格式）
pub const DEFAULT_SOURCE_URL: &str =
    "https://github.com/Potterli20/file/releases/download/ad-youtube-hosts/ad-youtube-clash-premium.yaml";
/// 输出规则集文件名
pub const DEFAULT_RULESET_PATH: &str = "mihomo-ruleset.yaml";
/// 状态文档文件名
pub const DEFAULT_README_PATH: &str = "README.md";
/// rule-provider 名称
pub const DEFAULT_PROVIDER_NAME: &str = "youtube-ad-block";
/// rule-provider 拉取地址（占位，发布后替换）
pub const DEFAULT_PROVIDER_URL: &str =
    "https://raw.githubusercontent.com/YOUR_USERNAME/YOUR_REPO/main/mihomo-ruleset.yaml";

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 源规则集URL
    pub source_url: String,
    // 规则集输出路径
    pub ruleset_path: PathBuf,
    // README输出路径
    pub readme_path: PathBuf,
    // rule-provider 名称（写入使用说明）
    pub provider_name: String,
    // rule-provider 拉取地址（写入使用说明）
    pub provider_url: String,
    // 超时配置（单位：秒），None 表示使用 HTTP 客户端默认值
    pub http_timeout: Option<u64>,
    // 运行摘要中展示的规则样例数量
    pub sample_size: usize,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            ruleset_path: PathBuf::from(DEFAULT_RULESET_PATH),
            readme_path: PathBuf::from(DEFAULT_README_PATH),
            provider_name: DEFAULT_PROVIDER_NAME.to_string(),
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            http_timeout: None,
            sample_size: 5,
            verbose: false,
        }
    }
}

impl GlobalConfig {
    /// 规则集文件名（写入 README 的文件说明）
    pub fn ruleset_file_name(&self) -> String {
        self.ruleset_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_RULESET_PATH.to_string())
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.config.source_url = url.into();
        self
    }

    pub fn ruleset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.ruleset_path = path.into();
        self
    }

    pub fn readme_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.readme_path = path.into();
        self
    }

    pub fn provider_name(mut self, name: impl Into<String>) -> Self {
        self.config.provider_name = name.into();
        self
    }

    pub fn provider_url(mut self, url: impl Into<String>) -> Self {
        self.config.provider_url = url.into();
        self
    }

    pub fn http_timeout(mut self, timeout: Option<u64>) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn sample_size(mut self, size: usize) -> Self {
        self.config.sample_size = size;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
