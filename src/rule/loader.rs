//! 规则集下载器
//! 单次 GET 拉取源规则集文本，非 2xx 状态直接报错，不做重试

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use super::model::RawDocument;
use crate::config::GlobalConfig;
use crate::error::{ConvResult, RulesetError};

const USER_AGENT: &str = concat!("mihomo-ruleset/", env!("CARGO_PKG_VERSION"));

/// 规则集下载器
pub struct RuleLoader {
    client: Client,
}

impl RuleLoader {
    /// 按配置构建 HTTP 客户端；未配置超时则沿用客户端默认行为
    pub fn new(config: &GlobalConfig) -> ConvResult<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.http_timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self::with_client(builder.build()?))
    }

    /// 使用外部构建的客户端（自定义代理、TLS 等）
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// 下载源规则集
    pub async fn fetch(&self, url: &str) -> ConvResult<RawDocument> {
        let parsed = Url::parse(url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(RulesetError::InvalidInput(format!(
                "不支持的URL协议：{}",
                parsed.scheme()
            )));
        }

        debug!("开始下载规则集，URL：{}", url);
        let response = self.client.get(parsed).send().await?;

        if !response.status().is_success() {
            return Err(RulesetError::FetchError(format!(
                "URL {} 返回状态码 {}",
                url, response.status()
            )));
        }

        let text = response.text().await?;
        debug!("规则集下载完成，大小：{} 字节", text.len());

        Ok(RawDocument::new(url, text))
    }
}
