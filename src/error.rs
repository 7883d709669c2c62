//! 全局错误类型定义

use thiserror::Error;
use serde_yaml::Error as SerdeYamlError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum RulesetError {
    // 下载相关错误
    #[error("规则集下载失败：{0}")]
    FetchError(String),
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),

    // 提取相关错误
    #[error("规则解析失败：{0}")]
    RuleParseError(String),
    #[error("未提取到任何规则：源文件格式无法识别或内容为空")]
    EmptyRuleSet,

    // 序列化错误
    #[error("YAML序列化失败：{0}")]
    YamlError(#[from] SerdeYamlError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type ConvResult<T> = Result<T, RulesetError>;
