//! 源文档清理器
//! 移除会导致 YAML 严格解析失败的非标准注解（如 `!Checksum: xxx`）

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

// `!Checksum:` / `! Checksum:` 及其后直到行尾的值
static CHECKSUM_ANNOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)![ \t]*Checksum:[^\r\n]*").unwrap()
});

/// 源文档清理器
pub struct RuleCleaner;

impl RuleCleaner {
    /// 清理非标准注解，无匹配时不分配新字符串
    pub fn clean(text: &str) -> Cow<'_, str> {
        if !Self::has_annotations(text) {
            return Cow::Borrowed(text);
        }
        debug!("移除 Checksum 注解");
        CHECKSUM_ANNOTATION.replace_all(text, "")
    }

    /// 文本中是否包含可清理的注解
    pub fn has_annotations(text: &str) -> bool {
        CHECKSUM_ANNOTATION.is_match(text)
    }
}
