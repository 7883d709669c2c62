//! 逐行扫描兜底解析
//! 结构化解析不可用时，直接从 `- xxx` 列表行中恢复规则

use super::model::{RawDocument, RuleSet};

/// 扫描整篇文档
pub fn scan_lines(doc: &RawDocument) -> RuleSet {
    doc.lines().filter_map(scan_line).collect()
}

/// 单行扫描：非列表项返回 None
pub fn scan_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty()
        || trimmed.starts_with('!')
        || is_payload_declaration(trimmed)
        || is_document_marker(trimmed)
    {
        return None;
    }

    let item = trimmed.strip_prefix('-')?.trim();
    let item = strip_quotes(item);
    if item.is_empty() {
        return None;
    }
    Some(item.to_string())
}

/// `payload:` 键声明（不区分大小写，冒号前允许空白）
fn is_payload_declaration(trimmed: &str) -> bool {
    let Some(head) = trimmed.get(..7) else {
        return false;
    };
    head.eq_ignore_ascii_case("payload") && trimmed[7..].trim_start().starts_with(':')
}

fn is_document_marker(trimmed: &str) -> bool {
    trimmed == "---" || trimmed == "..."
}

/// 去掉一层成对的单引号或双引号
fn strip_quotes(item: &str) -> &str {
    for quote in ['"', '\''] {
        if item.len() >= 2 && item.starts_with(quote) && item.ends_with(quote) {
            return &item[1..item.len() - 1];
        }
    }
    item
}
