use std::fmt::{self, Write};

// ======================== 核心：零堆分配字符串预览 ========================
/// 空白字符折叠 + 截断，用于日志与运行摘要中的单条规则预览
#[inline(always)]
pub fn preview_compact<'a>(s: &'a str, max_len: usize) -> impl fmt::Display + 'a {
    struct CompactView<'a> {
        source: &'a str,
        max_length: usize,
    }

    impl<'a> fmt::Display for CompactView<'a> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut char_count = 0;
            let mut last_was_whitespace = false;

            for ch in self.source.chars() {
                if char_count >= self.max_length {
                    f.write_str("…")?;
                    break;
                }

                if ch.is_whitespace() {
                    if !last_was_whitespace {
                        f.write_str(" ")?;
                        char_count += 1;
                        last_was_whitespace = true;
                    }
                } else {
                    f.write_char(ch)?;
                    char_count += 1;
                    last_was_whitespace = false;
                }
            }
            Ok(())
        }
    }

    CompactView {
        source: s,
        max_length: max_len,
    }
}

// ======================== 衍生：规则列表日志格式化 ========================
/// 规则列表预览
/// 格式：[rule1, rule2, …] (total: N)
pub fn preview_rules(rules: &[String], max_count: usize, max_rule_len: usize) -> String {
    let total_count = rules.len();
    if total_count == 0 {
        return "[empty]".to_string();
    }

    let mut result = String::with_capacity(max_count * (max_rule_len + 2) + 20);
    result.push('[');

    for (idx, rule) in rules.iter().take(max_count).enumerate() {
        if idx > 0 {
            result.push_str(", ");
        }
        // 写入 String 不会失败
        let _ = write!(result, "{}", preview_compact(rule, max_rule_len));
    }

    if total_count > max_count {
        if max_count > 0 {
            result.push_str(", ");
        }
        let _ = write!(result, "… (total: {})", total_count);
    }
    result.push(']');

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_compact_folds_whitespace_and_truncates() {
        assert_eq!(preview_compact("a  b\t\nc", 10).to_string(), "a b c");
        assert_eq!(preview_compact("abcdefgh", 3).to_string(), "abc…");
        assert_eq!(preview_compact("abc", 3).to_string(), "abc");
    }

    #[test]
    fn test_preview_rules_limits_count() {
        let rules: Vec<String> = ["a.com", "b.com", "c.com"].iter().map(|s| s.to_string()).collect();
        assert_eq!(preview_rules(&rules, 5, 20), "[a.com, b.com, c.com]");
        assert_eq!(preview_rules(&rules, 2, 20), "[a.com, b.com, … (total: 3)]");
        assert_eq!(preview_rules(&[], 2, 20), "[empty]");
        assert_eq!(preview_rules(&rules, 0, 20), "[… (total: 3)]");
    }
}
