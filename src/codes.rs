//! 输入码解析
//!
//! 剪贴板文本按 `\n` 拆行，逐行去除首尾空白（含 Windows 的 `\r`），丢弃空行，保持原顺序。

/// 结果之间的分隔符
pub const RESULT_SEPARATOR: &str = "\n";

/// 从剪贴板文本中提取输入码
pub fn parse_codes(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// 拼接查询结果，作为写回剪贴板的内容
pub fn join_results(results: &[String]) -> String {
    results.join(RESULT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::{join_results, parse_codes};

    #[test]
    fn parse_codes_drops_blank_lines() {
        assert_eq!(parse_codes("101\n\n202\n"), vec!["101", "202"]);
    }

    #[test]
    fn parse_codes_trims_crlf_and_padding() {
        assert_eq!(parse_codes("  101 \r\n\t\r\n 202\r\n"), vec!["101", "202"]);
    }

    #[test]
    fn parse_codes_of_whitespace_is_empty() {
        assert!(parse_codes("").is_empty());
        assert!(parse_codes(" \n\t\n  ").is_empty());
    }

    #[test]
    fn join_results_uses_newline_without_trailing_separator() {
        let results = vec!["Alpha".to_string(), "Not found".to_string(), "Beta".to_string()];
        assert_eq!(join_results(&results), "Alpha\nNot found\nBeta");
    }
}
