//! 文本宽度工具
//!
//! 终端按显示宽度而不是字节数排版，CJK 等宽字符占两列。

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 截断到指定显示宽度，超出部分用 `…` 表示
pub fn fit_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // 预留一列给省略号
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// 只保留末尾能放进指定宽度的部分（输入框光标在末尾时使用）
pub fn tail_width(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

/// 右侧补空格到指定显示宽度
pub fn pad_to_width(text: &str, width: usize) -> String {
    let w = text.width();
    if w >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_unchanged() {
        assert_eq!(fit_width("jane@x.com", 20), "jane@x.com");
        assert_eq!(tail_width("jane", 10), "jane");
    }

    #[test]
    fn long_text_truncated_with_ellipsis() {
        let result = fit_width("abcdefghij", 5);
        assert_eq!(result, "abcd…");
        assert_eq!(result.width(), 5);
    }

    #[test]
    fn wide_chars_counted_by_columns() {
        // 每个汉字占两列
        let result = fit_width("你好世界", 5);
        assert_eq!(result, "你好…");
        assert_eq!(tail_width("你好世界", 4), "世界");
    }

    #[test]
    fn zero_width_budget() {
        assert_eq!(fit_width("abc", 0), "");
        assert_eq!(tail_width("abc", 0), "");
    }

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad_to_width("Name", 6), "Name  ");
        assert_eq!(pad_to_width("Phone Number", 6), "Phone Number");
    }
}
