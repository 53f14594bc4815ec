//! 文本规范化
//!
//! 提取出的原始文本在合成前必须先规范化：
//! 所有空白符序列压缩为单个空格，并去除首尾空白

/// 最小可朗读字符数
/// 规范化后不足此长度的文本视为空文档（如扫描版 PDF）
pub const MIN_SPEAKABLE_CHARS: usize = 5;

/// 压缩空白符
///
/// 将任意空白符序列（空格、换行、制表符等）压缩为单个空格并去除首尾空白。
/// 幂等：对已规范化的文本调用返回原文。
pub fn normalize_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(word);
    }
    normalized
}

/// 判断规范化后的文本是否足以朗读
///
/// 按 Unicode 标量计数，而非字节数（西里尔文本每字符占两个字节）
pub fn is_speakable(text: &str) -> bool {
    text.chars().count() >= MIN_SPEAKABLE_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(normalize_whitespace("Hello   World"), "Hello World");
        assert_eq!(normalize_whitespace("a\t\tb\nc"), "a b c");
        assert_eq!(normalize_whitespace("one\r\ntwo\r\nthree"), "one two three");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(normalize_whitespace("  padded  "), "padded");
        assert_eq!(normalize_whitespace("\n\ttext\n"), "text");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace("   \n\t  "), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_whitespace("  Hello \n  World  ");
        let twice = normalize_whitespace(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "Hello World");
    }

    #[test]
    fn test_speakable_boundary() {
        assert!(!is_speakable(""));
        assert!(!is_speakable("abcd"));
        assert!(is_speakable("abcde"));
        assert!(is_speakable("Hello World"));
    }

    #[test]
    fn test_speakable_counts_chars_not_bytes() {
        // 4 个西里尔字符 = 8 字节，仍然不足 5 字符
        assert!(!is_speakable("тест"));
        assert!(is_speakable("текст"));
    }
}
