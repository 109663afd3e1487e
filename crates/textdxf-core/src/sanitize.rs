//! 文件名清理

/// 在常见平台上属于文件系统保留字符的集合
pub const RESERVED_CHARS: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// 把任意文本转换为可用作文件名的基名
///
/// 删除所有保留字符，空格替换为下划线，除此之外不做任何变换。
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !RESERVED_CHARS.contains(c))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_example() {
        assert_eq!(sanitize("a/b c"), "ab_c");
    }

    #[test]
    fn test_sanitize_strips_every_reserved_char() {
        let input = r#"x\y/z*?:"<>| end  two"#;
        let result = sanitize(input);
        assert!(!result.contains(RESERVED_CHARS));
        assert!(!result.contains(' '));
        assert_eq!(result, "xyz_end__two");
    }

    #[test]
    fn test_sanitize_keeps_everything_else() {
        assert_eq!(sanitize("Hello-World_01.v2"), "Hello-World_01.v2");
        assert_eq!(sanitize("中文 标签"), "中文_标签");
        // 制表符不属于空格替换范围
        assert_eq!(sanitize("a\tb"), "a\tb");
    }

    #[test]
    fn test_sanitize_may_become_empty() {
        assert_eq!(sanitize("???"), "");
        assert_eq!(sanitize(""), "");
    }
}
