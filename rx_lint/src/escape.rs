/**
 * Which characters mean something to a regex, and how to neutralize them.
 */

/// Characters that are not literal when they appear unescaped outside a
/// character class.
pub fn is_regex_significant(c: char) -> bool {
    "\\^$.|?*+()[]{}".contains(c)
}

/// Escapes every significant character so that the result matches `text`
/// literally.
pub fn escape_metacharacters(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if is_regex_significant(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod escape_tests {
    use super::*;

    #[test]
    fn escapes_dot_star() {
        assert_eq!(escape_metacharacters(".*"), r"\.\*");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(escape_metacharacters("int, string"), "int, string");
    }

    #[test]
    fn escapes_backslash_itself() {
        assert_eq!(escape_metacharacters(r"a\b|c"), r"a\\b\|c");
    }
}
