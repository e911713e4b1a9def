/**
 * Splitting a configured regex like `#^Foo$#i` into delimiter, body and
 * modifier flags.
 */

/// A delimited regex taken apart. `body` starts at byte `body_start` of the
/// original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimited<'a> {
    pub delimiter: char,
    pub body: &'a str,
    pub body_start: usize,
    pub flags: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DelimiterError {
    #[error("empty regular expression")]
    Empty,

    #[error("delimiter '{0}' must not be alphanumeric, backslash or whitespace")]
    InvalidDelimiter(char),

    #[error("no ending delimiter '{0}' found")]
    MissingEnd(char),

    #[error("unknown modifier '{0}'")]
    UnknownModifier(char),
}

const MODIFIERS: &str = "imsxnuADSUXJ";

/// Takes a delimited regex apart. Leading whitespace is skipped, and the
/// last occurrence of the closing delimiter ends the body.
pub fn split_delimited(raw: &str) -> Result<Delimited<'_>, DelimiterError> {
    let trimmed = raw.trim_start();
    let start = raw.len() - trimmed.len();

    let delimiter = trimmed.chars().next().ok_or(DelimiterError::Empty)?;
    if !delimiter.is_ascii_punctuation() || delimiter == '\\' {
        return Err(DelimiterError::InvalidDelimiter(delimiter));
    }
    let closing = closing_delimiter(delimiter);

    let inner = &trimmed[1..];
    let end = inner.rfind(closing).ok_or(DelimiterError::MissingEnd(closing))?;
    let flags = &inner[(end + 1)..];
    if let Some(unknown) = flags.chars().find(|c| !MODIFIERS.contains(*c) && !c.is_whitespace()) {
        return Err(DelimiterError::UnknownModifier(unknown));
    }

    Ok(Delimited{
        delimiter,
        body: &inner[..end],
        body_start: start + 1,
        flags: flags.trim(),
    })
}

fn closing_delimiter(opening: char) -> char {
    match opening {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        '<' => '>',
        c => c,
    }
}

#[cfg(test)]
mod delimiter_tests {
    use super::*;

    #[test]
    fn hash_delimited() {
        let d = split_delimited(r"#^Foo\#1$#i").unwrap();
        assert_eq!(d.delimiter, '#');
        assert_eq!(d.body, r"^Foo\#1$");
        assert_eq!(d.body_start, 1);
        assert_eq!(d.flags, "i");
    }

    #[test]
    fn last_delimiter_wins() {
        assert_eq!(split_delimited("~a~b~").unwrap().body, "a~b");
    }

    #[test]
    fn bracket_delimiters() {
        let d = split_delimited("{a{2}}u").unwrap();
        assert_eq!(d.body, "a{2}");
        assert_eq!(d.flags, "u");
    }

    #[test]
    fn leading_whitespace() {
        let d = split_delimited("  /foo/").unwrap();
        assert_eq!(d.body, "foo");
        assert_eq!(d.body_start, 3);
    }

    #[test]
    fn errors() {
        assert_eq!(split_delimited(""), Err(DelimiterError::Empty));
        assert_eq!(split_delimited("   "), Err(DelimiterError::Empty));
        assert_eq!(split_delimited("abc"), Err(DelimiterError::InvalidDelimiter('a')));
        assert_eq!(split_delimited(r"\a\"), Err(DelimiterError::InvalidDelimiter('\\')));
        assert_eq!(split_delimited("#abc"), Err(DelimiterError::MissingEnd('#')));
        assert_eq!(split_delimited("(abc"), Err(DelimiterError::MissingEnd(')')));
        assert_eq!(split_delimited("#abc#q"), Err(DelimiterError::UnknownModifier('q')));
    }
}
