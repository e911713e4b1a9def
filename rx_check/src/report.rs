/**
 * Human readable messages for broken ignore patterns.
 */

use rx_lint::{split_delimited, Finding, LintError, ValidationResult};

/// One message per finding, in finding order.
pub fn findings_messages(pattern: &str, result: &ValidationResult) -> Vec<String> {
    result.findings().iter().map(|finding| finding_message(pattern, finding)).collect()
}

pub fn finding_message(pattern: &str, finding: &Finding) -> String {
    match finding {
        Finding::IgnoredTypesFound(types) => {
            let mut message = format!(
                "Ignored error {} has an unescaped '|' which leads to ignoring more errors than intended. Use '\\|' instead.\n\
                 It ignores all errors containing the following types:",
                pattern);
            for t in types {
                message.push_str(&format!("\n* {}", t.description));
            }
            message
        },
        Finding::AnchorInMiddle{ .. } => format!(
            "Ignored error {} has an unescaped anchor '$' in the middle. This leads to unintended behavior. Use '\\$' instead.",
            pattern),
        Finding::UniversalMatch(m) => format!(
            "Ignored error {} has an unescaped '{}' which leads to ignoring all errors. Use '{}' instead.",
            pattern, m.sequence, m.escaped),
    }
}

/// The message for a pattern that could not be validated at all.
pub fn error_message(pattern: &str, error: &LintError) -> String {
    match error {
        LintError::Delimiter(e) => format!(
            "Ignored error {} is not a valid delimited regular expression: {}.",
            pattern, e),
        LintError::Malformed(e) => {
            // Offsets are relative to the body between the delimiters
            let body_start = split_delimited(pattern).map_or(0, |d| d.body_start);
            format!(
                "Ignored error {} is not a valid regular expression: {}.\n{}",
                pattern, e, caret_line(pattern, body_start + e.offset))
        },
    }
}

/// The pattern with a `^` under the character at byte `offset`.
fn caret_line(pattern: &str, offset: usize) -> String {
    let column = pattern.get(..offset).map_or(offset, |prefix| prefix.chars().count());
    format!("    {}\n    {}^", pattern, " ".repeat(column))
}
