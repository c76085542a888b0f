//! Display formatting for answer patterns

use super::pattern::AnswerPattern;

/// Uppercase the first character, leave the rest untouched
fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format one combination, e.g. `Ctrl + Shift + B`
pub fn format_step<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| title_case(t.as_ref()))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Format all alternatives, e.g. `Ctrl + Y / Ctrl + Shift + Z`
pub fn format_answer_keys(patterns: &[AnswerPattern]) -> String {
    patterns
        .iter()
        .map(|p| format_step(p.tokens()))
        .collect::<Vec<_>>()
        .join(" / ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_pattern() {
        let patterns = [AnswerPattern::new(["ctrl", "b"])];
        assert_eq!(format_answer_keys(&patterns), "Ctrl + B");
    }

    #[test]
    fn test_alternatives() {
        let patterns = [
            AnswerPattern::new(["ctrl", "b"]),
            AnswerPattern::new(["cmd", "b"]),
        ];
        assert_eq!(format_answer_keys(&patterns), "Ctrl + B / Cmd + B");
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_answer_keys(&[]), "");
    }

    #[test]
    fn test_rest_of_token_unchanged() {
        let patterns = [AnswerPattern::new(["option", "pageDown"])];
        assert_eq!(format_answer_keys(&patterns), "Option + PageDown");
    }

    #[test]
    fn test_symbols_pass_through() {
        assert_eq!(format_step(&["ctrl", "-"]), "Ctrl + -");
        assert_eq!(format_step(&["space"]), "Space");
    }
}
