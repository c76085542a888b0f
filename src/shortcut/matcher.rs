//! Matching observed key names against answer patterns

use super::key_press::KeyPress;
use super::normalize::{key_names, KeyNames};
use super::pattern::{AnswerPattern, AnswerPatternSet};

/// How an observation is compared with a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Same tokens, same order, same length
    Exact,
    /// Observation is a leading part of the pattern
    Prefix,
}

/// Result of judging one key press against a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    /// Correct so far, the chord is not complete yet
    Partial,
    Incorrect,
}

fn tokens_eq(observed: &str, expected: &str) -> bool {
    observed.eq_ignore_ascii_case(expected)
}

/// True iff `observed` has the same tokens as `pattern`, in the same order
pub fn matches_exactly(observed: &KeyNames, pattern: &AnswerPattern) -> bool {
    if pattern.is_degenerate() || observed.len() != pattern.len() {
        return false;
    }
    observed
        .iter()
        .zip(pattern.tokens())
        .all(|(o, e)| tokens_eq(o, e))
}

/// True iff every observed token equals the pattern token at the same index
pub fn matches_as_prefix(observed: &KeyNames, pattern: &AnswerPattern) -> bool {
    if pattern.is_degenerate() || observed.len() > pattern.len() {
        return false;
    }
    observed
        .iter()
        .zip(pattern.tokens())
        .all(|(o, e)| tokens_eq(o, e))
}

/// True iff any alternative in `patterns` matches under `mode`
pub fn matches_any(observed: &KeyNames, patterns: &AnswerPatternSet, mode: MatchMode) -> bool {
    patterns.iter().any(|pattern| match mode {
        MatchMode::Exact => matches_exactly(observed, pattern),
        MatchMode::Prefix => matches_as_prefix(observed, pattern),
    })
}

/// Whether a key press is a complete, correct answer
pub fn check_answer(event: &KeyPress, patterns: &AnswerPatternSet, is_mac: bool) -> bool {
    matches_any(&key_names(event, is_mac), patterns, MatchMode::Exact)
}

/// Whether a key press is on the way to a correct answer
pub fn is_any_prefix_match(event: &KeyPress, patterns: &AnswerPatternSet, is_mac: bool) -> bool {
    matches_any(&key_names(event, is_mac), patterns, MatchMode::Prefix)
}

/// Judge a key press: a complete answer first, then a partial one
pub fn judge(event: &KeyPress, patterns: &AnswerPatternSet, is_mac: bool) -> Verdict {
    if check_answer(event, patterns, is_mac) {
        Verdict::Correct
    } else if is_any_prefix_match(event, patterns, is_mac) {
        Verdict::Partial
    } else {
        Verdict::Incorrect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed(tokens: &[&str]) -> KeyNames {
        tokens.iter().copied().collect()
    }

    fn pattern(tokens: &[&str]) -> AnswerPattern {
        AnswerPattern::new(tokens.iter().copied())
    }

    fn set(patterns: &[&[&str]]) -> AnswerPatternSet {
        AnswerPatternSet::new(patterns.iter().map(|p| pattern(p)).collect())
    }

    mod exact_tests {
        use super::*;

        #[test]
        fn test_identical_tokens_match() {
            assert!(matches_exactly(&observed(&["ctrl", "b"]), &pattern(&["ctrl", "b"])));
        }

        #[test]
        fn test_order_matters() {
            assert!(!matches_exactly(&observed(&["b", "ctrl"]), &pattern(&["ctrl", "b"])));
        }

        #[test]
        fn test_length_must_match() {
            assert!(!matches_exactly(&observed(&["ctrl"]), &pattern(&["ctrl", "b"])));
            assert!(!matches_exactly(
                &observed(&["ctrl", "shift", "b"]),
                &pattern(&["ctrl", "b"])
            ));
        }

        #[test]
        fn test_case_insensitive() {
            assert!(matches_exactly(&observed(&["ctrl", "b"]), &pattern(&["Ctrl", "B"])));
        }

        #[test]
        fn test_degenerate_pattern_never_matches() {
            assert!(!matches_exactly(&observed(&["ctrl"]), &pattern(&["ctrl"])));
            assert!(!matches_exactly(&observed(&[]), &pattern(&[])));
        }
    }

    mod prefix_tests {
        use super::*;

        #[test]
        fn test_leading_modifier_is_prefix() {
            assert!(matches_as_prefix(
                &observed(&["ctrl"]),
                &pattern(&["ctrl", "shift", "b"])
            ));
        }

        #[test]
        fn test_mismatch_at_index() {
            assert!(!matches_as_prefix(
                &observed(&["ctrl", "x"]),
                &pattern(&["ctrl", "shift", "b"])
            ));
        }

        #[test]
        fn test_full_pattern_is_prefix() {
            assert!(matches_as_prefix(
                &observed(&["ctrl", "shift", "b"]),
                &pattern(&["ctrl", "shift", "b"])
            ));
        }

        #[test]
        fn test_longer_observation_is_not_prefix() {
            assert!(!matches_as_prefix(
                &observed(&["ctrl", "shift", "b"]),
                &pattern(&["ctrl", "b"])
            ));
        }

        #[test]
        fn test_degenerate_pattern_never_matches() {
            assert!(!matches_as_prefix(&observed(&["ctrl"]), &pattern(&["ctrl", "shift"])));
        }
    }

    mod any_tests {
        use super::*;

        #[test]
        fn test_empty_set_is_false() {
            let empty = AnswerPatternSet::default();
            assert!(!matches_any(&observed(&["ctrl", "b"]), &empty, MatchMode::Exact));
            assert!(!matches_any(&observed(&["ctrl"]), &empty, MatchMode::Prefix));
        }

        #[test]
        fn test_second_alternative_matches() {
            let redo = set(&[&["ctrl", "y"], &["ctrl", "shift", "z"]]);
            assert!(matches_any(
                &observed(&["ctrl", "shift", "z"]),
                &redo,
                MatchMode::Exact
            ));
            assert!(matches_any(
                &observed(&["ctrl", "shift"]),
                &redo,
                MatchMode::Prefix
            ));
            assert!(!matches_any(&observed(&["ctrl", "z"]), &redo, MatchMode::Exact));
        }
    }

    mod judge_tests {
        use super::*;

        #[test]
        fn test_check_answer_windows() {
            let bold = set(&[&["ctrl", "b"]]);
            let press = KeyPress::new("b", "KeyB").with_ctrl();
            assert!(check_answer(&press, &bold, false));
        }

        #[test]
        fn test_check_answer_mac() {
            let bold = set(&[&["cmd", "b"]]);
            let press = KeyPress::new("b", "KeyB").with_meta();
            assert!(check_answer(&press, &bold, true));
            assert!(!check_answer(&press, &bold, false));
        }

        #[test]
        fn test_prefix_with_modifier_key_press() {
            let bold = set(&[&["ctrl", "b"]]);
            let press = KeyPress::new("Control", "ControlLeft").with_ctrl();
            assert!(is_any_prefix_match(&press, &bold, false));
            assert!(!check_answer(&press, &bold, false));
        }

        #[test]
        fn test_verdicts() {
            let bold = set(&[&["ctrl", "b"]]);
            assert_eq!(
                judge(&KeyPress::new("b", "KeyB").with_ctrl(), &bold, false),
                Verdict::Correct
            );
            assert_eq!(
                judge(&KeyPress::new("Control", "ControlLeft").with_ctrl(), &bold, false),
                Verdict::Partial
            );
            assert_eq!(
                judge(&KeyPress::new("i", "KeyI").with_ctrl(), &bold, false),
                Verdict::Incorrect
            );
            assert_eq!(
                judge(&KeyPress::new("b", "KeyB").with_ctrl(), &AnswerPatternSet::default(), false),
                Verdict::Incorrect
            );
        }
    }
}
