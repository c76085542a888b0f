//! Accepted answer patterns

use super::normalize::{is_modifier, modifier_order};
use serde::{Deserialize, Serialize};

/// One accepted key combination, e.g. `["ctrl", "shift", "b"]`
///
/// Token order is the display order: modifiers first, main key last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerPattern(Vec<String>);

impl AnswerPattern {
    pub fn new<S: Into<String>>(tokens: impl IntoIterator<Item = S>) -> Self {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tokens that are not modifiers
    pub fn main_keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str).filter(|t| !is_modifier(t))
    }

    /// A pattern without a main key can never be answered
    pub fn is_degenerate(&self) -> bool {
        self.main_keys().next().is_none()
    }

    /// Whether a key press on this platform can produce these tokens
    ///
    /// Modifiers must be ones the platform reports, in the order they are
    /// reported, and a main key may only come last.
    pub fn is_reachable(&self, is_mac: bool) -> bool {
        let order = modifier_order(is_mac);
        let mut next_rank = 0;

        for (idx, token) in self.0.iter().enumerate() {
            if !is_modifier(token) {
                if idx + 1 != self.0.len() {
                    return false;
                }
                continue;
            }
            match order.iter().position(|m| m.eq_ignore_ascii_case(token)) {
                Some(rank) if rank >= next_rank => next_rank = rank + 1,
                _ => return false,
            }
        }
        true
    }
}

/// Alternative patterns for one question and platform
///
/// Deserializes from either a single flat pattern (`["ctrl", "b"]`) or a list
/// of patterns (`[["ctrl", "b"], ["ctrl", "shift", "b"]]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PatternSetRepr")]
pub struct AnswerPatternSet(Vec<AnswerPattern>);

#[derive(Deserialize)]
#[serde(untagged)]
enum PatternSetRepr {
    Many(Vec<AnswerPattern>),
    Single(AnswerPattern),
}

impl From<PatternSetRepr> for AnswerPatternSet {
    fn from(repr: PatternSetRepr) -> Self {
        match repr {
            PatternSetRepr::Many(patterns) => Self(patterns),
            PatternSetRepr::Single(pattern) => Self(vec![pattern]),
        }
    }
}

impl AnswerPatternSet {
    pub fn new(patterns: Vec<AnswerPattern>) -> Self {
        Self(patterns)
    }

    pub fn patterns(&self) -> &[AnswerPattern] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnswerPattern> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a AnswerPatternSet {
    type Item = &'a AnswerPattern;
    type IntoIter = std::slice::Iter<'a, AnswerPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
