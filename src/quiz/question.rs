//! Quiz question definitions

use crate::shortcut::{AnswerPattern, AnswerPatternSet};
use serde::{Deserialize, Serialize};

/// Accepted answers per platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(default)]
    pub windows: AnswerPatternSet,
    #[serde(default)]
    pub mac: AnswerPatternSet,
}

/// A single shortcut question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutQuestion {
    pub id: u32,
    pub name: String,
    /// How often the shortcut is used in practice ("High", "Medium", ...)
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub keys: KeyBindings,
}

impl ShortcutQuestion {
    /// Accepted answers for the given platform
    pub fn answers(&self, is_mac: bool) -> &AnswerPatternSet {
        if is_mac {
            &self.keys.mac
        } else {
            &self.keys.windows
        }
    }

    /// All patterns across both platforms
    pub fn all_patterns(&self) -> impl Iterator<Item = &AnswerPattern> {
        self.keys.windows.iter().chain(self.keys.mac.iter())
    }
}

/// Accepted answers for an optional question; empty when there is none
pub fn required_keys(question: Option<&ShortcutQuestion>, is_mac: bool) -> &[AnswerPattern] {
    question
        .map(|q| q.answers(is_mac).patterns())
        .unwrap_or(&[])
}
