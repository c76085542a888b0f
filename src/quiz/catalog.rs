//! Question catalog loading and validation

use super::question::ShortcutQuestion;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Questions shipped with the binary
const BUILTIN_QUESTIONS: &str = include_str!("../../data/shortcuts.json");

/// Modifier spellings that never appear in an observation; answers must use
/// `cmd`, `ctrl`, `option` or `alt` instead
const NON_CANONICAL_MODIFIERS: &[&str] = &["meta", "command", "control", "opt", "super", "win"];

/// Errors raised while loading a question file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read question file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid question data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("question id {0} is used more than once")]
    DuplicateId(u32),

    #[error("question {id} has an invalid answer: {pattern}")]
    InvalidPattern { id: u32, pattern: String },

    #[error("question file contains no questions")]
    Empty,
}

/// Immutable, validated list of questions
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<ShortcutQuestion>,
}

impl QuestionCatalog {
    /// The built-in question set
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    /// Load questions from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            "Loaded {} questions from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let questions: Vec<ShortcutQuestion> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// Validate and wrap a list of questions
    pub fn new(questions: Vec<ShortcutQuestion>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateId(question.id));
            }

            let per_platform = [(false, &question.keys.windows), (true, &question.keys.mac)];
            for (is_mac, patterns) in per_platform {
                for pattern in patterns {
                    let misspelled = pattern.tokens().iter().any(|token| {
                        NON_CANONICAL_MODIFIERS
                            .iter()
                            .any(|m| m.eq_ignore_ascii_case(token))
                    });
                    if misspelled
                        || pattern.main_keys().count() > 1
                        || !pattern.is_reachable(is_mac)
                    {
                        return Err(CatalogError::InvalidPattern {
                            id: question.id,
                            pattern: pattern.tokens().join("+"),
                        });
                    }
                    if pattern.is_degenerate() {
                        tracing::warn!(
                            "Question {} has an answer without a main key ({:?}); it can never be answered",
                            question.id,
                            pattern.tokens()
                        );
                    }
                }
            }
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[ShortcutQuestion] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&ShortcutQuestion> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question indices in catalog order
    pub fn ordered(&self) -> Vec<usize> {
        (0..self.questions.len()).collect()
    }

    /// Question indices in random order
    pub fn shuffled_order<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        let mut order = self.ordered();
        order.shuffle(rng);
        order
    }
}
