//! Quiz session state for test and practice runs

use crate::quiz::{QuestionCatalog, ShortcutQuestion};
use crate::shortcut::{format_answer_keys, judge, key_names, KeyNames, KeyPress, Verdict};

/// Which kind of run the session is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    /// Every question once, scored
    Test,
    /// Answers shown, retry until correct, loops forever
    Practice,
}

impl QuizMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Test => "Test",
            Self::Practice => "Practice",
        }
    }
}

/// Feedback for the most recent key press
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    Waiting,
    /// Keys held so far are the start of a correct answer
    Partial,
    /// The previous question was answered correctly
    Correct { question: String },
    /// The keys were wrong; `expected` is the formatted answer
    Incorrect { question: String, expected: String },
}

/// Outcome of one question in a test run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionResult {
    /// Index into the catalog
    pub question_index: usize,
    pub correct: bool,
    /// Key presses judged for this question, including the final one
    pub attempts: u32,
}

/// A single test or practice run over the catalog
#[derive(Debug)]
pub struct QuizSession {
    pub mode: QuizMode,
    order: Vec<usize>,
    position: usize,
    shuffle: bool,
    pub results: Vec<QuestionResult>,
    pub feedback: Feedback,
    /// Keys of the last judged press, for display
    pub last_keys: KeyNames,
    attempts: u32,
    /// Completed passes over the question list (practice only)
    pub laps: u32,
}

impl QuizSession {
    /// Create a session asking questions in `order` (catalog indices)
    pub fn new(mode: QuizMode, order: Vec<usize>, shuffle: bool) -> Self {
        Self {
            mode,
            order,
            position: 0,
            shuffle,
            results: Vec::new(),
            feedback: Feedback::Waiting,
            last_keys: KeyNames::new(),
            attempts: 0,
            laps: 0,
        }
    }

    /// Catalog index of the question being asked
    pub fn current_index(&self) -> Option<usize> {
        self.order.get(self.position).copied()
    }

    pub fn current<'a>(&self, catalog: &'a QuestionCatalog) -> Option<&'a ShortcutQuestion> {
        self.current_index().and_then(|i| catalog.get(i))
    }

    /// 1-based number of the current question
    pub fn question_number(&self) -> usize {
        (self.position + 1).min(self.total())
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    /// Wrong presses on the current question
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.order.len()
    }

    pub fn score(&self) -> usize {
        self.results.iter().filter(|r| r.correct).count()
    }

    pub fn missed(&self) -> impl Iterator<Item = &QuestionResult> {
        self.results.iter().filter(|r| !r.correct)
    }

    /// Judge a key press against the current question
    ///
    /// Returns `None` when the press carries no key names or the session is
    /// already finished.
    pub fn answer(
        &mut self,
        press: &KeyPress,
        catalog: &QuestionCatalog,
        is_mac: bool,
    ) -> Option<Verdict> {
        let question_index = self.current_index()?;
        let question = catalog.get(question_index)?;

        let observed = key_names(press, is_mac);
        if observed.is_empty() {
            return None;
        }

        let answers = question.answers(is_mac);
        let verdict = judge(press, answers, is_mac);
        tracing::debug!(
            "Question {} judged {:?} for keys {:?}",
            question.id,
            verdict,
            observed.as_slice()
        );
        self.last_keys = observed;

        match verdict {
            Verdict::Correct => {
                self.attempts += 1;
                self.record(question_index, self.attempts == 1);
                self.feedback = Feedback::Correct {
                    question: question.name.clone(),
                };
                self.advance(catalog);
            }
            Verdict::Partial => {
                self.feedback = Feedback::Partial;
            }
            Verdict::Incorrect => {
                self.attempts += 1;
                self.feedback = Feedback::Incorrect {
                    question: question.name.clone(),
                    expected: format_answer_keys(answers.patterns()),
                };
                if self.mode == QuizMode::Test {
                    self.record(question_index, false);
                    self.advance(catalog);
                }
            }
        }

        Some(verdict)
    }

    fn record(&mut self, question_index: usize, correct: bool) {
        self.results.push(QuestionResult {
            question_index,
            correct,
            attempts: self.attempts,
        });
    }

    fn advance(&mut self, catalog: &QuestionCatalog) {
        self.attempts = 0;
        self.position += 1;

        if self.mode == QuizMode::Practice && self.is_finished() && !self.order.is_empty() {
            self.laps += 1;
            self.position = 0;
            if self.shuffle {
                self.order = catalog.shuffled_order(&mut rand::rng());
            }
            tracing::debug!("Practice lap {} complete", self.laps);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> QuestionCatalog {
        QuestionCatalog::builtin().unwrap()
    }

    fn ctrl(c: char) -> KeyPress {
        KeyPress::new(c.to_string(), format!("Key{}", c.to_ascii_uppercase())).with_ctrl()
    }

    fn cmd(c: char) -> KeyPress {
        KeyPress::new(c.to_string(), format!("Key{}", c.to_ascii_uppercase())).with_meta()
    }

    #[test]
    fn test_new_session_starts_at_first_question() {
        let catalog = catalog();
        let session = QuizSession::new(QuizMode::Test, catalog.ordered(), false);
        assert_eq!(session.current(&catalog).unwrap().name, "Bold text");
        assert_eq!(session.question_number(), 1);
        assert_eq!(session.total(), 4);
        assert!(!session.is_finished());
        assert_eq!(session.feedback, Feedback::Waiting);
    }

    #[test]
    fn test_correct_answer_advances() {
        let catalog = catalog();
        let mut session = QuizSession::new(QuizMode::Test, catalog.ordered(), false);

        let verdict = session.answer(&ctrl('b'), &catalog, false);

        assert_eq!(verdict, Some(Verdict::Correct));
        assert_eq!(session.current(&catalog).unwrap().name, "Copy");
        assert_eq!(session.score(), 1);
        assert_eq!(
            session.feedback,
            Feedback::Correct {
                question: "Bold text".to_string()
            }
        );
    }

    #[test]
    fn test_mac_answers() {
        let catalog = catalog();
        let mut session = QuizSession::new(QuizMode::Test, catalog.ordered(), false);

        assert_eq!(
            session.answer(&ctrl('b'), &catalog, true),
            Some(Verdict::Incorrect)
        );
        assert_eq!(
            session.answer(&cmd('c'), &catalog, true),
            Some(Verdict::Correct)
        );
    }

    #[test]
    fn test_partial_does_not_advance() {
        let catalog = catalog();
        let mut session = QuizSession::new(QuizMode::Test, catalog.ordered(), false);
        let press = KeyPress::new("Control", "ControlLeft").with_ctrl();

        assert_eq!(session.answer(&press, &catalog, false), Some(Verdict::Partial));
        assert_eq!(session.feedback, Feedback::Partial);
        assert_eq!(session.question_number(), 1);
        assert!(session.results.is_empty());
    }

    #[test]
    fn test_wrong_answer_in_test_records_miss_and_advances() {
        let catalog = catalog();
        let mut session = QuizSession::new(QuizMode::Test, catalog.ordered(), false);

        assert_eq!(
            session.answer(&ctrl('i'), &catalog, false),
            Some(Verdict::Incorrect)
        );
        assert_eq!(session.question_number(), 2);
        assert_eq!(session.score(), 0);
        assert_eq!(session.missed().count(), 1);
        assert_eq!(
            session.feedback,
            Feedback::Incorrect {
                question: "Bold text".to_string(),
                expected: "Ctrl + B".to_string(),
            }
        );
    }

    #[test]
    fn test_test_run_finishes() {
        let catalog = catalog();
        let mut session = QuizSession::new(QuizMode::Test, catalog.ordered(), false);

        for c in ['b', 'c', 'x', 'v'] {
            session.answer(&ctrl(c), &catalog, false);
        }

        assert!(session.is_finished());
        assert_eq!(session.score(), 2);
        let missed: Vec<_> = session.missed().map(|r| r.question_index).collect();
        assert_eq!(missed, vec![2, 3]);
        assert!(session.current(&catalog).is_none());
        assert_eq!(session.answer(&ctrl('x'), &catalog, false), None);
        assert_eq!(session.question_number(), 4);
    }

    #[test]
    fn test_practice_retries_until_correct() {
        let catalog = catalog();
        let mut session = QuizSession::new(QuizMode::Practice, catalog.ordered(), false);

        session.answer(&ctrl('i'), &catalog, false);
        session.answer(&ctrl('u'), &catalog, false);
        assert_eq!(session.question_number(), 1);
        assert_eq!(session.attempts(), 2);

        session.answer(&ctrl('b'), &catalog, false);
        assert_eq!(session.question_number(), 2);
        assert_eq!(session.attempts(), 0);
        assert_eq!(
            session.results,
            vec![QuestionResult {
                question_index: 0,
                correct: false,
                attempts: 3,
            }]
        );
    }

    #[test]
    fn test_practice_wraps_around() {
        let catalog = catalog();
        let mut session = QuizSession::new(QuizMode::Practice, catalog.ordered(), false);

        for c in ['b', 'c', 'v', 'x'] {
            session.answer(&ctrl(c), &catalog, false);
        }

        assert!(!session.is_finished());
        assert_eq!(session.laps, 1);
        assert_eq!(session.current(&catalog).unwrap().name, "Bold text");
    }

    #[test]
    fn test_practice_wrap_with_shuffle_keeps_all_questions() {
        let catalog = catalog();
        let mut session = QuizSession::new(QuizMode::Practice, catalog.ordered(), true);

        for c in ['b', 'c', 'v', 'x'] {
            session.answer(&ctrl(c), &catalog, false);
        }

        let mut order = session.order.clone();
        order.sort_unstable();
        assert_eq!(order, catalog.ordered());
        assert_eq!(session.question_number(), 1);
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let catalog = catalog();
        let mut session = QuizSession::new(QuizMode::Test, catalog.ordered(), false);

        assert_eq!(session.answer(&KeyPress::default(), &catalog, false), None);
        assert_eq!(session.question_number(), 1);
        assert_eq!(session.feedback, Feedback::Waiting);
    }

    #[test]
    fn test_last_keys_recorded() {
        let catalog = catalog();
        let mut session = QuizSession::new(QuizMode::Test, catalog.ordered(), false);
        session.answer(&ctrl('q').with_shift(), &catalog, false);
        assert_eq!(
            session.last_keys.iter().collect::<Vec<_>>(),
            vec!["ctrl", "shift", "q"]
        );
    }

    #[test]
    fn test_empty_order_is_finished() {
        let session = QuizSession::new(QuizMode::Practice, Vec::new(), false);
        assert!(session.is_finished());
        assert_eq!(session.question_number(), 0);
    }
}
