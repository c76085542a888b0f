//! Shortcut matching core
//!
//! Pure functions that turn a key press into canonical key names, compare
//! them against accepted answer patterns and format patterns for display.
//! The platform is always passed in as `is_mac`; nothing here detects it.

mod format;
mod key_press;
mod matcher;
mod normalize;
mod pattern;

pub use format::{format_answer_keys, format_step};
pub use key_press::KeyPress;
pub use matcher::{
    check_answer, is_any_prefix_match, judge, matches_any, matches_as_prefix,
    matches_exactly, MatchMode, Verdict,
};
pub use normalize::{is_modifier, key_names, modifier_order, KeyNames, MODIFIER_KEYS};
pub use pattern::{AnswerPattern, AnswerPatternSet};
