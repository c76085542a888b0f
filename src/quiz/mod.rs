//! Quiz content: questions and the catalog they are loaded into

mod catalog;
mod question;

pub use catalog::{CatalogError, QuestionCatalog};
pub use question::{required_keys, KeyBindings, ShortcutQuestion};
