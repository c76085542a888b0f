//! Shortcut Quiz
//!
//! Terminal quiz for learning keyboard shortcuts on Mac and Windows.
//!
//! - [`shortcut`]: key press normalization, answer matching and formatting.
//!   Pure functions, the platform is always passed in.
//! - [`quiz`]: questions and the catalog they are loaded from.
//! - [`state`]: view, menu and quiz session state.
//! - [`app`]: key routing between views.
//! - [`platform`] and [`config`]: Mac/Windows selection and persisted settings.
//! - [`ui`]: ratatui rendering and terminal setup.

pub mod app;
pub mod config;
pub mod platform;
pub mod quiz;
pub mod shortcut;
pub mod state;
pub mod ui;
