//! connected-quest: a terminal quiz game teaching digital-safety skills.

pub mod content;
pub mod engine;
pub mod report;
pub mod tui;
