//! Interactive terminal interface for the quiz.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Action)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `theme`: style constants
//! - `run`: effects (terminal lifecycle, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
