//! TUI color semantics and style constants.
//!
//! Centralized theme definitions. Pure data — consumed by the
//! rendering layer for visual consistency.
//!
//! Color semantics:
//! - Green: correct answers (post-submission ✔ marks)
//! - Red: wrong answers (post-submission ✖ marks)
//! - Cyan: selected items and keybinding hints
//! - Yellow: the teacher dashboard panel
//! - Dim: de-emphasized (unselected markers, help line)
//! - Bold: important (score, level title)

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Correct answer — green.
pub const STYLE_CORRECT: Style = Style::new().fg(Color::Green);

/// Wrong answer — red.
pub const STYLE_WRONG: Style = Style::new().fg(Color::Red);

/// Selected item / interactive hint — cyan.
pub const STYLE_SELECTED: Style = Style::new().fg(Color::Cyan);

/// Teacher dashboard panel — yellow.
pub const STYLE_DASHBOARD: Style = Style::new().fg(Color::Yellow);

/// De-emphasized text — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Running score in the header.
pub const STYLE_SCORE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Cursor row in the item list.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Checkbox: checked.
pub const STYLE_CHECKED: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Checkbox: unchecked.
pub const STYLE_UNCHECKED: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
