//! TUI state algebra: pure types, zero effects.
//!
//! The quiz is a single screen, so the model is flat: the engine's
//! [`Session`] plus rendering-surface state that the engine has no
//! business knowing about (the focused item row, the quit flag).
//! The transition function (`update`) and rendering layer (`view`)
//! both program against these types.

use crate::engine::Session;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// `cursor` is which item row has keyboard focus — purely a
/// rendering-surface concern, reset whenever the level changes.
#[derive(Debug)]
pub struct App {
    /// The quiz engine: owns all game state.
    pub session: Session,

    /// Focused item row within the current level.
    pub cursor: usize,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Start a fresh app over an already-validated session.
    pub fn new(session: Session) -> Self {
        App {
            session,
            cursor: 0,
            should_quit: false,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions; the transition
/// function decides what each Action means in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move focus up one item row.
    MoveUp,
    /// Move focus down one item row.
    MoveDown,
    /// Toggle the focused item in/out of the selection.
    ToggleSelect,
    /// Submit the current level for scoring.
    Submit,
    /// The primary button: next level, or play again after the final
    /// level has been scored.
    Advance,
    /// Restart from level one (available anywhere).
    Restart,
    /// Show/hide the teacher dashboard panel.
    TeacherMode,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin_levels;

    #[test]
    fn fresh_app_focuses_first_item() {
        let app = App::new(Session::new(builtin_levels()));
        assert_eq!(app.cursor, 0);
        assert!(!app.should_quit);
        assert_eq!(app.session.level_index(), 0);
    }

    #[test]
    fn action_equality_for_matching() {
        // Actions need Eq for the transition function to pattern-match
        assert_eq!(Action::Submit, Action::Submit);
        assert_ne!(Action::Submit, Action::Advance);
    }
}
