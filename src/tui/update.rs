//! Pure state transitions: (App, Action) → App.
//!
//! This is the wiring between user intents and the quiz engine.
//! Fully testable without a terminal. Guarded operations (toggling
//! after submission, advancing past the last level) fall through to
//! the engine, which defines them as silent no-ops.

use super::state::{Action, App};

/// Pure state transition function.
///
/// Consumes the current model and produces the next one. The event
/// loop re-renders after every call, so a stale view is never shown.
pub fn update(mut app: App, action: &Action) -> App {
    match action {
        Action::MoveUp => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        Action::MoveDown => {
            let len = app.session.current_level().items.len();
            app.cursor = if len == 0 { 0 } else { (app.cursor + 1).min(len - 1) };
        }
        Action::ToggleSelect => {
            let id = app
                .session
                .current_level()
                .items
                .get(app.cursor)
                .map(|it| it.id.clone());
            if let Some(id) = id {
                app.session.toggle_select(&id);
            }
        }
        Action::Submit => {
            app.session.submit_level();
        }
        Action::Advance => {
            // The original game's single primary button: "Next Level"
            // mid-game, "Play Again" once the final level is scored.
            if app.session.is_final_level_complete() {
                app.session.restart();
            } else if app.session.completed() {
                app.session.next_level();
            }
            // Not submitted yet: the button reads "Submit", Advance
            // means nothing here.
            app.cursor = 0;
        }
        Action::Restart => {
            app.session.restart();
            app.cursor = 0;
        }
        Action::TeacherMode => {
            app.session.toggle_teacher_mode();
        }
        Action::Quit => {
            app.should_quit = true;
        }
    }
    app
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin_levels;
    use crate::engine::Session;

    fn app() -> App {
        App::new(Session::new(builtin_levels()))
    }

    fn play_level_perfectly(mut a: App) -> App {
        let safe: Vec<usize> = a
            .session
            .current_level()
            .items
            .iter()
            .enumerate()
            .filter(|(_, it)| it.safe)
            .map(|(i, _)| i)
            .collect();
        for i in safe {
            a.cursor = i;
            a = update(a, &Action::ToggleSelect);
        }
        update(a, &Action::Submit)
    }

    // -- cursor movement --

    #[test]
    fn cursor_moves_down_and_clamps_at_last_item() {
        let mut a = app();
        let len = a.session.current_level().items.len();
        for _ in 0..len + 3 {
            a = update(a, &Action::MoveDown);
        }
        assert_eq!(a.cursor, len - 1);
    }

    #[test]
    fn cursor_moves_up_and_stops_at_top() {
        let mut a = app();
        a = update(a, &Action::MoveUp);
        assert_eq!(a.cursor, 0);
        a = update(a, &Action::MoveDown);
        a = update(a, &Action::MoveUp);
        assert_eq!(a.cursor, 0);
    }

    // -- selection --

    #[test]
    fn toggle_select_flips_the_focused_item() {
        let mut a = app();
        a = update(a, &Action::MoveDown); // focus "b"
        a = update(a, &Action::ToggleSelect);
        assert!(a.session.is_selected("b"));
        a = update(a, &Action::ToggleSelect);
        assert!(!a.session.is_selected("b"));
    }

    #[test]
    fn toggle_after_submission_changes_nothing() {
        let mut a = app();
        a = update(a, &Action::ToggleSelect); // select "a"
        a = update(a, &Action::Submit);
        a = update(a, &Action::MoveDown);
        a = update(a, &Action::ToggleSelect);
        assert!(!a.session.is_selected("b"));
        assert!(a.session.is_selected("a"));
    }

    // -- submit / advance --

    #[test]
    fn submit_locks_and_scores_the_level() {
        let mut a = app();
        a = update(a, &Action::ToggleSelect); // "a" is safe: +2
        a = update(a, &Action::Submit);
        assert!(a.session.completed());
        assert_eq!(a.session.score(), 2);
    }

    #[test]
    fn advance_before_submission_is_inert() {
        let mut a = app();
        a = update(a, &Action::MoveDown);
        a = update(a, &Action::Advance);
        assert_eq!(a.session.level_index(), 0);
        assert!(!a.session.completed());
        assert_eq!(a.cursor, 0, "cursor still resets to the top");
    }

    #[test]
    fn advance_after_submission_enters_next_level_with_fresh_cursor() {
        let mut a = app();
        a = update(a, &Action::MoveDown);
        a = update(a, &Action::Submit);
        a = update(a, &Action::Advance);
        assert_eq!(a.session.level_index(), 1);
        assert!(!a.session.completed());
        assert_eq!(a.cursor, 0);
    }

    #[test]
    fn advance_on_completed_final_level_restarts() {
        let mut a = app();
        for _ in 0..3 {
            a = play_level_perfectly(a);
            a = update(a, &Action::Advance);
        }
        a = play_level_perfectly(a);
        assert!(a.session.is_final_level_complete());
        assert_eq!(a.session.score(), 20);

        a = update(a, &Action::Advance);
        assert_eq!(a.session.level_index(), 0);
        assert_eq!(a.session.score(), 0);
        assert!(!a.session.completed());
    }

    // -- restart --

    #[test]
    fn restart_works_mid_level_and_resets_cursor() {
        let mut a = app();
        a = play_level_perfectly(a);
        a = update(a, &Action::Advance);
        a = update(a, &Action::MoveDown);
        a = update(a, &Action::Restart);
        assert_eq!(a.session.level_index(), 0);
        assert_eq!(a.session.score(), 0);
        assert_eq!(a.cursor, 0);
    }

    // -- teacher mode --

    #[test]
    fn teacher_mode_toggles_without_touching_progress() {
        let mut a = app();
        a = update(a, &Action::ToggleSelect);
        a = update(a, &Action::TeacherMode);
        assert!(a.session.teacher_mode());
        assert!(a.session.is_selected("a"));

        a = update(a, &Action::Advance);
        assert!(a.session.teacher_mode(), "level transitions never reset it");
        a = update(a, &Action::Restart);
        assert!(a.session.teacher_mode(), "restart never resets it");
    }

    // -- quit --

    #[test]
    fn quit_raises_the_flag() {
        let a = update(app(), &Action::Quit);
        assert!(a.should_quit);
    }
}
