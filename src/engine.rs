//! Quiz session state machine.
//!
//! A [`Session`] owns all mutable game state over a read-only level set
//! supplied at construction. Every public operation is total: guards
//! are silent no-ops, never errors. The rendering layer reads derived
//! state ([`Session::item_mark`], [`Session::is_final_level_complete`])
//! and re-renders after each operation; nothing derived is stored.

use std::collections::BTreeSet;

use crate::content::{Item, Level};

// ============================================================================
// SCORING
// ============================================================================

/// Points gained for selecting a safe item.
const SAFE_PICK: i32 = 2;

/// Points lost for selecting an unsafe item (within a round only —
/// the round total is floored at zero before it touches the score).
const UNSAFE_PICK: i32 = -1;

// ============================================================================
// DERIVED DISPLAY STATE
// ============================================================================

/// What the rendering surface should show next to an item.
///
/// Before submission the mark reflects selection membership. After
/// submission it reflects the answer key alone: a safe item shows
/// `Correct` whether or not the player picked it. The original game
/// behaves this way and the feedback screen doubles as the answer
/// key reveal, so it is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemMark {
    NotSelected,
    Selected,
    Correct,
    Wrong,
}

// ============================================================================
// SESSION
// ============================================================================

/// One playthrough of a level set.
///
/// Mutated only through the five named operations; everything else
/// is read-only access or derivation.
#[derive(Debug, Clone)]
pub struct Session {
    levels: Vec<Level>,
    level_index: usize,
    selected: BTreeSet<String>,
    score: u32,
    completed: bool,
    teacher_mode: bool,
}

impl Session {
    /// Start a fresh session on the given levels.
    ///
    /// The level set must be non-empty and structurally valid — that
    /// is the loading boundary's job (`content::validate_levels`), not
    /// the engine's.
    pub fn new(levels: Vec<Level>) -> Self {
        debug_assert!(!levels.is_empty());
        Session {
            levels,
            level_index: 0,
            selected: BTreeSet::new(),
            score: 0,
            completed: false,
            teacher_mode: false,
        }
    }

    // -- operations ----------------------------------------------------------

    /// Flip an item in or out of the current selection.
    ///
    /// No-op after submission, and for ids that don't belong to the
    /// current level.
    pub fn toggle_select(&mut self, item_id: &str) {
        if self.completed {
            return;
        }
        if !self.current_level().items.iter().any(|it| it.id == item_id) {
            return;
        }
        if !self.selected.remove(item_id) {
            self.selected.insert(item_id.to_string());
        }
    }

    /// Score the current level and lock it.
    ///
    /// Selected safe items earn +2, selected unsafe items cost 1, the
    /// round total is floored at 0 before being added to the running
    /// score. The selection is left intact for the feedback render.
    /// No-op if the level was already submitted.
    pub fn submit_level(&mut self) {
        if self.completed {
            return;
        }
        let mut round: i32 = 0;
        for it in &self.levels[self.level_index].items {
            if self.selected.contains(&it.id) {
                round += if it.safe { SAFE_PICK } else { UNSAFE_PICK };
            }
        }
        self.score += round.max(0) as u32;
        self.completed = true;
    }

    /// Advance to the next level. No-op on the last one.
    ///
    /// Selection and completion reset; score and teacher mode survive.
    pub fn next_level(&mut self) {
        if self.level_index + 1 >= self.levels.len() {
            return;
        }
        self.level_index += 1;
        self.selected.clear();
        self.completed = false;
    }

    /// Back to level one with a zero score. Teacher mode is a display
    /// preference, not game progress, so it survives.
    pub fn restart(&mut self) {
        self.level_index = 0;
        self.selected.clear();
        self.score = 0;
        self.completed = false;
    }

    /// Show or hide the teacher dashboard panel.
    pub fn toggle_teacher_mode(&mut self) {
        self.teacher_mode = !self.teacher_mode;
    }

    // -- reads ---------------------------------------------------------------

    pub fn current_level(&self) -> &Level {
        &self.levels[self.level_index]
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    /// (1-based level number, total levels) for the header line.
    pub fn progress(&self) -> (usize, usize) {
        (self.level_index + 1, self.levels.len())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn teacher_mode(&self) -> bool {
        self.teacher_mode
    }

    pub fn is_selected(&self, item_id: &str) -> bool {
        self.selected.contains(item_id)
    }

    /// The primary action button shows "Play Again" instead of
    /// "Next Level" exactly when this is true.
    pub fn is_final_level_complete(&self) -> bool {
        self.level_index == self.levels.len() - 1 && self.completed
    }

    /// Derived per-item display state. See [`ItemMark`].
    pub fn item_mark(&self, item: &Item) -> ItemMark {
        if self.completed {
            if item.safe { ItemMark::Correct } else { ItemMark::Wrong }
        } else if self.selected.contains(&item.id) {
            ItemMark::Selected
        } else {
            ItemMark::NotSelected
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
