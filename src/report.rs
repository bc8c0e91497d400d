//! Answer-key catalog formatting for level packs.
//!
//! Pure functions — (levels, OutputFormat) → String. No I/O.
//! This output is teacher-facing (the `levels` subcommand); it reveals
//! the answer key and is never rendered in-game.

use crate::content::Level;

/// Output format for the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Format a level pack for output.
pub fn format_catalog(levels: &[Level], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(levels),
        OutputFormat::Json => format_json(levels),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(levels: &[Level]) -> String {
    let mut out = String::new();

    for (i, level) in levels.iter().enumerate() {
        out.push_str(&format!("=== Level {}: {} ===\n", i + 1, level.title));
        out.push_str(&format!("{}\n", level.instructions));
        out.push('\n');
        for it in &level.items {
            let key = if it.safe { "safe  " } else { "unsafe" };
            out.push_str(&format!("  [{}] {}  {}\n", key, it.id, it.label));
        }
        out.push_str(&format!("Max score: {}\n", level.max_score()));
        out.push('\n');
    }

    out.push_str(&format_summary(levels));
    out
}

fn format_summary(levels: &[Level]) -> String {
    let total_items: usize = levels.iter().map(|l| l.items.len()).sum();
    let total_max: u32 = levels.iter().map(Level::max_score).sum();

    let mut out = String::new();
    out.push_str("=== Summary ===\n");
    out.push_str(&format!("Levels:          {}\n", levels.len()));
    out.push_str(&format!("Items:           {}\n", total_items));
    out.push_str(&format!("Perfect score:   {}\n", total_max));
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(levels: &[Level]) -> String {
    // serde_json::to_string_pretty for readable output
    serde_json::to_string_pretty(levels).unwrap_or_else(|e| {
        // This should never happen with our types, but fail explicitly
        panic!("Failed to serialize levels to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
