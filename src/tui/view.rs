//! Pure rendering: map App state to ratatui widget trees.
//!
//! Everything shown on screen is derived from the session on each
//! draw — nothing is cached between frames. The only effect is
//! `Frame::render_widget()` which writes to the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::content::{DISCUSSION_PROMPTS, Item};
use crate::engine::{ItemMark, Session};

use super::state::App;
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the quiz screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Header, instructions, items, primary action, optional dashboard, help
    let dashboard_height = if app.session.teacher_mode() {
        DISCUSSION_PROMPTS.len() as u16 + 2
    } else {
        0
    };

    let chunks = Layout::vertical([
        Constraint::Length(2),                // header
        Constraint::Length(3),                // instructions
        Constraint::Min(0),                   // item list
        Constraint::Length(2),                // primary action hint
        Constraint::Length(dashboard_height), // teacher dashboard
        Constraint::Length(1),                // help line
    ])
    .split(area);

    frame.render_widget(render_header(&app.session), chunks[0]);
    frame.render_widget(render_instructions(&app.session), chunks[1]);
    render_items(app, frame, chunks[2]);
    frame.render_widget(render_primary_action(&app.session), chunks[3]);
    if app.session.teacher_mode() {
        frame.render_widget(render_dashboard(), chunks[4]);
    }
    frame.render_widget(render_help(&app.session), chunks[5]);
}

// ============================================================================
// HEADER
// ============================================================================

/// App name, level number/title, and the running score.
fn render_header(session: &Session) -> Paragraph<'static> {
    let (number, total) = session.progress();
    let level = session.current_level();

    let lines = vec![
        Line::from(vec![
            Span::styled("Connected Quest", theme::STYLE_TITLE),
            Span::styled(
                format!("    Score: {}", session.score()),
                theme::STYLE_SCORE,
            ),
        ]),
        Line::from(Span::styled(
            format!("Level {}/{}: {}", number, total, level.title),
            theme::STYLE_DIM,
        )),
    ];

    Paragraph::new(lines)
}

fn render_instructions(session: &Session) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(""),
        Line::from(session.current_level().instructions.clone()),
    ])
    .wrap(Wrap { trim: false })
}

// ============================================================================
// ITEM LIST
// ============================================================================

fn render_items(app: &App, frame: &mut Frame, area: Rect) {
    let level = app.session.current_level();

    let mut lines: Vec<Line> = Vec::new();
    for (i, item) in level.items.iter().enumerate() {
        let mark = app.session.item_mark(item);
        let spans = item_spans(item, mark);

        let line = if i == app.cursor {
            Line::from(spans).style(theme::STYLE_CURSOR)
        } else {
            Line::from(spans)
        };
        lines.push(line);
    }

    // Scroll: if the cursor is beyond the visible area, offset the view
    let visible_height = area.height as usize;
    let scroll_offset = if app.cursor >= visible_height {
        app.cursor - visible_height + 1
    } else {
        0
    };

    let list = Paragraph::new(lines).scroll((scroll_offset as u16, 0));
    frame.render_widget(list, area);
}

/// One item row: checkbox, label, and the state marker on the right.
fn item_spans(item: &Item, mark: ItemMark) -> Vec<Span<'static>> {
    let checkbox = match mark {
        ItemMark::Selected => Span::styled("[x] ", theme::STYLE_CHECKED),
        ItemMark::NotSelected => Span::styled("[ ] ", theme::STYLE_UNCHECKED),
        // After submission the checkboxes give way to the answer key.
        ItemMark::Correct | ItemMark::Wrong => Span::raw("    "),
    };

    let marker = match mark {
        ItemMark::Selected => Span::styled("  Selected", theme::STYLE_SELECTED),
        ItemMark::NotSelected => Span::styled("  Not selected", theme::STYLE_DIM),
        ItemMark::Correct => Span::styled("  ✔", theme::STYLE_CORRECT),
        ItemMark::Wrong => Span::styled("  ✖", theme::STYLE_WRONG),
    };

    vec![
        Span::raw("  "),
        checkbox,
        Span::styled(item.label.clone(), theme::STYLE_IMPORTANT),
        marker,
    ]
}

// ============================================================================
// PRIMARY ACTION
// ============================================================================

/// The single primary button from the original layout: Submit while
/// playing, Next Level once scored, Play Again after the final level.
fn render_primary_action(session: &Session) -> Paragraph<'static> {
    let label = if !session.completed() {
        "[Enter] Submit"
    } else if session.is_final_level_complete() {
        "[Enter] Play Again"
    } else {
        "[Enter] Next Level"
    };

    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", label), theme::STYLE_SELECTED)),
    ])
}

// ============================================================================
// TEACHER DASHBOARD
// ============================================================================

fn render_dashboard() -> Paragraph<'static> {
    let mut lines = vec![Line::from(Span::styled(
        "  Teacher Dashboard — monitor learning outcomes and encourage discussion:",
        theme::STYLE_DASHBOARD,
    ))];
    for prompt in DISCUSSION_PROMPTS {
        lines.push(Line::from(vec![
            Span::styled("   • ", theme::STYLE_DASHBOARD),
            Span::raw(prompt),
        ]));
    }
    lines.push(Line::from(""));

    Paragraph::new(lines).wrap(Wrap { trim: false })
}

// ============================================================================
// HELP LINE
// ============================================================================

fn render_help(session: &Session) -> Paragraph<'static> {
    let help_text = if session.completed() {
        "[Enter] continue  [r] restart  [t] dashboard  [q] quit"
    } else {
        "[j/k] move  [Space] toggle  [Enter] submit  [r] restart  [t] dashboard  [q] quit"
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// TESTS
// ============================================================================
