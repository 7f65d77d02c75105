//! Layout components (header, sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{SubmissionState, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Header height (borders + one line)
const HEADER_HEIGHT: u16 = 3;
const SIDEBAR_WIDTH: u16 = 14;

/// Split the screen into header, sidebar and main content.
/// The bottom line is left for the status bar.
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Body
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[1]);

    (rows[0], body[0], body[1])
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Length(BUTTON_HEIGHT); View::ALL.len()];
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, view) in View::ALL.iter().enumerate() {
        render_sidebar_button(
            frame,
            chunks[idx],
            view.label(),
            app.state.current_view == *view,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Submission indicator
    let indicator = match app.state.contact.state() {
        SubmissionState::Idle => Span::styled(" ● ", Style::default().fg(Color::Green)),
        _ => Span::styled(" ◌ ", Style::default().fg(Color::Yellow)),
    };
    spans.push(indicator);

    spans.push(Span::styled(
        get_view_hints(app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Contact => format!(
            "Tab:next  ←/→:service  {}:send  Esc:dismiss  F2:hours",
            SUBMIT_SHORTCUT
        ),
        View::Hours => "r:refresh  Esc:back  F2:contact".to_string(),
    }
}
