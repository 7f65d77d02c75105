//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a single-line field box takes
const SINGLE_LINE_HEIGHT: u16 = 3;
/// Rows the multiline message box takes
const MULTILINE_HEIGHT: u16 = 6;
/// Row reserved under each field for its error annotation
const ERROR_LINE_HEIGHT: u16 = 1;

/// Total rows needed to draw `field` with its annotation line
pub fn field_height(field: &FormField) -> u16 {
    let body = if field.is_multiline() {
        MULTILINE_HEIGHT
    } else {
        SINGLE_LINE_HEIGHT
    };
    body + ERROR_LINE_HEIGHT
}

/// Draw a form field and, below it, its error annotation if any
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(ERROR_LINE_HEIGHT)])
        .split(area);

    let is_invalid = field.error.is_some();
    let border_style = match (is_invalid, is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let cursor = if is_active { "▌" } else { "" };

    let content = match field.kind {
        FieldKind::Message => {
            let mut lines: Vec<Line> = display_value
                .split('\n')
                .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
                .collect();
            if is_active {
                if let Some(last) = lines.last_mut() {
                    last.spans
                        .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
                }
            }
            Paragraph::new(lines)
        }
        FieldKind::Choice(_) => {
            let arrows = if is_active { ("◀ ", " ▶") } else { ("", "") };
            Paragraph::new(Line::from(vec![
                Span::styled(arrows.0, Style::default().fg(Color::Cyan)),
                Span::styled(display_value, text_style),
                Span::styled(arrows.1, Style::default().fg(Color::Cyan)),
            ]))
        }
        _ => Paragraph::new(Line::from(vec![
            Span::styled(display_value, text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])),
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    if let Some(error) = &field.error {
        let annotation = Paragraph::new(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
        )));
        frame.render_widget(annotation, chunks[1]);
    }
}
