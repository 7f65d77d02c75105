//! Header bar with the shop name and today's hours

use crate::app::App;
use crate::state::HoursStatus;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the header at the top of the screen
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.state.business_name),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
    ];
    spans.extend(hours_spans(&app.state.hours));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Today's hours, the open indicator and the next Friday
fn hours_spans(hours: &HoursStatus) -> Vec<Span<'static>> {
    let status_color = if hours.open_now {
        Color::Green
    } else {
        Color::Red
    };

    vec![
        Span::raw(hours.today.clone()),
        Span::styled(
            format!(" {}", hours.status_label()),
            Style::default().fg(status_color),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Next Friday: {}", hours.next_friday.format("%a %b %-d")),
            Style::default().fg(Color::Gray),
        ),
    ]
}
