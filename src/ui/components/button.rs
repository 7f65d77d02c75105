//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if is_selected && is_enabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a sidebar button with key and label
pub fn render_sidebar_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
) {
    render_button(frame, area, label, is_selected, true);
}

/// Label of the submit button; swaps to a loading indicator while sending
pub fn submit_label(is_submitting: bool) -> &'static str {
    if is_submitting {
        "⟳ Sending..."
    } else {
        "Send Message"
    }
}

/// Render the form's submit button, disabled while a submission is in flight
pub fn render_submit_button(frame: &mut Frame, area: Rect, is_selected: bool, is_submitting: bool) {
    render_button(
        frame,
        area,
        submit_label(is_submitting),
        is_selected,
        !is_submitting,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label_swaps_while_sending() {
        assert_eq!(submit_label(false), "Send Message");
        assert_eq!(submit_label(true), "⟳ Sending...");
    }
}
