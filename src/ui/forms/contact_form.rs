//! Contact form rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::forms::SUBMIT_ROW;
use crate::state::Form;
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the success acknowledgment banner
const SUCCESS_HEIGHT: u16 = 3;

/// Draw the contact form, scrolled so the active row stays visible
pub fn draw(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let contact = &mut app.state.contact;
    if contact.take_scroll_request() {
        app.state.form_scroll = 0;
    }

    let mut y = inner.y;
    let bottom = inner.y + inner.height;

    if contact.success_visible && app.state.form_scroll == 0 {
        let banner_height = SUCCESS_HEIGHT.min(bottom.saturating_sub(y));
        draw_success_banner(frame, Rect { height: banner_height, ..inner });
        y += banner_height;
    }

    let heights: Vec<u16> = contact
        .form
        .fields()
        .iter()
        .map(|f| field_height(f))
        .chain(std::iter::once(BUTTON_HEIGHT))
        .collect();

    let active = contact.form.active_field();
    let first = first_visible_row(
        &heights,
        app.state.form_scroll,
        active,
        bottom.saturating_sub(y),
    );
    app.state.form_scroll = first;

    let contact = &app.state.contact;
    for (index, height) in heights.iter().enumerate().skip(first) {
        if y + height > bottom {
            break;
        }
        let row = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: *height,
        };
        if index == SUBMIT_ROW {
            let button = Rect {
                width: inner.width.min(24),
                ..row
            };
            render_submit_button(frame, button, active == SUBMIT_ROW, contact.is_submitting());
        } else if let Some(field) = contact.form.get_field(index) {
            draw_field(frame, row, field, index == active);
        }
        y += height;
    }
}

fn draw_success_banner(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            "✓ Thank you! ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Your message has been sent. We'll get back to you soon."),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(banner, area);
}

/// Pick the first row to draw so that `active` fits in `available` rows.
///
/// Keeps the previous offset when the active row is already visible.
pub fn first_visible_row(heights: &[u16], first: usize, active: usize, available: u16) -> usize {
    let mut first = first.min(active);
    let span = |from: usize| -> u16 { heights[from..=active].iter().sum() };
    while first < active && span(first) > available {
        first += 1;
    }
    first
}
