//! Fallback alert shown when a message could not be delivered
//!
//! The phone number is the actionable part of the alert, so it is
//! highlighted and never broken across lines.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Padding, Paragraph},
    Frame,
};

const ALERT_TITLE: &str = " Message Not Sent ";
const MAX_WIDTH: u16 = 60;
/// Columns of padding inside each side border
const PADDING: u16 = 2;

/// One word of the alert body
#[derive(Debug, Clone, Copy, PartialEq)]
struct Word<'a> {
    text: &'a str,
    style: Style,
    /// Written directly after the previous word, e.g. trailing punctuation
    glued: bool,
}

fn phone_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Split `message` into words, keeping `phone` as a single styled word
fn words<'a>(message: &'a str, phone: &'a str) -> Vec<Word<'a>> {
    let runs: Vec<(&str, Style, bool)> = match message.split_once(phone) {
        Some((before, after)) if !phone.is_empty() => vec![
            (before, Style::default(), false),
            (phone, phone_style(), true),
            (after, Style::default(), false),
        ],
        _ => vec![(message, Style::default(), false)],
    };

    let mut words = Vec::new();
    let mut space_pending = false;
    for (text, style, whole) in runs {
        if whole {
            words.push(Word {
                text,
                style,
                glued: !space_pending && !words.is_empty(),
            });
            space_pending = false;
            continue;
        }

        let mut rest = text;
        loop {
            let trimmed = rest.trim_start();
            space_pending |= trimmed.len() != rest.len();
            if trimmed.is_empty() {
                break;
            }
            let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
            words.push(Word {
                text: &trimmed[..end],
                style,
                glued: !space_pending && !words.is_empty(),
            });
            space_pending = false;
            rest = &trimmed[end..];
        }
    }
    words
}

/// Greedy wrap; glued words always stay on the line of the word before them
fn wrap(words: &[Word<'_>], max_width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut width = 0;

    for word in words {
        let len = word.text.chars().count();
        if !word.glued && !current.is_empty() {
            if width + 1 + len > max_width {
                lines.push(Line::from(std::mem::take(&mut current)));
                width = 0;
            } else {
                current.push(Span::raw(" "));
                width += 1;
            }
        }
        current.push(Span::styled(word.text.to_string(), word.style));
        width += len;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// Body lines of the alert for a given inner width
fn body_lines(message: &str, phone: &str, max_width: usize) -> Vec<Line<'static>> {
    wrap(&words(message, phone), max_width.max(1))
}

fn hint_line() -> Line<'static> {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(" to dismiss"),
    ])
}

/// Area of `width` x `height` centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Render the alert overlay centered on the screen
pub fn render_alert(frame: &mut Frame, message: &str, phone: &str) {
    let area = frame.area();
    let chrome = 2 + 2 * PADDING;
    let inner_max = MAX_WIDTH.min(area.width).saturating_sub(chrome) as usize;

    let mut lines = body_lines(message, phone, inner_max);
    let hint = hint_line();
    let content_width = lines
        .iter()
        .map(Line::width)
        .chain([hint.width(), ALERT_TITLE.chars().count()])
        .max()
        .unwrap_or(0) as u16;
    lines.push(Line::from(""));
    lines.push(hint);

    let width = (content_width + chrome).min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let dialog_area = centered(area, width, height);

    let block = Block::bordered()
        .title(Line::from(ALERT_TITLE).centered())
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::Red))
        .padding(Padding::horizontal(PADDING))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(Paragraph::new(lines).block(block), dialog_area);
}
