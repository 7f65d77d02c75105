//! Weekly store hours view

use crate::app::App;
use crate::state::hours_for;
use chrono::{Datelike, Local, Weekday};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Week as shown in the panel, Monday first
const WEEK: [(Weekday, &str); 7] = [
    (Weekday::Mon, "Monday"),
    (Weekday::Tue, "Tuesday"),
    (Weekday::Wed, "Wednesday"),
    (Weekday::Thu, "Thursday"),
    (Weekday::Fri, "Friday"),
    (Weekday::Sat, "Saturday"),
    (Weekday::Sun, "Sunday"),
];

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let today = Local::now().weekday();

    let mut lines: Vec<Line> = WEEK
        .iter()
        .map(|(weekday, name)| {
            let style = if *weekday == today {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!(" {name:<10}"), style),
                Span::styled(schedule_text(*weekday), style),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {} {}", app.state.hours.today, app.state.hours.status_label()),
        Style::default().fg(if app.state.hours.open_now {
            Color::Green
        } else {
            Color::Red
        }),
    )));

    let block = Block::default()
        .title(" Store Hours ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// One row of the weekly schedule
fn schedule_text(weekday: Weekday) -> String {
    hours_for(weekday).map_or_else(|| "Closed".to_string(), |hours| hours.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_matches_header_format() {
        let today = crate::state::HoursStatus::at(
            chrono::NaiveDate::from_ymd_opt(2026, 10, 20)
                .and_then(|d| d.and_hms_opt(9, 0, 0))
                .expect("valid datetime"),
        );
        assert_eq!(today.today, format!("Today: {}", schedule_text(Weekday::Tue)));
    }

    #[test]
    fn test_schedule_text() {
        assert_eq!(schedule_text(Weekday::Tue), "10:00 AM - 6:00 PM");
        assert_eq!(schedule_text(Weekday::Sat), "10:00 AM - 5:00 PM");
        assert_eq!(schedule_text(Weekday::Sun), "Closed");
    }
}
