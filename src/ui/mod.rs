//! UI module for rendering the TUI

mod components;
mod forms;
mod header;
mod hours_panel;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let (header_area, sidebar_area, main_area) = layout::create_layout(area);

    header::draw_header(frame, header_area, app);
    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_view {
        View::Contact => forms::draw_contact(frame, main_area, app),
        View::Hours => hours_panel::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Alert overlays everything else
    let contact = &app.state.contact;
    if let Some(message) = &contact.alert {
        components::render_alert(frame, message, contact.fallback_phone());
    }
}
