//! Reusable UI components

mod alert;
mod button;

pub use alert::render_alert;
pub use button::{render_sidebar_button, render_submit_button, BUTTON_HEIGHT};
