pub mod alert_bar;
pub mod location_panel;
pub mod status_buttons;
