pub mod config;
pub mod pricing;
pub mod quote_text;
pub mod clipboard;
mod app_state;
mod app_style;
mod app_actions;
pub mod app;
pub mod ui_theme;
pub mod ui_components;
pub mod ui_panels;
pub mod ui_panel_form;
pub mod ui_panel_results;
pub mod ui_panel_pitch;
