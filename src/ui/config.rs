use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub map_background: Color32,
    pub node_label: Color32,
    pub connected: Color32,
    pub disconnected: Color32,
    pub pending: Color32,
    pub completed: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(180, 190, 255),
        subsection_heading: Color32::from_rgb(118, 75, 162),
        central_panel: Color32::from_rgb(30, 32, 44),
        side_panel: Color32::from_rgb(25, 25, 25),
        map_background: Color32::from_rgb(245, 246, 250),
        node_label: Color32::from_rgb(40, 40, 40),
        connected: Color32::from_rgb(76, 175, 80),
        disconnected: Color32::from_rgb(244, 67, 54),
        pending: Color32::from_rgb(255, 193, 7),
        completed: Color32::from_rgb(76, 175, 80),
    },
    side_panel_width: 320.0,
};
