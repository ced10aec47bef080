use eframe::egui::{ComboBox, Context, RichText, Ui, Visuals};

use crate::domain::{GraphModel, StationId};
use crate::ui::config::{UI_CONFIG, UI_TEXT};

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    let uppercase_text = text.into().to_uppercase() + ":";
    RichText::new(uppercase_text)
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Station dropdown. Returns true when the selection changed.
pub fn station_selector(
    ui: &mut Ui,
    id_salt: &str,
    graph: &GraphModel,
    selected: &mut Option<StationId>,
) -> bool {
    let before = *selected;
    let text = selected
        .and_then(|id| graph.station_name(id))
        .unwrap_or(UI_TEXT.select_station_placeholder);

    ComboBox::from_id_salt(id_salt)
        .selected_text(text)
        .width(180.0)
        .show_ui(ui, |ui| {
            for station in graph.stations() {
                ui.selectable_value(selected, Some(station.id), &station.name);
            }
        });

    before != *selected
}
