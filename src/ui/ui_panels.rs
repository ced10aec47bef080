use eframe::egui::{Button, Frame, RichText, Sense, Stroke, TextEdit, Ui};

use crate::domain::GraphModel;
use crate::engine::{BookingForm, RouteForm, RouteKind, RouteResultView};
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{section_heading, station_selector};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingPanelEvent {
    Submit,
}

/// Passenger booking form
pub struct BookingPanel<'a> {
    form: &'a mut BookingForm,
    graph: &'a GraphModel,
    in_flight: bool,
}

impl<'a> BookingPanel<'a> {
    pub fn new(form: &'a mut BookingForm, graph: &'a GraphModel, in_flight: bool) -> Self {
        Self {
            form,
            graph,
            in_flight,
        }
    }
}

impl Panel for BookingPanel<'_> {
    type Event = BookingPanelEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.booking_heading);

        ui.label_subdued(UI_TEXT.passenger_name_label);
        ui.add(TextEdit::singleline(&mut self.form.name).desired_width(200.0));

        ui.label_subdued(UI_TEXT.from_label);
        station_selector(ui, "booking_from", self.graph, &mut self.form.from);
        ui.label_subdued(UI_TEXT.to_label);
        station_selector(ui, "booking_to", self.graph, &mut self.form.to);

        ui.add_space(6.0);
        let label = if self.in_flight {
            UI_TEXT.submitting_button
        } else {
            UI_TEXT.submit_booking_button
        };
        if ui.add_enabled(!self.in_flight, Button::new(label)).clicked() {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Booking submit clicked: {:?}", self.form);
            }
            events.push(BookingPanelEvent::Submit);
        }
        events
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePanelEvent {
    Search,
    Replay(RouteKind),
}

/// Route query form plus the two clickable results
pub struct RoutePanel<'a> {
    form: &'a mut RouteForm,
    graph: &'a GraphModel,
    results: Option<&'a RouteResultView>,
    in_flight: bool,
}

impl<'a> RoutePanel<'a> {
    pub fn new(
        form: &'a mut RouteForm,
        graph: &'a GraphModel,
        results: Option<&'a RouteResultView>,
        in_flight: bool,
    ) -> Self {
        Self {
            form,
            graph,
            results,
            in_flight,
        }
    }

    fn render_results(&self, ui: &mut Ui, events: &mut Vec<RoutePanelEvent>) {
        let Some(results) = self.results else {
            return;
        };
        ui.add_space(8.0);
        match results {
            RouteResultView::Error(message) => ui.label_error(message),
            RouteResultView::Results(entries) => {
                for entry in entries {
                    let color = entry.color();
                    let response = Frame::group(ui.style())
                        .stroke(Stroke::new(2.0, color))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(RichText::new(entry.title).strong().color(color));
                            ui.label(&entry.path_label);
                            if !entry.metric_label.is_empty() {
                                ui.label_subdued(&entry.metric_label);
                            }
                        })
                        .response
                        .interact(Sense::click())
                        .on_hover_text(UI_TEXT.replay_hint);

                    if response.clicked() && entry.reachable {
                        events.push(RoutePanelEvent::Replay(entry.kind));
                    }
                    ui.add_space(4.0);
                }
            }
        }
    }
}

impl Panel for RoutePanel<'_> {
    type Event = RoutePanelEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.route_heading);

        ui.label_subdued(UI_TEXT.from_label);
        station_selector(ui, "route_from", self.graph, &mut self.form.from);
        ui.label_subdued(UI_TEXT.to_label);
        station_selector(ui, "route_to", self.graph, &mut self.form.to);

        ui.add_space(6.0);
        let label = if self.in_flight {
            UI_TEXT.searching_button
        } else {
            UI_TEXT.find_route_button
        };
        if ui.add_enabled(!self.in_flight, Button::new(label)).clicked() {
            events.push(RoutePanelEvent::Search);
        }

        self.render_results(ui, &mut events);
        events
    }
}
