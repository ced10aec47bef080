use eframe::egui::{
    Align, Button, CentralPanel, Color32, Context, Frame, Layout, RichText, ScrollArea, SidePanel,
    TopBottomPanel, Ui, Window,
};

use crate::engine::sync::{BookingLine, ListEntry};
use crate::engine::{Connectivity, NoticeLevel};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_map::paint_surface;
use crate::ui::ui_panels::{BookingPanel, BookingPanelEvent, Panel, RoutePanel, RoutePanelEvent};
use crate::ui::utils::{section_heading, spaced_separator};

use super::app::RailConsoleApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl RailConsoleApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) {
        let mut logout = false;
        TopBottomPanel::top("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new(UI_TEXT.window_title).color(UI_CONFIG.colors.heading));
                ui.separator();

                let (text, color) = match self.controller.monitor().status() {
                    Some(Connectivity::Connected) => {
                        (UI_TEXT.status_connected, UI_CONFIG.colors.connected)
                    }
                    Some(Connectivity::Disconnected) => {
                        (UI_TEXT.status_disconnected, UI_CONFIG.colors.disconnected)
                    }
                    None => (UI_TEXT.status_unknown, UI_CONFIG.colors.label),
                };
                ui.label(RichText::new(text).color(color));

                if let Some(at) = self.controller.sync_controller().last_synced_at() {
                    ui.label_subdued(format!(
                        "{} {}s ago",
                        UI_TEXT.last_synced_prefix,
                        at.elapsed().as_secs()
                    ));
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(UI_TEXT.logout_button).clicked() {
                        logout = true;
                    }
                    ui.metric(
                        UI_TEXT.role_label,
                        &self.controller.role().to_string(),
                        UI_CONFIG.colors.heading,
                    );
                });
            });
        });

        if logout {
            self.logout(ctx);
        }
    }

    pub(super) fn render_side_panel(&mut self, ctx: &Context, now_ms: u64) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(8.0);
        SidePanel::left("left_panel")
            .default_width(UI_CONFIG.side_panel_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical().id_salt("side_scroll").show(ui, |ui| {
                    if self.controller.role().shows_request_forms() {
                        self.render_passenger_forms(ui, now_ms);
                        spaced_separator(ui);
                    }
                    if self.controller.role().shows_counters() {
                        self.render_stats_bar(ui);
                        spaced_separator(ui);
                        section_heading(ui, UI_TEXT.queue_heading);
                    }
                    self.render_booking_list(ui);
                });
            });
    }

    fn render_passenger_forms(&mut self, ui: &mut Ui, now_ms: u64) {
        let booking_events = BookingPanel::new(
            &mut self.forms.booking,
            self.controller.graph(),
            self.controller.is_booking_in_flight(),
        )
        .render(ui);

        spaced_separator(ui);

        let route_events = RoutePanel::new(
            &mut self.forms.route,
            self.controller.graph(),
            self.controller.route_view(),
            self.controller.is_route_in_flight(),
        )
        .render(ui);

        for event in booking_events {
            match event {
                BookingPanelEvent::Submit => self.start_booking(),
            }
        }
        for event in route_events {
            match event {
                RoutePanelEvent::Search => self.start_route_query(),
                RoutePanelEvent::Replay(kind) => {
                    self.controller.replay_route(kind, now_ms);
                }
            }
        }
    }

    fn render_stats_bar(&self, ui: &mut Ui) {
        let counters = self.controller.booking_view().counters;
        let (pending, completed, stations) = counters
            .map(|c| (c.pending.to_string(), c.completed.to_string(), c.stations.to_string()))
            .unwrap_or_else(|| ("-".to_string(), "-".to_string(), "-".to_string()));

        ui.horizontal(|ui| {
            ui.metric(UI_TEXT.stats_pending_label, &pending, UI_CONFIG.colors.pending);
            ui.add_space(12.0);
            ui.metric(UI_TEXT.stats_completed_label, &completed, UI_CONFIG.colors.completed);
            ui.add_space(12.0);
            ui.metric(UI_TEXT.stats_stations_label, &stations, UI_CONFIG.colors.heading);
        });
    }

    fn render_booking_list(&mut self, ui: &mut Ui) {
        let mut process_clicked = false;
        let processing = self.controller.is_process_in_flight();

        for entry in &self.controller.booking_view().entries {
            match entry {
                ListEntry::Header { text, .. } => {
                    ui.add_space(6.0);
                    ui.label_subheader(text);
                }
                ListEntry::PendingItem(line) => {
                    booking_card(ui, line, UI_TEXT.status_pending_badge, UI_CONFIG.colors.pending, |ui| {
                        let label = if processing {
                            UI_TEXT.processing_button
                        } else {
                            UI_TEXT.process_button
                        };
                        if ui.add_enabled(!processing, Button::new(label)).clicked() {
                            process_clicked = true;
                        }
                    });
                }
                ListEntry::CompletedItem(line) => {
                    booking_card(ui, line, UI_TEXT.status_completed_badge, UI_CONFIG.colors.completed, |_| {});
                }
                ListEntry::ConfirmedTicket(line) => {
                    booking_card(ui, line, UI_TEXT.ticket_confirmed_badge, UI_CONFIG.colors.completed, |_| {});
                }
                ListEntry::EmptyState(message) => {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| ui.label_subdued(message));
                }
            }
        }

        if process_clicked {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Process requested for queue head");
            }
            self.start_process();
        }
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(10.0);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                section_heading(ui, UI_TEXT.map_heading);
                paint_surface(ui, self.controller.surface());
            });
    }

    pub(super) fn render_notices_window(&mut self, ctx: &Context) {
        if self.controller.notices().next().is_none() {
            return;
        }

        let mut dismiss = None;
        let mut dismiss_all = false;
        Window::new(UI_TEXT.notices_heading)
            .collapsible(false)
            .resizable(false)
            .anchor(eframe::egui::Align2::CENTER_TOP, [0.0, 40.0])
            .show(ctx, |ui| {
                for (index, notice) in self.controller.notices().enumerate() {
                    ui.horizontal(|ui| {
                        match notice.level {
                            NoticeLevel::Info => {
                                ui.label(RichText::new(&notice.text).color(Color32::LIGHT_GREEN));
                            }
                            NoticeLevel::Warning => ui.label_warning(&notice.text),
                            NoticeLevel::Error => ui.label_error(&notice.text),
                        }
                        if ui.small_button("✖").clicked() {
                            dismiss = Some(index);
                        }
                    });
                    ui.separator();
                }
                if ui.button(UI_TEXT.dismiss_button).clicked() {
                    dismiss_all = true;
                }
            });

        if dismiss_all {
            self.controller.clear_notices();
        } else if let Some(index) = dismiss {
            self.controller.dismiss_notice(index);
        }
    }
}

/// One booking row: id, passenger, journey and a status badge
fn booking_card(
    ui: &mut Ui,
    line: &BookingLine,
    badge: &str,
    color: Color32,
    actions: impl FnOnce(&mut Ui),
) {
    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("#{}", line.id)).strong());
            ui.label(&line.passenger);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.badge(badge, color);
            });
        });
        ui.label_subdued(line.journey());
        if let Some(at) = &line.queued_at {
            ui.label_subdued(format!("{} {}", UI_TEXT.queued_at_label, at));
        }
        actions(ui);
    });
}
