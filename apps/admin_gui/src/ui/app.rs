use std::time::Duration;

use admin_core::{AdminPanel, LoadState};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{apply_all, PanelAction};
use crate::ui::widgets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

pub struct AdminGuiApp {
    ui_rx: Receiver<UiEvent>,

    panel: AdminPanel,
    search_input: String,

    status: String,
    status_banner: Option<StatusBanner>,
}

impl AdminGuiApp {
    /// Creates the session state and queues the one startup load.
    ///
    /// The command sender is dropped afterwards, so the backend worker exits
    /// once the load has been handled.
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut status = "Loading members...".to_string();
        dispatch_backend_command(&cmd_tx, BackendCommand::LoadMembers, &mut status);
        Self {
            ui_rx,
            panel: AdminPanel::new(),
            search_input: String::new(),
            status,
            status_banner: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::MembersLoaded { members, rejected } => {
                    self.panel.apply_loaded(members);
                    self.status = format!("Loaded {} members", self.panel.members().len());
                    if rejected > 0 {
                        self.status_banner = Some(StatusBanner {
                            severity: StatusBannerSeverity::Warning,
                            message: format!(
                                "Skipped {rejected} malformed or duplicate member entries"
                            ),
                        });
                    }
                }
                UiEvent::Error(err) => self.handle_error(err),
            }
        }
    }

    fn handle_error(&mut self, err: UiError) {
        let text = err.display_text();
        tracing::warn!(context = ?err.context(), category = ?err.category(), "{text}");
        // Every backend error ends the one-shot load.
        self.panel.fail_load(err.message());
        self.status = text.clone();
        self.status_banner = Some(StatusBanner {
            severity: StatusBannerSeverity::Error,
            message: text,
        });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            let (fill, stroke) = match banner.severity {
                StatusBannerSeverity::Warning => (
                    egui::Color32::from_rgb(112, 92, 40),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(180, 150, 70)),
                ),
                StatusBannerSeverity::Error => (
                    egui::Color32::from_rgb(111, 53, 53),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
                ),
            };

            egui::Frame::NONE
                .fill(fill)
                .stroke(stroke)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                        });
                    });
                });
            ui.add_space(8.0);
        }
    }

    fn show_footer(&self, ctx: &egui::Context, actions: &mut Vec<PanelAction>) {
        egui::TopBottomPanel::bottom("admin_footer")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    let has_selection = !self.panel.selection().is_empty();
                    let delete = egui::Button::new(
                        egui::RichText::new("Delete Selected").color(egui::Color32::WHITE),
                    )
                    .fill(egui::Color32::from_rgb(200, 35, 51));
                    if ui.add_enabled(has_selection, delete).clicked() {
                        actions.push(PanelAction::DeleteSelected);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(&self.status).weak());
                    });
                });
                ui.add_space(4.0);
                widgets::pagination_bar(ui, &self.panel, actions);
                ui.add_space(6.0);
            });
    }

    fn show_main_workspace(&mut self, ctx: &egui::Context, actions: &mut Vec<PanelAction>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui);
            ui.add_space(12.0);
            widgets::search_bar(ui, &mut self.search_input, actions);
            ui.add_space(12.0);

            match self.panel.load_state() {
                LoadState::Loading => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Fetching members...");
                    });
                }
                LoadState::Failed(_) => {
                    ui.label(
                        egui::RichText::new("Member list unavailable for this session.").weak(),
                    );
                }
                LoadState::Ready => {}
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    widgets::member_table(ui, &self.panel, actions);
                });
        });
    }
}

impl eframe::App for AdminGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut actions = Vec::new();
        self.show_footer(ctx, &mut actions);
        self.show_main_workspace(ctx, &mut actions);
        apply_all(&mut self.panel, actions);

        if *self.panel.load_state() == LoadState::Loading {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
