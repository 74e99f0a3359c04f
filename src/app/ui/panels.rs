//! Header, chat list and chat view rendering

use eframe::egui;

use crate::app::MessengerApp;
use crate::store::ChatId;

const TITLE: &str = "TELEKG";

impl MessengerApp {
    /// Title banner and File menu
    pub(in crate::app) fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Export chats").clicked() {
                        self.export_now();
                        ui.close_menu();
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui
                        .checkbox(&mut self.settings.show_chat_headers, "Chat names in log")
                        .changed()
                    {
                        self.refresh_log();
                    }
                    let mut dark = self.is_dark();
                    if ui.checkbox(&mut dark, "Dark mode").changed() {
                        ctx.set_visuals(self.set_dark_mode(dark));
                    }
                });
            });
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(TITLE)
                        .size(40.0)
                        .color(egui::Color32::from_rgb(0, 128, 0)),
                );
            });
        });
    }

    /// Left pane with the chat list and known usernames
    pub(in crate::app) fn render_chat_list(&mut self, ctx: &egui::Context) {
        let chats: Vec<(ChatId, String)> = self.session.with_store(|store| {
            store
                .iter()
                .map(|(id, chat)| (id, format!("{} ({})", chat.name(), chat.len())))
                .collect()
        });
        let active = self.session.with_store(|store| store.active_chat_id());

        let mut selected_chat = None;
        let mut new_chat = false;
        let mut selected_user = None;

        egui::SidePanel::left("chat_list")
            .resizable(true)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.heading("Chats");
                if chats.is_empty() {
                    ui.weak("No chats yet");
                }
                for (id, label) in &chats {
                    if ui.selectable_label(active == Some(*id), label).clicked() {
                        selected_chat = Some(*id);
                    }
                }
                if ui.button("New chat").clicked() {
                    new_chat = true;
                }

                ui.separator();
                ui.heading("Users");
                egui::ScrollArea::vertical()
                    .id_salt("usernames")
                    .max_height(250.0)
                    .show(ui, |ui| {
                        for (idx, name) in self.input.usernames.iter().enumerate() {
                            let selected = self.input.selected_username == Some(idx);
                            if ui.selectable_label(selected, name).clicked() {
                                selected_user = Some(idx);
                            }
                        }
                    });

                if let Some(status) = &self.status {
                    ui.separator();
                    ui.small(status);
                }
            });

        if let Some(id) = selected_chat {
            if let Err(e) = self.session.set_active_chat(id) {
                self.status = Some(e.to_string());
            }
        }
        if new_chat {
            self.open_new_chat();
        }
        if let Some(idx) = selected_user {
            self.input.select_username(idx);
        }
    }

    /// Central pane showing the rendered log
    pub(in crate::app) fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if self.log_text.is_empty() {
                        ui.weak("No messages yet");
                    } else {
                        ui.label(egui::RichText::new(self.log_text.as_str()).monospace());
                    }
                });
        });
    }
}
