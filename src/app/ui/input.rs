//! Message composer panel

use eframe::egui;

use crate::app::MessengerApp;
use crate::message::MessageKind;

impl MessengerApp {
    /// Render the composer at the bottom of the window
    pub(in crate::app) fn render_input_panel(&mut self, ctx: &egui::Context) {
        let mut send = false;

        egui::TopBottomPanel::bottom("input_panel")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(10)))
            .show(ctx, |ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.input.message_input)
                        .hint_text(self.input.kind.payload_hint())
                        .desired_width(450.0),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    send = true;
                }

                ui.horizontal(|ui| {
                    // Enter in the username field adds it to the list
                    let author = ui.add(
                        egui::TextEdit::singleline(&mut self.input.author_input)
                            .hint_text("Username")
                            .desired_width(120.0),
                    );
                    if author.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        self.input.commit_username();
                    }

                    egui::ComboBox::from_id_salt("message_kind")
                        .selected_text(self.input.kind.label())
                        .show_ui(ui, |ui| {
                            for kind in MessageKind::ALL {
                                ui.selectable_value(&mut self.input.kind, kind, kind.label());
                            }
                        });

                    if ui.button("Send").clicked() {
                        send = true;
                    }
                });

                if let Some(err) = &self.input.error {
                    ui.colored_label(egui::Color32::RED, err);
                }
            });

        if send {
            self.send_message();
        }
    }
}
