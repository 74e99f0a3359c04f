//! Main update loop

use std::time::Duration;

use eframe::egui;

use super::MessengerApp;

impl eframe::App for MessengerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // SIGINT/SIGTERM: close normally so main runs the final export
        if self.take_close_request() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        // Keep polling the signal flag while idle
        ctx.request_repaint_after(Duration::from_millis(200));

        // Ctrl+S: export without waiting for exit
        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::S)) {
            self.export_now();
        }

        self.render_header(ctx);

        // Left pane: chats and usernames
        self.render_chat_list(ctx);

        // Bottom panel must be added before the central panel
        self.render_input_panel(ctx);

        // Right pane: rendered chat log
        self.render_central_panel(ctx);
    }
}
