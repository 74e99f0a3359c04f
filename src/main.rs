//! TELEKG - a two-pane desktop chat demo built with egui
//!
//! Lifecycle:
//! - the session (chat store + exporter) is created before the window
//! - the UI mutates it through `Session` while the window is open
//! - after the event loop returns, the session is shut down and all chats
//!   are exported on this thread before the process exits
//! - SIGINT/SIGTERM close the window, which takes the same exit path

use std::sync::Arc;

use eframe::egui;
use tracing::{error, info};

use telekg::app::MessengerApp;
use telekg::config::load_settings;
use telekg::logging;
use telekg::session::Session;
use telekg::signals;

fn main() -> eframe::Result<()> {
    let verbose = std::env::args().skip(1).any(|a| a == "-v" || a == "--verbose");
    logging::init(verbose);

    let settings = load_settings().unwrap_or_default();
    let session = Arc::new(Session::new(settings.exporter()));
    info!(export_dir = %session.exporter().dir().display(), "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Chat Messenger")
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    // Ctrl+C / SIGTERM close the window instead of killing the process
    let term_signal = signals::install_term_flag();

    let app_session = Arc::clone(&session);
    let result = eframe::run_native(
        "Chat Messenger",
        options,
        Box::new(move |cc| {
            Ok(Box::new(MessengerApp::new(cc, app_session, settings, term_signal)))
        }),
    );
    if let Err(e) = &result {
        error!("UI exited with error: {}", e);
    }

    // Export failures are logged inside; exit proceeds regardless.
    session.shutdown();

    result
}
