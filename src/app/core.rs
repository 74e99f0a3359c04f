//! Core MessengerApp struct definition and initialization

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use eframe::egui;
use tracing::{debug, info, warn};

use crate::config::{save_settings_to, settings_path, Settings};
use crate::input_state::InputState;
use crate::session::Session;
use crate::signals;
use crate::store::RenderOptions;

pub struct MessengerApp {
    /// Shared with `main`, which runs the final export after the UI exits
    pub session: Arc<Session>,

    // Composer (message text, author, usernames, kind)
    pub input: InputState,

    pub settings: Settings,

    /// Where preferences are saved on drop; `None` disables saving
    pub settings_file: Option<PathBuf>,

    /// Rendered chat log, refreshed after every mutation
    pub log_text: String,

    /// One-line status shown in the side panel (last export etc.)
    pub status: Option<String>,

    /// Set by SIGINT/SIGTERM; the window closes when it flips
    pub term_signal: Arc<AtomicBool>,
    close_sent: bool,
}

pub const DARK_THEME: &str = "dark";
pub const LIGHT_THEME: &str = "light";

/// egui visuals for a theme name; anything but "dark" is light.
pub fn visuals_for(theme: &str) -> egui::Visuals {
    match theme {
        DARK_THEME => egui::Visuals::dark(),
        _ => egui::Visuals::light(),
    }
}

impl MessengerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        session: Arc<Session>,
        settings: Settings,
        term_signal: Arc<AtomicBool>,
    ) -> Self {
        cc.egui_ctx.set_visuals(visuals_for(&settings.theme));
        let mut app = Self::with_session(session, settings);
        app.settings_file = settings_path();
        app.term_signal = term_signal;
        app
    }

    /// Build the app state without a rendering context.
    pub fn with_session(session: Arc<Session>, settings: Settings) -> Self {
        let mut input = InputState::new();
        input.usernames = settings.usernames.clone();
        input.author_input = settings.last_author.clone();
        input.kind = settings.default_kind;

        let mut app = Self {
            session,
            input,
            settings,
            settings_file: None,
            log_text: String::new(),
            status: None,
            term_signal: Arc::new(AtomicBool::new(false)),
            close_sent: false,
        };
        app.refresh_log();
        app
    }

    /// True once, on the first frame after a termination signal.
    pub(crate) fn take_close_request(&mut self) -> bool {
        if self.close_sent || !signals::is_set(&self.term_signal) {
            return false;
        }
        info!("termination signal received, closing window");
        self.close_sent = true;
        true
    }

    pub(crate) fn is_dark(&self) -> bool {
        self.settings.theme == DARK_THEME
    }

    pub(crate) fn set_dark_mode(&mut self, dark: bool) -> egui::Visuals {
        self.settings.theme = if dark { DARK_THEME } else { LIGHT_THEME }.to_string();
        visuals_for(&self.settings.theme)
    }

    pub(crate) fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_chat_headers: self.settings.show_chat_headers,
        }
    }

    /// Re-render the chat log. Called after every mutation.
    pub(crate) fn refresh_log(&mut self) {
        self.log_text = self.session.render_with(&self.render_options());
    }

    /// Send the composed message to the active chat.
    pub(crate) fn send_message(&mut self) {
        let (author, payload) = self.input.outgoing();
        match self.session.post(self.input.kind, &author, &payload) {
            Ok(id) => {
                debug!(%id, "message added");
                self.input.message_sent();
                self.refresh_log();
            }
            Err(e) => {
                warn!("Message rejected: {}", e);
                self.input.error = Some(e.to_string());
            }
        }
    }

    pub(crate) fn open_new_chat(&mut self) {
        match self.session.open_new_chat() {
            Ok(_) => self.refresh_log(),
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    pub(crate) fn export_now(&mut self) {
        self.status = Some(match self.session.export_now() {
            Some(path) => format!("Saved {}", path.display()),
            None => "Export failed, see log".to_string(),
        });
    }

    fn current_settings(&self) -> Settings {
        Settings {
            usernames: self.input.usernames.clone(),
            last_author: self.input.author_input.clone(),
            default_kind: self.input.kind,
            ..self.settings.clone()
        }
    }
}

impl Drop for MessengerApp {
    fn drop(&mut self) {
        // Persist preferences on exit
        if let Some(path) = &self.settings_file {
            if let Err(e) = save_settings_to(&self.current_settings(), path) {
                warn!("Failed to save settings: {}", e);
            }
        }
    }
}
