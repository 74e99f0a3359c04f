use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::export::Exporter;
use crate::message::MessageKind;

/// Persisted shell preferences. Chats themselves are never stored here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Names offered in the username list
    pub usernames: Vec<String>,
    /// Author field contents at last exit
    pub last_author: String,
    pub default_kind: MessageKind,
    /// Show `Chat: <name>` lines in the chat view
    pub show_chat_headers: bool,
    /// Where exports are written; the working directory when unset
    pub export_dir: Option<PathBuf>,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            usernames: Vec::new(),
            last_author: String::new(),
            default_kind: MessageKind::Text,
            show_chat_headers: false,
            export_dir: None,
            theme: "light".to_string(),
        }
    }
}

impl Settings {
    pub fn exporter(&self) -> Exporter {
        match &self.export_dir {
            Some(dir) => Exporter::new(dir),
            None => Exporter::default(),
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("org", "telekg", "telekg") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            warn!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Option<Settings> {
    load_settings_from(&settings_path()?)
}

pub fn load_settings_from(path: &Path) -> Option<Settings> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!("Ignoring unreadable settings at {}: {}", path.display(), e);
            None
        }
    }
}

pub fn save_settings_to(settings: &Settings, path: &Path) -> std::io::Result<()> {
    let data = serde_json::to_string_pretty(settings)?;
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}
