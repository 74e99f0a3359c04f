//! Flat text export of all chats
//!
//! Exports are written to `chats_<epoch-millis>.txt` with the layout:
//!
//! ```text
//! Chat: <name>
//! <author>: <rendered message>
//! ...
//! <blank line>
//! ```
//!
//! The format is meant for humans. [`parse_export`] exists so tests and
//! tooling can check what a dump contains.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{error, info};

use crate::error::{MessengerError, Result};
use crate::store::ChatStore;

static CHAT_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Chat: (.+)$").expect("chat header pattern is valid"));
// Lazy match so the first ": " splits author from body
static MESSAGE_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?): (.*)$").expect("message line pattern is valid"));

/// File name for an export taken at `millis` since the Unix epoch.
pub fn export_file_name(millis: i64) -> String {
    format!("chats_{}.txt", millis)
}

/// Format every chat in `store` as export text.
pub fn format_export(store: &ChatStore) -> String {
    let mut out = String::new();
    for chat in store.chats() {
        out.push_str("Chat: ");
        out.push_str(chat.name());
        out.push('\n');
        for msg in chat.messages() {
            out.push_str(&msg.to_string());
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Writes chat dumps into a directory.
#[derive(Clone, Debug)]
pub struct Exporter {
    dir: PathBuf,
}

impl Default for Exporter {
    /// Exports into the working directory.
    fn default() -> Self {
        Self::new(".")
    }
}

impl Exporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Export using the current time for the file name.
    ///
    /// Two exports within the same millisecond target the same file and
    /// the later one overwrites the earlier.
    pub fn export(&self, store: &ChatStore) -> Result<PathBuf> {
        self.export_at(store, Utc::now().timestamp_millis())
    }

    pub fn export_at(&self, store: &ChatStore, millis: i64) -> Result<PathBuf> {
        let path = self.dir.join(export_file_name(millis));
        let io_err = |source| MessengerError::Io {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(format_export(store).as_bytes())
            .map_err(io_err)?;
        writer.flush().map_err(io_err)?;

        Ok(path)
    }

    /// Export and log the outcome. Failures are reported, never propagated.
    pub fn export_or_report(&self, store: &ChatStore) -> Option<PathBuf> {
        match self.export(store) {
            Ok(path) => {
                info!(path = %path.display(), chats = store.chats().len(), "chats saved to file");
                Some(path)
            }
            Err(e) => {
                error!("Failed to export chats: {}", e);
                None
            }
        }
    }
}

/// A chat as read back from an export file
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportedChat {
    pub name: String,
    /// `(author, rendered text)` in file order
    pub messages: Vec<(String, String)>,
}

/// Parse export text back into chats.
pub fn parse_export(text: &str) -> Result<Vec<ExportedChat>> {
    let mut chats = Vec::new();
    let mut current: Option<ExportedChat> = None;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let malformed = |reason: &str| MessengerError::MalformedExport {
            line: line_no,
            reason: reason.to_string(),
        };

        if line.is_empty() {
            match current.take() {
                Some(chat) => chats.push(chat),
                None => return Err(malformed("blank line outside a chat")),
            }
            continue;
        }

        match current.as_mut() {
            None => {
                let caps = CHAT_HEADER_RE
                    .captures(line)
                    .ok_or_else(|| malformed("expected 'Chat: <name>' header"))?;
                current = Some(ExportedChat {
                    name: caps[1].to_string(),
                    messages: Vec::new(),
                });
            }
            Some(chat) => {
                let caps = MESSAGE_LINE_RE
                    .captures(line)
                    .ok_or_else(|| malformed("expected '<author>: <message>'"))?;
                chat.messages.push((caps[1].to_string(), caps[2].to_string()));
            }
        }
    }

    if current.is_some() {
        return Err(MessengerError::MalformedExport {
            line: text.lines().count(),
            reason: "chat not terminated by a blank line".to_string(),
        });
    }

    Ok(chats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Chat;
    use crate::message::Message;

    fn sample_store() -> ChatStore {
        let mut store = ChatStore::new();
        store.add_message_to_active_chat(Message::text("alice", "hi").unwrap());
        store.add_message_to_active_chat(Message::voice("bob", "http://x/a.ogg").unwrap());
        store
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(1700000000123), "chats_1700000000123.txt");
    }

    #[test]
    fn test_format_export() {
        assert_eq!(
            format_export(&sample_store()),
            "Chat: Chat 1\nalice: hi\nbob: Voice message: http://x/a.ogg\n\n"
        );
        assert_eq!(format_export(&ChatStore::new()), "");
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path());

        let path = exporter.export_at(&sample_store(), 42).unwrap();
        assert_eq!(path, dir.path().join("chats_42.txt"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Chat: Chat 1\nalice: hi\nbob: Voice message: http://x/a.ogg\n\n"
        );
    }

    #[test]
    fn test_same_millis_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path());

        let mut store = sample_store();
        let first = exporter.export_at(&store, 7).unwrap();
        store.add_message_to_active_chat(Message::text("carol", "late").unwrap());
        let second = exporter.export_at(&store, 7).unwrap();

        assert_eq!(first, second);
        let body = std::fs::read_to_string(&second).unwrap();
        assert!(body.contains("carol: late"));
    }

    #[test]
    fn test_export_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path().join("does-not-exist"));

        let err = exporter.export(&sample_store()).unwrap_err();
        assert!(matches!(err, MessengerError::Io { .. }));
        assert!(exporter.export_or_report(&sample_store()).is_none());
    }

    #[test]
    fn test_parse_export() {
        let mut store = sample_store();
        let second = store.add_chat(Chat::new("Empty").unwrap());
        let third = store.add_chat(Chat::new("Links").unwrap());
        store
            .add_message(third, Message::image("dave", "http://x/c.png").unwrap())
            .unwrap();
        store
            .add_message(third, Message::text("erin", "ratio: 16:9").unwrap())
            .unwrap();
        assert!(store.chat(second).unwrap().is_empty());

        let chats = parse_export(&format_export(&store)).unwrap();
        assert_eq!(chats.len(), 3);
        assert_eq!(chats[0].name, "Chat 1");
        assert_eq!(
            chats[0].messages,
            vec![
                ("alice".to_string(), "hi".to_string()),
                ("bob".to_string(), "Voice message: http://x/a.ogg".to_string()),
            ]
        );
        assert_eq!(chats[1].name, "Empty");
        assert!(chats[1].messages.is_empty());
        assert_eq!(
            chats[2].messages[1],
            ("erin".to_string(), "ratio: 16:9".to_string())
        );
    }

    #[test]
    fn test_parse_empty_text_message() {
        let chats = parse_export("Chat: Chat 1\nalice: \n\n").unwrap();
        assert_eq!(chats[0].messages, vec![("alice".to_string(), String::new())]);
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_export("alice: hi\n\n"),
            Err(MessengerError::MalformedExport { line: 1, .. })
        ));
        assert!(matches!(
            parse_export("Chat: A\nno separator here\n\n"),
            Err(MessengerError::MalformedExport { line: 2, .. })
        ));
        assert!(matches!(
            parse_export("Chat: A\nalice: hi\n"),
            Err(MessengerError::MalformedExport { .. })
        ));
    }
}
