//! Input state for the message composer.
//!
//! Holds the text fields, the username list and the selected kind, separate
//! from the session so the panels can borrow it independently.

use crate::message::MessageKind;
use crate::validation::sanitize_line;

#[derive(Default)]
pub struct InputState {
    /// Message text or URL being composed
    pub message_input: String,

    /// Current author
    pub author_input: String,

    /// Known usernames, in the order they were added
    pub usernames: Vec<String>,

    /// Selected entry in `usernames`
    pub selected_username: Option<usize>,

    pub kind: MessageKind,

    /// Last validation error to show under the input row
    pub error: Option<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the author field to the username list and clear it.
    ///
    /// Empty or already-known names are ignored. Returns true if added.
    pub fn commit_username(&mut self) -> bool {
        let name = sanitize_line(self.author_input.trim());
        if name.is_empty() || self.usernames.contains(&name) {
            return false;
        }
        self.usernames.push(name);
        self.author_input.clear();
        true
    }

    /// Select a username from the list and copy it into the author field.
    pub fn select_username(&mut self, idx: usize) {
        if let Some(name) = self.usernames.get(idx) {
            self.author_input = name.clone();
            self.selected_username = Some(idx);
        }
    }

    /// The `(author, payload)` to send, with line breaks stripped.
    pub fn outgoing(&self) -> (String, String) {
        (
            sanitize_line(self.author_input.trim()),
            sanitize_line(&self.message_input),
        )
    }

    /// Reset after a successful send. The author is kept.
    pub fn message_sent(&mut self) {
        self.message_input.clear();
        self.error = None;
    }
}
