//! In-memory chat store.
//!
//! `ChatStore` owns every chat for the lifetime of the session. Chats are
//! only ever appended; an explicit active chat receives new messages.

use std::fmt;

use tracing::debug;

use crate::chat::Chat;
use crate::error::{MessengerError, Result};
use crate::message::Message;

/// Name of the chat created on the first message into an empty store.
pub const DEFAULT_CHAT_NAME: &str = "Chat 1";

/// Position of a chat in the store
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChatId(usize);

impl ChatId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display options for [`ChatStore::render_with`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit a `Chat: {name}` line before each chat's messages.
    pub show_chat_headers: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ChatStore {
    chats: Vec<Chat>,
    active: Option<usize>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chat. The first chat added becomes the active one.
    pub fn add_chat(&mut self, chat: Chat) -> ChatId {
        debug!(name = chat.name(), "adding chat");
        self.chats.push(chat);
        let id = self.chats.len() - 1;
        if self.active.is_none() {
            self.active = Some(id);
        }
        ChatId(id)
    }

    /// Append `msg` to the active chat, creating "Chat 1" if the store is empty.
    pub fn add_message_to_active_chat(&mut self, msg: Message) -> ChatId {
        // `active` is only None while the store is empty
        let id = match self.active {
            Some(id) => id,
            None => self.add_chat(default_chat()).index(),
        };
        self.chats[id].add_message(msg);
        ChatId(id)
    }

    /// Append `msg` to a specific chat.
    pub fn add_message(&mut self, id: ChatId, msg: Message) -> Result<()> {
        let chat = self
            .chats
            .get_mut(id.0)
            .ok_or(MessengerError::UnknownChat { id: id.0 })?;
        chat.add_message(msg);
        Ok(())
    }

    pub fn set_active_chat(&mut self, id: ChatId) -> Result<()> {
        if id.0 >= self.chats.len() {
            return Err(MessengerError::UnknownChat { id: id.0 });
        }
        self.active = Some(id.0);
        Ok(())
    }

    pub fn active_chat_id(&self) -> Option<ChatId> {
        self.active.map(ChatId)
    }

    pub fn chat(&self, id: ChatId) -> Option<&Chat> {
        self.chats.get(id.0)
    }

    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    /// Iterate chats with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ChatId, &Chat)> {
        self.chats.iter().enumerate().map(|(i, c)| (ChatId(i), c))
    }

    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }

    /// Total number of messages across all chats.
    pub fn message_count(&self) -> usize {
        self.chats.iter().map(Chat::len).sum()
    }

    /// Suggested name for the next chat ("Chat 2", "Chat 3", ...).
    pub fn next_chat_name(&self) -> String {
        format!("Chat {}", self.chats.len() + 1)
    }

    /// Render the log without chat headers.
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    pub fn render_with(&self, opts: &RenderOptions) -> String {
        let mut out = String::new();
        for chat in &self.chats {
            if opts.show_chat_headers {
                out.push_str("Chat: ");
                out.push_str(chat.name());
                out.push('\n');
            }
            for msg in chat.messages() {
                out.push_str(&msg.to_string());
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }
}

fn default_chat() -> Chat {
    Chat::unchecked(DEFAULT_CHAT_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageKind;

    fn msg(author: &str, text: &str) -> Message {
        Message::text(author, text).unwrap()
    }

    #[test]
    fn test_first_message_creates_default_chat() {
        let mut store = ChatStore::new();
        assert!(store.is_empty());
        assert_eq!(store.active_chat_id(), None);

        let id = store.add_message_to_active_chat(msg("alice", "hi"));
        assert_eq!(store.chats().len(), 1);
        assert_eq!(store.chats()[0].name(), DEFAULT_CHAT_NAME);
        assert_eq!(store.active_chat_id(), Some(id));

        let again = store.add_message_to_active_chat(msg("bob", "hey"));
        assert_eq!(again, id);
        assert_eq!(store.chats().len(), 1);
        assert_eq!(store.chats()[0].len(), 2);
    }

    #[test]
    fn test_default_chat_name_passes_validation() {
        let validated = Chat::new(DEFAULT_CHAT_NAME).unwrap();
        assert_eq!(default_chat().name(), validated.name());
        assert!(default_chat().is_empty());
    }

    #[test]
    fn test_render_concrete_scenario() {
        let mut store = ChatStore::new();
        store.add_message_to_active_chat(msg("alice", "hi"));
        store.add_message_to_active_chat(
            Message::new(MessageKind::Voice, "bob", "http://x/a.ogg").unwrap(),
        );
        assert_eq!(
            store.render(),
            "alice: hi\nbob: Voice message: http://x/a.ogg\n\n"
        );
    }

    #[test]
    fn test_render_empty_store() {
        assert_eq!(ChatStore::new().render(), "");
    }

    #[test]
    fn test_render_with_headers() {
        let mut store = ChatStore::new();
        store.add_chat(Chat::new("Work").unwrap());
        let home = store.add_chat(Chat::new("Home").unwrap());
        store.add_message_to_active_chat(msg("alice", "standup"));
        store.add_message(home, msg("bob", "dinner?")).unwrap();

        let opts = RenderOptions {
            show_chat_headers: true,
        };
        assert_eq!(
            store.render_with(&opts),
            "Chat: Work\nalice: standup\n\nChat: Home\nbob: dinner?\n\n"
        );
        assert_eq!(store.render(), "alice: standup\n\nbob: dinner?\n\n");
    }

    #[test]
    fn test_active_chat_routing() {
        let mut store = ChatStore::new();
        let first = store.add_chat(Chat::new("Chat 1").unwrap());
        let second = store.add_chat(Chat::new(store.next_chat_name()).unwrap());
        assert_eq!(store.chat(second).unwrap().name(), "Chat 2");

        // The first chat stays active until another is selected
        assert_eq!(store.active_chat_id(), Some(first));
        store.add_message_to_active_chat(msg("alice", "one"));

        store.set_active_chat(second).unwrap();
        store.add_message_to_active_chat(msg("alice", "two"));

        assert_eq!(store.chat(first).unwrap().len(), 1);
        assert_eq!(store.chat(second).unwrap().len(), 1);
        assert_eq!(store.message_count(), 2);
    }

    #[test]
    fn test_unknown_chat_rejected() {
        let mut store = ChatStore::new();
        store.add_chat(Chat::new("Chat 1").unwrap());

        let missing = ChatId(5);
        assert!(matches!(
            store.set_active_chat(missing),
            Err(MessengerError::UnknownChat { id: 5 })
        ));
        assert!(store.add_message(missing, msg("a", "b")).is_err());
        assert_eq!(store.active_chat_id(), Some(ChatId(0)));
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let mut store = ChatStore::new();
        store.add_chat(Chat::new("Chat 1").unwrap());
        store.add_chat(Chat::new("Chat 1").unwrap());
        assert_eq!(store.chats().len(), 2);
    }
}
