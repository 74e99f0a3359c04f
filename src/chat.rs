use crate::error::{MessengerError, Result};
use crate::message::Message;
use crate::validation;

/// A named conversation. Messages are append-only and kept in display order.
#[derive(Clone, Debug)]
pub struct Chat {
    name: String,
    messages: Vec<Message>,
}

impl Chat {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validation::validate_chat_name(&name).map_err(MessengerError::invalid_name)?;
        Ok(Self {
            name,
            messages: Vec::new(),
        })
    }

    /// Build a chat from a name known to be valid.
    pub(crate) fn unchecked(name: &str) -> Self {
        Self {
            name: name.to_string(),
            messages: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_message(&mut self, msg: Message) {
        self.messages.push(msg);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
