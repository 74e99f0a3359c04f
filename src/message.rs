//! Chat messages and their kinds

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::{MessengerError, Result};
use crate::validation;

/// Discriminant selecting payload shape and render format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    #[default]
    Text,
    Image,
    Voice,
}

impl MessageKind {
    pub const ALL: [MessageKind; 3] = [MessageKind::Text, MessageKind::Image, MessageKind::Voice];

    /// Label shown in the kind selector
    pub fn label(self) -> &'static str {
        match self {
            MessageKind::Text => "Text",
            MessageKind::Image => "Photo",
            MessageKind::Voice => "Voice Message",
        }
    }

    /// Hint for the message field when this kind is selected
    pub fn payload_hint(self) -> &'static str {
        match self {
            MessageKind::Text => "Type your message here",
            MessageKind::Image => "Image URL",
            MessageKind::Voice => "Audio URL",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MessageKind {
    type Err = MessengerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(MessageKind::Text),
            "image" | "photo" => Ok(MessageKind::Image),
            "voice" | "voice message" => Ok(MessageKind::Voice),
            _ => Err(MessengerError::UnknownKind(s.to_string())),
        }
    }
}

/// Kind-specific payload
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageBody {
    Text { content: String },
    Image { image_url: String },
    Voice { audio_url: String },
}

impl MessageBody {
    pub fn kind(&self) -> MessageKind {
        match self {
            MessageBody::Text { .. } => MessageKind::Text,
            MessageBody::Image { .. } => MessageKind::Image,
            MessageBody::Voice { .. } => MessageKind::Voice,
        }
    }

    pub fn render(&self) -> String {
        match self {
            MessageBody::Text { content } => content.clone(),
            MessageBody::Image { image_url } => format!("Image: {}", image_url),
            MessageBody::Voice { audio_url } => format!("Voice message: {}", audio_url),
        }
    }
}

/// One authored message. Immutable once constructed.
#[derive(Clone, Debug)]
pub struct Message {
    author: String,
    created_at: DateTime<Local>,
    body: MessageBody,
}

impl Message {
    /// Build a message of `kind`, interpreting `payload` as text content or a URL.
    pub fn new(kind: MessageKind, author: impl Into<String>, payload: impl Into<String>) -> Result<Self> {
        let payload = payload.into();
        let body = match kind {
            MessageKind::Text => {
                validation::validate_text(&payload).map_err(MessengerError::invalid_message)?;
                MessageBody::Text { content: payload }
            }
            MessageKind::Image => {
                validation::validate_url(&payload).map_err(MessengerError::invalid_message)?;
                MessageBody::Image { image_url: payload }
            }
            MessageKind::Voice => {
                validation::validate_url(&payload).map_err(MessengerError::invalid_message)?;
                MessageBody::Voice { audio_url: payload }
            }
        };
        Self::with_body(author, body)
    }

    pub fn text(author: impl Into<String>, content: impl Into<String>) -> Result<Self> {
        Self::new(MessageKind::Text, author, content)
    }

    pub fn image(author: impl Into<String>, image_url: impl Into<String>) -> Result<Self> {
        Self::new(MessageKind::Image, author, image_url)
    }

    pub fn voice(author: impl Into<String>, audio_url: impl Into<String>) -> Result<Self> {
        Self::new(MessageKind::Voice, author, audio_url)
    }

    fn with_body(author: impl Into<String>, body: MessageBody) -> Result<Self> {
        let author = author.into();
        validation::validate_author(&author).map_err(MessengerError::invalid_message)?;
        Ok(Self {
            author,
            created_at: Local::now(),
            body,
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn kind(&self) -> MessageKind {
        self.body.kind()
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    /// Display string for the payload
    pub fn render(&self) -> String {
        self.body.render()
    }
}

/// Formats the log line `"{author}: {render()}"`
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.author,
            validation::AUTHOR_SEPARATOR,
            self.render()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_per_kind() {
        let text = Message::text("alice", "hi").unwrap();
        assert_eq!(text.render(), "hi");
        assert_eq!(text.kind(), MessageKind::Text);

        let image = Message::image("alice", "http://x/cat.png").unwrap();
        assert_eq!(image.render(), "Image: http://x/cat.png");
        assert_eq!(image.kind(), MessageKind::Image);

        let voice = Message::voice("bob", "http://x/a.ogg").unwrap();
        assert_eq!(voice.render(), "Voice message: http://x/a.ogg");
        assert_eq!(voice.to_string(), "bob: Voice message: http://x/a.ogg");
    }

    #[test]
    fn test_render_is_deterministic() {
        let msg = Message::image("carol", "http://x/1.jpg").unwrap();
        assert_eq!(msg.render(), msg.render());
        assert_eq!(msg.clone().render(), msg.render());
    }

    #[test]
    fn test_empty_author_rejected_for_every_kind() {
        for kind in MessageKind::ALL {
            let err = Message::new(kind, "", "http://x/y").unwrap_err();
            assert!(matches!(err, MessengerError::InvalidMessage { .. }));
        }
    }

    #[test]
    fn test_empty_url_rejected() {
        let err = Message::new(MessageKind::Image, "alice", "").unwrap_err();
        assert!(matches!(err, MessengerError::InvalidMessage { .. }));

        let err = Message::voice("alice", "").unwrap_err();
        assert!(matches!(err, MessengerError::InvalidMessage { .. }));
    }

    #[test]
    fn test_empty_text_allowed() {
        let msg = Message::text("alice", "").unwrap();
        assert_eq!(msg.render(), "");
        assert_eq!(msg.to_string(), "alice: ");
    }

    #[test]
    fn test_created_at_is_set() {
        let before = Local::now();
        let msg = Message::text("alice", "hi").unwrap();
        let after = Local::now();
        assert!(msg.created_at() >= before && msg.created_at() <= after);
    }

    #[test]
    fn test_kind_labels_parse() {
        assert_eq!("Text".parse::<MessageKind>().unwrap(), MessageKind::Text);
        assert_eq!("Photo".parse::<MessageKind>().unwrap(), MessageKind::Image);
        assert_eq!("image".parse::<MessageKind>().unwrap(), MessageKind::Image);
        assert_eq!("Voice Message".parse::<MessageKind>().unwrap(), MessageKind::Voice);
        assert_eq!("VOICE".parse::<MessageKind>().unwrap(), MessageKind::Voice);
        assert!(matches!(
            "Video".parse::<MessageKind>(),
            Err(MessengerError::UnknownKind(_))
        ));

        for kind in MessageKind::ALL {
            assert_eq!(kind.label().parse::<MessageKind>().unwrap(), kind);
        }
    }
}
