//! TELEKG messenger library.
//!
//! The chat model (messages, chats, the store and its export) is usable
//! without the GUI; `app` wraps it in an eframe window.

pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod export;
pub mod input_state;
pub mod logging;
pub mod message;
pub mod session;
pub mod signals;
pub mod store;
pub mod validation;


pub use chat::Chat;
pub use error::{MessengerError, Result};
pub use export::Exporter;
pub use message::{Message, MessageBody, MessageKind};
pub use session::Session;
pub use store::{ChatId, ChatStore, RenderOptions};
