//! Application shell around the chat session
//!
//! - `core`: MessengerApp struct, initialization and settings persistence
//! - `update`: eframe update loop
//! - `ui::panels`: header, chat list and chat view
//! - `ui::input`: message composer

pub mod core;
pub mod ui;
pub mod update;

pub use core::MessengerApp;
