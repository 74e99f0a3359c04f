//! Session ownership of the chat store.
//!
//! `Session` is the single owner of the `ChatStore` from process start to
//! process end. Every mutation and the export read go through one mutex, so
//! the shutdown export sees a consistent snapshot. The UI shell holds an
//! `Arc<Session>` and `main` runs [`Session::shutdown`] on the exit path
//! after the event loop returns.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::chat::Chat;
use crate::error::{MessengerError, Result};
use crate::export::Exporter;
use crate::message::{Message, MessageKind};
use crate::store::{ChatId, ChatStore, RenderOptions};

struct Inner {
    store: ChatStore,
    closed: bool,
}

pub struct Session {
    inner: Mutex<Inner>,
    exporter: Exporter,
}

impl Session {
    pub fn new(exporter: Exporter) -> Self {
        Self {
            inner: Mutex::new(Inner {
                store: ChatStore::new(),
                closed: false,
            }),
            exporter,
        }
    }

    pub fn exporter(&self) -> &Exporter {
        &self.exporter
    }

    // A panic while holding the lock leaves the store append-only consistent,
    // so recover the guard instead of propagating the poison.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_open(&self) -> Result<MutexGuard<'_, Inner>> {
        let guard = self.lock();
        if guard.closed {
            return Err(MessengerError::Closed);
        }
        Ok(guard)
    }

    /// Build a message and append it to the active chat.
    ///
    /// The message is stamped under the lock, so `created_at` never goes
    /// backwards in insertion order.
    pub fn post(&self, kind: MessageKind, author: &str, payload: &str) -> Result<ChatId> {
        let mut inner = self.lock_open()?;
        let msg = Message::new(kind, author, payload)?;
        let id = inner.store.add_message_to_active_chat(msg);
        debug!(%id, ?kind, author, "message posted");
        Ok(id)
    }

    /// Create a chat with `name`. Does not change the active chat.
    pub fn add_chat(&self, name: &str) -> Result<ChatId> {
        let chat = Chat::new(name)?;
        let mut inner = self.lock_open()?;
        Ok(inner.store.add_chat(chat))
    }

    /// Create a chat using the store's next default name and make it active.
    pub fn open_new_chat(&self) -> Result<ChatId> {
        let mut inner = self.lock_open()?;
        let chat = Chat::new(inner.store.next_chat_name())?;
        let id = inner.store.add_chat(chat);
        inner.store.set_active_chat(id)?;
        info!(%id, "opened new chat");
        Ok(id)
    }

    pub fn set_active_chat(&self, id: ChatId) -> Result<()> {
        self.lock_open()?.store.set_active_chat(id)
    }

    pub fn render(&self) -> String {
        self.lock().store.render()
    }

    pub fn render_with(&self, opts: &RenderOptions) -> String {
        self.lock().store.render_with(opts)
    }

    /// Run `f` with read access to the store under the session lock.
    pub fn with_store<R>(&self, f: impl FnOnce(&ChatStore) -> R) -> R {
        f(&self.lock().store)
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Export on user request. Failures are logged and return `None`.
    ///
    /// A closed session has already written its final export, so this
    /// returns `None` after [`Session::shutdown`].
    pub fn export_now(&self) -> Option<PathBuf> {
        let inner = match self.lock_open() {
            Ok(inner) => inner,
            Err(e) => {
                warn!("Export skipped: {}", e);
                return None;
            }
        };
        self.exporter.export_or_report(&inner.store)
    }

    /// Close the session and write the final export.
    ///
    /// Runs at most once; later calls return `None`. The lock is held for
    /// the whole export so no message can slip in between.
    pub fn shutdown(&self) -> Option<PathBuf> {
        let mut inner = self.lock();
        if inner.closed {
            warn!("shutdown called on a closed session");
            return None;
        }
        inner.closed = true;
        info!(
            chats = inner.store.chats().len(),
            messages = inner.store.message_count(),
            "shutting down session"
        );
        self.exporter.export_or_report(&inner.store)
    }
}
