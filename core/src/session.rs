// Chat session — load once, mirror every change, clear on demand
//
// The consumer surface is three bindings: read the messages, replace or
// update them, and reset. Persistence is wired at open time as an explicit
// transcript subscriber, so every mutation re-persists the full list.

use crate::message::ChatMessage;
use crate::notify::Notifier;
use crate::store::backend::StorageBackend;
use crate::store::persist::TranscriptStore;
use crate::store::transcript::Transcript;
use crate::StoreError;
use std::sync::Arc;
use tracing::warn;

pub struct ChatSession {
    transcript: Transcript,
    store: Arc<TranscriptStore>,
    notifier: Arc<dyn Notifier>,
}

impl ChatSession {
    /// Open a session over `backend`, reading the slot at `key` once.
    ///
    /// A missing or unreadable slot starts the session empty; that is the
    /// only recovery path, and it never surfaces to the caller. The
    /// persistence side effect is registered here — writes after a change
    /// are fire-and-forget, logged at `warn` if the backend rejects them.
    pub fn open(
        backend: Arc<dyn StorageBackend>,
        key: impl Into<String>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let store = Arc::new(TranscriptStore::new(backend, key));
        let transcript = Transcript::with_messages(store.load());

        let mirror = store.clone();
        transcript.subscribe(move |messages| {
            if let Err(e) = mirror.persist(messages) {
                warn!("Dropping transcript write to '{}': {}", mirror.key(), e);
            }
        });

        Self {
            transcript,
            store,
            notifier,
        }
    }

    /// Snapshot of the current message sequence
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.transcript.messages()
    }

    /// Replace the whole sequence
    pub fn set_messages(&self, messages: Vec<ChatMessage>) {
        self.transcript.set(messages);
    }

    /// Mutate the sequence in place (append, edit, truncate)
    pub fn update(&self, f: impl FnOnce(&mut Vec<ChatMessage>)) {
        self.transcript.update(f);
    }

    /// The underlying transcript, for registering further subscribers
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Drop everything: empty the in-memory sequence, delete the durable
    /// slot, and notify the user once. No confirmation, no undo.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.transcript.set(Vec::new());
        self.store.clear_slot()?;
        self.notifier.success("Chat history cleared");
        Ok(())
    }
}
