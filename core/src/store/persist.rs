// Durable mirror of the transcript — one JSON array in one slot
//
// Every write replaces the whole slot. There is no delta format and no
// accumulation: the slot always holds exactly the last persisted sequence.

use crate::message::ChatMessage;
use crate::store::backend::StorageBackend;
use crate::StoreError;
use std::sync::Arc;
use tracing::{debug, error};

/// Conventional slot key, kept compatible with the original emulator's
/// browser storage. Callers may pick any other key at construction.
pub const DEFAULT_STORAGE_KEY: &str = "wce_emulator_chats";

/// Bridges one storage slot and the transcript data that lives in it.
pub struct TranscriptStore {
    backend: Arc<dyn StorageBackend>,
    key: String,
}

impl TranscriptStore {
    pub fn new(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the slot and rehydrate the transcript.
    ///
    /// An absent slot yields an empty sequence. A present but unreadable or
    /// unparseable slot yields an empty sequence after exactly one
    /// diagnostic — the error never reaches the caller, and the corrupt
    /// value is left in place (the next mutation overwrites it anyway).
    pub fn load(&self) -> Vec<ChatMessage> {
        let raw = match self.backend.get(self.key.as_bytes()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!("Failed to read transcript slot '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<ChatMessage>>(&raw) {
            Ok(messages) => {
                debug!("Loaded {} message(s) from '{}'", messages.len(), self.key);
                messages
            }
            Err(e) => {
                error!("Failed to parse transcript slot '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Serialize the full sequence and overwrite the slot unconditionally.
    pub fn persist(&self, messages: &[ChatMessage]) -> Result<(), StoreError> {
        let raw = serde_json::to_vec(messages).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.backend
            .put(self.key.as_bytes(), &raw)
            .map_err(StoreError::Backend)?;
        debug!("Persisted {} message(s) to '{}'", messages.len(), self.key);
        Ok(())
    }

    /// Delete the slot entirely.
    pub fn clear_slot(&self) -> Result<(), StoreError> {
        self.backend
            .remove(self.key.as_bytes())
            .map_err(StoreError::Backend)?;
        self.backend.flush().map_err(StoreError::Backend)?;
        Ok(())
    }
}
