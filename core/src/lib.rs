// Scrollback — chat transcript persistence
//
// "Load once, mirror every change, forget on demand."
//
// The durable copy is a mirror of the in-memory transcript, never the
// other way around after startup.

pub mod message;
pub mod notify;
pub mod session;
pub mod store;

use thiserror::Error;

pub use message::ChatMessage;
pub use notify::{Notifier, NullNotifier};
pub use session::ChatSession;
pub use store::backend::{MemoryStorage, SledStorage, StorageBackend};
pub use store::persist::{TranscriptStore, DEFAULT_STORAGE_KEY};
pub use store::transcript::Transcript;

// ============================================================================
// ERROR TYPES
// ============================================================================

#[derive(Debug, Error, Clone)]
pub enum StoreError {
    /// The storage backend rejected a read, write, or delete.
    #[error("storage backend error: {0}")]
    Backend(String),
    /// The transcript could not be serialized for persistence.
    #[error("serialization failed: {0}")]
    Serialize(String),
}
