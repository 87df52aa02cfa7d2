// Store module — transcript state and its durable mirror

pub mod backend;
pub mod persist;
pub mod transcript;

pub use backend::{MemoryStorage, SledStorage, StorageBackend};
pub use persist::{TranscriptStore, DEFAULT_STORAGE_KEY};
pub use transcript::Transcript;
