// Message module — the transcript's record type

pub mod types;

pub use types::ChatMessage;
