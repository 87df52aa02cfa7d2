// In-memory transcript state with explicit change subscriptions
//
// The transcript is the single source of truth after startup. Persistence
// is not baked in: it is wired up as one subscriber among any others.

use crate::message::ChatMessage;
use parking_lot::RwLock;
use std::sync::Arc;

type Subscriber = Arc<dyn Fn(&[ChatMessage]) + Send + Sync>;

/// The ordered, in-memory message sequence.
///
/// Cheap to clone (all clones share state). Every mutation runs the
/// registered subscribers with the new sequence, in registration order,
/// after the state has been swapped. Subscribers observe; they cannot veto.
#[derive(Clone, Default)]
pub struct Transcript {
    inner: Arc<TranscriptInner>,
}

#[derive(Default)]
struct TranscriptInner {
    messages: RwLock<Vec<ChatMessage>>,
    subscribers: RwLock<Vec<Subscriber>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcript pre-seeded with `messages`, without notifying
    /// anyone (there is nobody to notify yet).
    pub fn with_messages(messages: Vec<ChatMessage>) -> Self {
        let transcript = Self::new();
        *transcript.inner.messages.write() = messages;
        transcript
    }

    /// Snapshot of the current sequence
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.inner.messages.read().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.messages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.messages.read().is_empty()
    }

    /// Replace the whole sequence and notify subscribers
    pub fn set(&self, messages: Vec<ChatMessage>) {
        *self.inner.messages.write() = messages;
        self.notify();
    }

    /// Mutate the sequence in place and notify subscribers
    pub fn update(&self, f: impl FnOnce(&mut Vec<ChatMessage>)) {
        {
            let mut messages = self.inner.messages.write();
            f(&mut messages);
        }
        self.notify();
    }

    /// Register a change observer. Runs on every subsequent `set`/`update`,
    /// never at registration time.
    ///
    /// Subscribers observe: one that calls `set` or `update` from inside
    /// its callback recurses into dispatch and can loop forever. Reading
    /// the transcript or registering further subscribers is fine.
    pub fn subscribe(&self, subscriber: impl Fn(&[ChatMessage]) + Send + Sync + 'static) {
        self.inner.subscribers.write().push(Arc::new(subscriber));
    }

    fn notify(&self) {
        let snapshot = self.messages();
        // Dispatch against a copy so no lock is held while callbacks run
        let subscribers = self.inner.subscribers.read().clone();
        for subscriber in &subscribers {
            subscriber(&snapshot);
        }
    }
}
