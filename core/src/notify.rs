// User-facing notification channel
//
// The transcript layer never prints. Anything the end user should see goes
// through this trait; the CLI renders it, tests count it.

/// Transient, user-visible notifications (the original UI's toast).
pub trait Notifier: Send + Sync {
    /// An operation completed and the user should hear about it
    fn success(&self, text: &str);
}

/// Discards every notification. For headless and embedded use.
#[derive(Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn success(&self, _text: &str) {}
}
