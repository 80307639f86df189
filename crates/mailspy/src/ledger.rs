//! In-memory ledger of sent messages.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mailspy_mime::Message;

use crate::observer::MailObserver;

/// Append-only, order-preserving record of every message sent during a test.
///
/// The ledger is a cheap-clone handle: clone it into a transport as an
/// observer and keep the original for assertions. State is scoped to a single
/// test; call [`Ledger::reset`] at the start of each test. Multi-worker test
/// runners need one ledger per worker; the ledger is not meant for concurrent
/// use by multiple callers.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    messages: Arc<Mutex<Vec<Message>>>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message. Insertion order reflects send order; duplicates are
    /// kept and there is no capacity bound.
    pub fn record(&self, message: Message) {
        self.lock().push(message);
    }

    /// Number of recorded messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// The most recently recorded message.
    #[must_use]
    pub fn last(&self) -> Option<Message> {
        self.lock().last().cloned()
    }

    /// Snapshot of all recorded messages in send order.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.lock().clone()
    }

    /// The last recorded message whose subject contains `substring`.
    ///
    /// The scan never breaks early: later matches replace earlier ones.
    /// Matching is plain case-sensitive containment.
    #[must_use]
    pub fn find_by_subject(&self, substring: &str) -> Option<Message> {
        let mut found = None;
        for message in self.lock().iter() {
            if message.subject().contains(substring) {
                found = Some(message.clone());
            }
        }
        found
    }

    /// The last recorded message addressed directly to `address`.
    ///
    /// Same last-match-wins scan as [`Ledger::find_by_subject`], over the
    /// to-address keys.
    #[must_use]
    pub fn find_by_recipient(&self, address: &str) -> Option<Message> {
        let mut found = None;
        for message in self.lock().iter() {
            if message.to_addresses().contains(address) {
                found = Some(message.clone());
            }
        }
        found
    }

    /// Number of recorded messages whose to-mapping contains `address`
    /// exactly.
    #[must_use]
    pub fn sent_to_count(&self, address: &str) -> usize {
        self.lock()
            .iter()
            .filter(|message| message.to_addresses().contains(address))
            .count()
    }

    /// Clears the ledger for the next test.
    pub fn reset(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Message>> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl MailObserver for Ledger {
    fn message_sent(&self, message: &Message) {
        self.record(message.clone());
    }
}
