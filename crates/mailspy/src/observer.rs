//! Listener bridge between transports and test-side recorders.

use mailspy_mime::Message;

/// Receives every message a transport is asked to send.
///
/// Transports notify observers exactly once per send, before any file I/O,
/// so a recorded message never depends on the rendering succeeding.
pub trait MailObserver {
    /// Called with each sent message.
    fn message_sent(&self, message: &Message);
}

impl<F> MailObserver for F
where
    F: Fn(&Message),
{
    fn message_sent(&self, message: &Message) {
        self(message);
    }
}
