//! Assertion helpers layered over the ledger.
//!
//! Failures panic with a human-readable message so the surrounding test
//! harness reports them like any other assertion. The [`Ledger`] methods
//! resolve to the most recently sent message; the free functions in this
//! module take an explicitly supplied one instead.

use mailspy_mime::Message;

use crate::ledger::Ledger;

impl Ledger {
    /// Asserts that at least one email was sent.
    ///
    /// # Panics
    ///
    /// Panics when the ledger is empty.
    #[track_caller]
    pub fn assert_sent(&self) -> &Self {
        assert!(!self.is_empty(), "No emails have been sent.");
        self
    }

    /// Asserts that no emails were sent.
    ///
    /// # Panics
    ///
    /// Panics when the ledger is non-empty.
    #[track_caller]
    pub fn assert_none_sent(&self) -> &Self {
        assert!(
            self.is_empty(),
            "Did not expect any emails to have been sent."
        );
        self
    }

    /// Asserts that exactly `count` emails were sent.
    ///
    /// # Panics
    ///
    /// Panics on a mismatch, reporting both the expected and actual counts.
    #[track_caller]
    pub fn assert_sent_count(&self, count: usize) -> &Self {
        let actual = self.len();
        assert!(
            actual == count,
            "Expected {count} emails to have been sent, but {actual} were."
        );
        self
    }

    /// Asserts that the last email's body equals `body`.
    ///
    /// # Panics
    ///
    /// Panics when no email was sent or the body differs.
    #[track_caller]
    pub fn assert_body_equals(&self, body: &str) -> &Self {
        body_equals(&self.require_last(), body);
        self
    }

    /// Asserts that the last email's body contains `excerpt`.
    ///
    /// # Panics
    ///
    /// Panics when no email was sent or the excerpt is missing.
    #[track_caller]
    pub fn assert_body_contains(&self, excerpt: &str) -> &Self {
        body_contains(&self.require_last(), excerpt);
        self
    }

    /// Asserts that the last email's body does not contain `excerpt`.
    ///
    /// # Panics
    ///
    /// Panics when no email was sent or the excerpt is present.
    #[track_caller]
    pub fn assert_body_not_contains(&self, excerpt: &str) -> &Self {
        body_not_contains(&self.require_last(), excerpt);
        self
    }

    /// Asserts that the last email's subject contains `subject`.
    ///
    /// # Panics
    ///
    /// Panics when no email was sent or the subject does not match.
    #[track_caller]
    pub fn assert_subject_contains(&self, subject: &str) -> &Self {
        subject_contains(&self.require_last(), subject);
        self
    }

    /// Asserts that the last email's subject does not contain `subject`.
    ///
    /// # Panics
    ///
    /// Panics when no email was sent or the subject matches.
    #[track_caller]
    pub fn assert_subject_not_contains(&self, subject: &str) -> &Self {
        subject_not_contains(&self.require_last(), subject);
        self
    }

    /// Asserts that any recorded email's subject contains `subject`.
    ///
    /// # Panics
    ///
    /// Panics when no recorded subject matches.
    #[track_caller]
    pub fn assert_any_subject_contains(&self, subject: &str) -> &Self {
        let found = self
            .messages()
            .iter()
            .any(|message| message.subject().contains(subject));
        assert!(found, "No email with a subject of {subject} was found.");
        self
    }

    /// Asserts that the last email was sent to `recipient`.
    ///
    /// # Panics
    ///
    /// Panics when no email was sent or the recipient is missing.
    #[track_caller]
    pub fn assert_sent_to(&self, recipient: &str) -> &Self {
        sent_to(&self.require_last(), recipient);
        self
    }

    /// Asserts that exactly `count` emails were sent to `recipient`.
    ///
    /// # Panics
    ///
    /// Panics on a mismatch, reporting both counts.
    #[track_caller]
    pub fn assert_sent_to_count(&self, recipient: &str, count: usize) -> &Self {
        let sent = self.sent_to_count(recipient);
        assert!(
            sent == count,
            "Expected {count} emails to have been sent to {recipient}, but {sent} were."
        );
        self
    }

    /// Asserts that the last email was sent from `sender`.
    ///
    /// # Panics
    ///
    /// Panics when no email was sent or the sender is missing.
    #[track_caller]
    pub fn assert_sent_from(&self, sender: &str) -> &Self {
        sent_from(&self.require_last(), sender);
        self
    }

    /// The last recorded email whose subject contains `subject`.
    ///
    /// # Panics
    ///
    /// Panics when no recorded subject matches.
    #[track_caller]
    #[must_use]
    pub fn subject_containing(&self, subject: &str) -> Message {
        self.find_by_subject(subject)
            .unwrap_or_else(|| panic!("Could not find email with subject {subject}"))
    }

    /// The last recorded email addressed to `recipient`.
    ///
    /// # Panics
    ///
    /// Panics when no recorded email was addressed to `recipient`.
    #[track_caller]
    #[must_use]
    pub fn message_to(&self, recipient: &str) -> Message {
        self.find_by_recipient(recipient)
            .unwrap_or_else(|| panic!("Could not find email to {recipient}"))
    }

    #[track_caller]
    fn require_last(&self) -> Message {
        self.last()
            .unwrap_or_else(|| panic!("No emails have been sent."))
    }
}

/// Asserts that `message`'s body equals `body`.
///
/// # Panics
///
/// Panics when the body differs.
#[track_caller]
pub fn body_equals(message: &Message, body: &str) {
    assert_eq!(
        message.body(),
        body,
        "No email with the provided body was sent."
    );
}

/// Asserts that `message`'s body contains `excerpt`.
///
/// # Panics
///
/// Panics when the excerpt is missing.
#[track_caller]
pub fn body_contains(message: &Message, excerpt: &str) {
    assert!(
        message.body().contains(excerpt),
        "No email containing the provided body was found: {excerpt}"
    );
}

/// Asserts that `message`'s body does not contain `excerpt`.
///
/// # Panics
///
/// Panics when the excerpt is present.
#[track_caller]
pub fn body_not_contains(message: &Message, excerpt: &str) {
    assert!(
        !message.body().contains(excerpt),
        "The text was found in the email: {excerpt}"
    );
}

/// Asserts that `message`'s subject contains `subject`.
///
/// # Panics
///
/// Panics when the subject does not match.
#[track_caller]
pub fn subject_contains(message: &Message, subject: &str) {
    assert!(
        message.subject().contains(subject),
        "No email with a subject of {subject} was found."
    );
}

/// Asserts that `message`'s subject does not contain `subject`.
///
/// # Panics
///
/// Panics when the subject matches.
#[track_caller]
pub fn subject_not_contains(message: &Message, subject: &str) {
    assert!(
        !message.subject().contains(subject),
        "The email subject does contain '{subject}'."
    );
}

/// Asserts that `message` was addressed to `recipient`.
///
/// # Panics
///
/// Panics when the to-mapping does not contain `recipient`.
#[track_caller]
pub fn sent_to(message: &Message, recipient: &str) {
    assert!(
        message.to_addresses().contains(recipient),
        "No email was sent to {recipient}."
    );
}

/// Asserts that `message` was sent from `sender`.
///
/// # Panics
///
/// Panics when the from-mapping does not contain `sender`.
#[track_caller]
pub fn sent_from(message: &Message, sender: &str) {
    assert!(
        message.from_addresses().contains(sender),
        "No email was sent from {sender}."
    );
}
