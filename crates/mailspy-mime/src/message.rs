//! Outgoing message representation.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::mailbox::{Mailbox, Mailboxes};

/// A nested message part, appended after the main body when serializing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Part {
    /// MIME content type of the part.
    pub content_type: String,
    /// Part body.
    pub body: String,
    /// Nested sub-parts.
    pub parts: Vec<Part>,
}

impl Part {
    /// Creates a new part.
    #[must_use]
    pub fn new(content_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            body: body.into(),
            parts: Vec::new(),
        }
    }

    /// Nests a sub-part under this one.
    #[must_use]
    pub fn part(mut self, part: Self) -> Self {
        self.parts.push(part);
        self
    }

    fn render_into(&self, out: &mut String) {
        use std::fmt::Write;

        let _ = write!(out, "Content-Type: {}\r\n", self.content_type);
        out.push_str("\r\n");
        out.push_str(&self.body);

        for part in &self.parts {
            out.push_str("\r\n\r\n");
            part.render_into(out);
        }
    }
}

/// An outgoing mail message.
///
/// Composed once by the code under test via the builder-style setters, then
/// only read by the ledger and transports.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    date: DateTime<Utc>,
    from: Mailboxes,
    to: Mailboxes,
    cc: Mailboxes,
    bcc: Mailboxes,
    reply_to: Mailboxes,
    subject: String,
    body: String,
    content_type: String,
    parts: Vec<Part>,
}

impl Message {
    /// Creates a new message with the given subject and body.
    ///
    /// The send date defaults to the construction instant and the content
    /// type to `text/plain`.
    #[must_use]
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            date: Utc::now(),
            from: Mailboxes::new(),
            to: Mailboxes::new(),
            cc: Mailboxes::new(),
            bcc: Mailboxes::new(),
            reply_to: Mailboxes::new(),
            subject: subject.into(),
            body: body.into(),
            content_type: "text/plain".to_string(),
            parts: Vec::new(),
        }
    }

    /// Sets the send date.
    #[must_use]
    pub const fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Adds a from address.
    #[must_use]
    pub fn from(mut self, address: impl Into<String>) -> Self {
        self.from.insert(Mailbox::new(address));
        self
    }

    /// Adds a from address with a display name.
    #[must_use]
    pub fn from_named(mut self, address: impl Into<String>, name: impl Into<String>) -> Self {
        self.from.insert(Mailbox::named(address, name));
        self
    }

    /// Adds a recipient.
    #[must_use]
    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.to.insert(Mailbox::new(address));
        self
    }

    /// Adds a recipient with a display name.
    #[must_use]
    pub fn to_named(mut self, address: impl Into<String>, name: impl Into<String>) -> Self {
        self.to.insert(Mailbox::named(address, name));
        self
    }

    /// Adds a CC recipient.
    #[must_use]
    pub fn cc(mut self, address: impl Into<String>) -> Self {
        self.cc.insert(Mailbox::new(address));
        self
    }

    /// Adds a BCC recipient.
    #[must_use]
    pub fn bcc(mut self, address: impl Into<String>) -> Self {
        self.bcc.insert(Mailbox::new(address));
        self
    }

    /// Adds a reply-to address.
    #[must_use]
    pub fn reply_to(mut self, address: impl Into<String>) -> Self {
        self.reply_to.insert(Mailbox::new(address));
        self
    }

    /// Sets the content type.
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Appends a nested part.
    #[must_use]
    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// The send date.
    #[must_use]
    pub const fn sent_at(&self) -> DateTime<Utc> {
        self.date
    }

    /// The from-address mapping.
    #[must_use]
    pub const fn from_addresses(&self) -> &Mailboxes {
        &self.from
    }

    /// The to-address mapping.
    #[must_use]
    pub const fn to_addresses(&self) -> &Mailboxes {
        &self.to
    }

    /// The CC mapping.
    #[must_use]
    pub const fn cc_addresses(&self) -> &Mailboxes {
        &self.cc
    }

    /// The BCC mapping.
    #[must_use]
    pub const fn bcc_addresses(&self) -> &Mailboxes {
        &self.bcc
    }

    /// The reply-to mapping.
    #[must_use]
    pub const fn reply_to_addresses(&self) -> &Mailboxes {
        &self.reply_to
    }

    /// The subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The content type.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.content_type
    }

    /// Nested parts.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Number of intended recipients (to + cc + bcc).
    #[must_use]
    pub fn recipient_count(&self) -> usize {
        self.to.len() + self.cc.len() + self.bcc.len()
    }

    /// Builds the full serialized textual representation: headers, a blank
    /// line, the body, then every nested part recursively, each separated by
    /// a blank line.
    #[must_use]
    pub fn raw(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();

        let _ = write!(out, "Date: {}\r\n", self.date.to_rfc2822());

        if !self.from.is_empty() {
            let _ = write!(out, "From: {}\r\n", self.from);
        }

        if !self.to.is_empty() {
            let _ = write!(out, "To: {}\r\n", self.to);
        }

        if !self.cc.is_empty() {
            let _ = write!(out, "Cc: {}\r\n", self.cc);
        }

        if !self.bcc.is_empty() {
            let _ = write!(out, "Bcc: {}\r\n", self.bcc);
        }

        if !self.reply_to.is_empty() {
            let _ = write!(out, "Reply-To: {}\r\n", self.reply_to);
        }

        let _ = write!(out, "Subject: {}\r\n", self.subject);
        out.push_str("MIME-Version: 1.0\r\n");
        let _ = write!(out, "Content-Type: {}\r\n", self.content_type);

        // Empty line between headers and body
        out.push_str("\r\n");
        out.push_str(&self.body);

        for part in &self.parts {
            out.push_str("\r\n\r\n");
            part.render_into(&mut out);
        }

        out
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw())
    }
}
