//! # mailspy-mime
//!
//! Outgoing mail message types for the `mailspy` test transports.
//!
//! The types here describe a message that has already been composed by the
//! code under test: ordered recipient mappings, subject, body, optional
//! nested parts, and a deterministic raw serialization. Nothing in this crate
//! sends anything.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailspy_mime::Message;
//!
//! let message = Message::new("Welcome", "Hello!")
//!     .from("noreply@example.com")
//!     .to_named("me@example.com", "Me")
//!     .cc("audit@example.com");
//!
//! assert_eq!(message.recipient_count(), 2);
//! println!("{}", message.raw());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod mailbox;
mod message;

pub use mailbox::{Mailbox, Mailboxes};
pub use message::{Message, Part};
