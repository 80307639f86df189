//! # mailspy
//!
//! Test-support transports for outgoing mail. Nothing here delivers anything:
//! a send is recorded in an in-memory [`Ledger`] for assertions and rendered
//! to disk for human inspection.
//!
//! Two transports are provided, selected by [`MailConfig::driver`]:
//!
//! - [`PreviewTransport`] (the default) writes a pair of preview files per
//!   message: `<slug>.html` with a metadata header comment and the body, and
//!   `<slug>.eml` with the full raw serialization. Previews older than a
//!   configured lifetime are pruned before each write cycle.
//! - [`LogTransport`] appends every message's raw serialization to one
//!   growing log file, separated by a delimiter line.
//!
//! Both notify registered [`MailObserver`]s once per send, before any file
//! I/O, so the ledger reflects every send attempt even when the preview write
//! fails.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailspy::{Ledger, LocalFilesystem, Message, PreviewTransport, Transport};
//!
//! let ledger = Ledger::new();
//! let mut transport = PreviewTransport::new(LocalFilesystem::new(), "storage/emails");
//! transport.register_observer(Box::new(ledger.clone()));
//!
//! let message = Message::new("Welcome", "Hello!")
//!     .from("noreply@example.com")
//!     .to("me@example.com");
//! transport.send(&message)?;
//!
//! ledger
//!     .assert_sent()
//!     .assert_subject_contains("Welcome")
//!     .assert_sent_to("me@example.com");
//! ```
//!
//! The ledger and the transports are scoped to a single test: call
//! [`Ledger::reset`] at the start of each test, and give every worker its own
//! instances when a test runner executes in parallel. Neither component is
//! meant for concurrent use by multiple callers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod assert;
mod config;
mod error;
mod fs;
mod ledger;
mod observer;
mod slug;
mod transport;

pub use config::{MailConfig, MailDriver};
pub use error::{Error, Result};
pub use fs::{Filesystem, LocalFilesystem};
pub use ledger::Ledger;
pub use mailspy_mime::{Mailbox, Mailboxes, Message, Part};
pub use observer::MailObserver;
pub use transport::{LogTransport, PreviewTransport, Transport, transport_from_config};
