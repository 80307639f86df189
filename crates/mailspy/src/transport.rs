//! Substitute mail transports.
//!
//! Neither transport delivers anything. [`PreviewTransport`] renders each
//! message to a pair of preview files in a directory it manages;
//! [`LogTransport`] appends each message to one growing log file. Both notify
//! registered observers before touching the filesystem and return the
//! intended-recipient count.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use mailspy_mime::{Mailboxes, Message};
use tracing::debug;

use crate::config::{MailConfig, MailDriver};
use crate::error::Result;
use crate::fs::Filesystem;
use crate::observer::MailObserver;
use crate::slug::preview_stem;

/// Sentinel dropped into a fresh preview directory so external tooling
/// ignores everything else in it.
const IGNORE_MARKER: &str = "*\n!.gitignore";

/// Separator line between messages in the single-file log.
const LOG_DELIMITER: &str =
    "=============================================================================";

/// How long a preview file may age before the next send prunes it.
const DEFAULT_LIFETIME: Duration = Duration::from_secs(60);

/// A mail-sending endpoint.
pub trait Transport {
    /// Records and renders `message`, returning the intended-recipient count
    /// (to + cc + bcc), never how many were actually delivered; nothing is.
    ///
    /// # Errors
    ///
    /// Returns an error when persisting the rendering fails. Observers have
    /// already been notified by then; there is no retry.
    fn send(&self, message: &Message) -> Result<usize>;

    /// Registers an observer notified once per send, before any file I/O.
    fn register_observer(&mut self, observer: Box<dyn MailObserver>);
}

/// Writes an HTML and a raw `.eml` preview of every message into a directory,
/// pruning previews older than the configured lifetime.
pub struct PreviewTransport<F> {
    fs: F,
    path: PathBuf,
    lifetime: Duration,
    observers: Vec<Box<dyn MailObserver>>,
}

impl<F: Filesystem> PreviewTransport<F> {
    /// Creates a preview transport writing into `path` with the default
    /// 60-second preview lifetime.
    #[must_use]
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
            lifetime: DEFAULT_LIFETIME,
            observers: Vec::new(),
        }
    }

    /// Overrides the preview lifetime.
    #[must_use]
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Creates a preview transport from `config`.
    #[must_use]
    pub fn from_config(fs: F, config: &MailConfig) -> Self {
        Self::new(fs, config.preview_path.clone())
            .with_lifetime(Duration::from_secs(config.preview_lifetime))
    }

    /// Creates the preview directory on first use, seeding it with the
    /// ignore marker. No-op when the directory already exists.
    fn ensure_preview_directory(&self) -> std::io::Result<()> {
        if self.fs.exists(&self.path) {
            return Ok(());
        }

        self.fs.make_directory(&self.path)?;
        self.fs.put(&self.path.join(".gitignore"), IGNORE_MARKER)
    }

    /// Deletes every file under the preview directory older than the
    /// configured lifetime. Runs before the new previews are written, so a
    /// message's own files are never candidates in the same cycle.
    fn clean_stale_previews(&self) -> std::io::Result<()> {
        let now = SystemTime::now();
        let mut stale = Vec::new();

        for file in self.fs.files(&self.path)? {
            let modified = self.fs.last_modified(&file)?;
            let age = now.duration_since(modified).unwrap_or_default();
            if age > self.lifetime {
                stale.push(file);
            }
        }

        if stale.is_empty() {
            return Ok(());
        }
        self.fs.delete(&stale)
    }
}

impl<F: Filesystem> Transport for PreviewTransport<F> {
    fn send(&self, message: &Message) -> Result<usize> {
        for observer in &self.observers {
            observer.message_sent(message);
        }

        self.ensure_preview_directory()?;
        self.clean_stale_previews()?;

        let stem = preview_stem(message)?;
        self.fs
            .put(&self.path.join(format!("{stem}.html")), &html_preview(message))?;
        self.fs
            .put(&self.path.join(format!("{stem}.eml")), &message.raw())?;

        debug!(subject = message.subject(), "sent mail");
        Ok(message.recipient_count())
    }

    fn register_observer(&mut self, observer: Box<dyn MailObserver>) {
        self.observers.push(observer);
    }
}

/// Appends every message's raw serialization to one growing log file.
pub struct LogTransport<F> {
    fs: F,
    path: PathBuf,
    observers: Vec<Box<dyn MailObserver>>,
}

impl<F: Filesystem> LogTransport<F> {
    /// Creates a log transport appending to `path`.
    #[must_use]
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
            observers: Vec::new(),
        }
    }

    /// Creates a log transport from `config`.
    #[must_use]
    pub fn from_config(fs: F, config: &MailConfig) -> Self {
        Self::new(fs, config.log_path.clone())
    }

    fn append_to_log(&self, rendered: &str) -> std::io::Result<()> {
        if !self.fs.exists(&self.path) {
            self.fs.put(&self.path, "")?;
        }
        self.fs
            .append(&self.path, &format!("{rendered}\n{LOG_DELIMITER}\n"))
    }
}

impl<F: Filesystem> Transport for LogTransport<F> {
    fn send(&self, message: &Message) -> Result<usize> {
        for observer in &self.observers {
            observer.message_sent(message);
        }

        self.append_to_log(&message.raw())?;

        debug!(subject = message.subject(), "sent mail");
        Ok(message.recipient_count())
    }

    fn register_observer(&mut self, observer: Box<dyn MailObserver>) {
        self.observers.push(observer);
    }
}

/// Builds the transport selected by `config.driver`.
pub fn transport_from_config<F>(fs: F, config: &MailConfig) -> Box<dyn Transport>
where
    F: Filesystem + 'static,
{
    match config.driver {
        MailDriver::Preview => Box::new(PreviewTransport::from_config(fs, config)),
        MailDriver::Log => Box::new(LogTransport::from_config(fs, config)),
    }
}

/// Renders the HTML preview: a metadata comment block with the JSON-encoded
/// address mappings and the literal subject, then the body verbatim.
fn html_preview(message: &Message) -> String {
    format!(
        "<!--\nFrom: {}\nTo: {}\nReply-To: {}\nCc: {}\nBcc: {}\nSubject: {}\n-->\n{}",
        json_mailboxes(message.from_addresses()),
        json_mailboxes(message.to_addresses()),
        json_mailboxes(message.reply_to_addresses()),
        json_mailboxes(message.cc_addresses()),
        json_mailboxes(message.bcc_addresses()),
        message.subject(),
        message.body()
    )
}

fn json_mailboxes(mailboxes: &Mailboxes) -> String {
    let mut map = serde_json::Map::new();
    for mailbox in mailboxes {
        map.insert(
            mailbox.address.clone(),
            serde_json::Value::String(mailbox.name.clone().unwrap_or_default()),
        );
    }
    serde_json::Value::Object(map).to_string()
}
