//! Mail driver configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which substitute transport handles intercepted mail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailDriver {
    /// Directory of per-message `.html`/`.eml` previews.
    #[default]
    Preview,
    /// Single growing log file.
    Log,
}

/// Settings for the substitute mail transports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// Transport selected for intercepted mail.
    pub driver: MailDriver,
    /// Directory the preview transport writes into.
    pub preview_path: PathBuf,
    /// Seconds a preview file may age before the next send prunes it.
    pub preview_lifetime: u64,
    /// File the log transport appends to.
    pub log_path: PathBuf,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            driver: MailDriver::Preview,
            preview_path: PathBuf::from("storage/emails"),
            preview_lifetime: 60,
            log_path: PathBuf::from("storage/logs/mail.log"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MailConfig::default();

        assert_eq!(config.driver, MailDriver::Preview);
        assert_eq!(config.preview_path, PathBuf::from("storage/emails"));
        assert_eq!(config.preview_lifetime, 60);
        assert_eq!(config.log_path, PathBuf::from("storage/logs/mail.log"));
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let config: MailConfig =
            serde_json::from_str(r#"{"driver": "log", "preview_lifetime": 120}"#).unwrap();

        assert_eq!(config.driver, MailDriver::Log);
        assert_eq!(config.preview_lifetime, 120);
        assert_eq!(config.preview_path, PathBuf::from("storage/emails"));
    }

    #[test]
    fn test_driver_names_round_trip() {
        assert_eq!(
            serde_json::to_string(&MailDriver::Preview).unwrap(),
            r#""preview""#
        );
        assert_eq!(serde_json::to_string(&MailDriver::Log).unwrap(), r#""log""#);
    }
}
