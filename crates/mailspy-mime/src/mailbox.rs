//! Recipient mailbox types.

use std::fmt;

/// Mailbox (address + optional display name).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mailbox {
    /// Email address.
    pub address: String,
    /// Display name (optional).
    pub name: Option<String>,
}

impl Mailbox {
    /// Creates a mailbox with just an address.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: None,
        }
    }

    /// Creates a mailbox with an address and a display name.
    #[must_use]
    pub fn named(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: Some(name.into()),
        }
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} <{}>", self.address),
            None => write!(f, "{}", self.address),
        }
    }
}

/// An insertion-ordered mapping of address to display name.
///
/// Order matters: the first entry of a message's to-mapping is the one
/// preview filenames are derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mailboxes(Vec<Mailbox>);

impl Mailboxes {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a mailbox, keeping earlier entries in place.
    pub fn insert(&mut self, mailbox: Mailbox) {
        self.0.push(mailbox);
    }

    /// Whether the mapping contains `address` as an exact key.
    #[must_use]
    pub fn contains(&self, address: &str) -> bool {
        self.0.iter().any(|mailbox| mailbox.address == address)
    }

    /// The first entry, in insertion order.
    #[must_use]
    pub fn first(&self) -> Option<&Mailbox> {
        self.0.first()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Mailbox> {
        self.0.iter()
    }

    /// Iterates over the address keys in insertion order.
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|mailbox| mailbox.address.as_str())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Mailboxes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mailbox) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{mailbox}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Mailboxes {
    type Item = &'a Mailbox;
    type IntoIter = std::slice::Iter<'a, Mailbox>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mailbox_display() {
        assert_eq!(Mailbox::new("me@example.com").to_string(), "me@example.com");
        assert_eq!(
            Mailbox::named("me@example.com", "Jack Black").to_string(),
            "Jack Black <me@example.com>"
        );
    }

    #[test]
    fn test_mailboxes_preserve_insertion_order() {
        let mut mailboxes = Mailboxes::new();
        mailboxes.insert(Mailbox::new("z@example.com"));
        mailboxes.insert(Mailbox::new("a@example.com"));

        assert_eq!(mailboxes.first().unwrap().address, "z@example.com");
        let addresses: Vec<&str> = mailboxes.addresses().collect();
        assert_eq!(addresses, vec!["z@example.com", "a@example.com"]);
    }

    #[test]
    fn test_mailboxes_contains_is_exact() {
        let mut mailboxes = Mailboxes::new();
        mailboxes.insert(Mailbox::new("me@example.com"));

        assert!(mailboxes.contains("me@example.com"));
        assert!(!mailboxes.contains("me@example"));
        assert!(!mailboxes.contains("ME@example.com"));
    }

    #[test]
    fn test_mailboxes_display() {
        let mut mailboxes = Mailboxes::new();
        mailboxes.insert(Mailbox::named("a@example.com", "A"));
        mailboxes.insert(Mailbox::new("b@example.com"));

        assert_eq!(mailboxes.to_string(), "A <a@example.com>, b@example.com");
    }
}
