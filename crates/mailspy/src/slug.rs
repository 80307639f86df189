//! Preview filename derivation.

use mailspy_mime::Message;

use crate::error::{Error, Result};

/// Derives the filename stem for a message's preview files.
///
/// The stem combines the epoch seconds of the send date, the first recipient
/// address (`@` becomes `_at_`, `.` becomes `_`) and the subject, joined by
/// underscores and slugified. Messages sharing all three components map to
/// the same stem and overwrite each other's previews.
pub(crate) fn preview_stem(message: &Message) -> Result<String> {
    let recipient = message.to_addresses().first().ok_or(Error::NoRecipients)?;
    let address = recipient.address.replace('@', "_at_").replace('.', "_");

    Ok(slugify(&format!(
        "{}_{}_{}",
        message.sent_at().timestamp(),
        address,
        message.subject()
    )))
}

/// Lowercases `input` and collapses every non-alphanumeric run to a single
/// underscore. Leading and trailing runs are dropped entirely.
pub(crate) fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for c in input.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_slugify_lowercases_and_collapses() {
        assert_eq!(slugify("Foo subject"), "foo_subject");
        assert_eq!(slugify("Hello,  World!"), "hello_world");
        assert_eq!(slugify("  padded  "), "padded");
        assert_eq!(slugify("Re: [urgent] FOO"), "re_urgent_foo");
    }

    #[test]
    fn test_preview_stem_combines_date_recipient_subject() {
        let date = Utc.with_ymd_and_hms(2016, 8, 9, 17, 37, 13).unwrap();
        let message = Message::new("Foo subject", "<html>Body</html>")
            .date(date)
            .from("myself@example.com")
            .to("me@example.com");

        let stem = preview_stem(&message).unwrap();
        assert_eq!(
            stem,
            format!("{}_me_at_example_com_foo_subject", date.timestamp())
        );
    }

    #[test]
    fn test_preview_stem_uses_first_recipient_only() {
        let message = Message::new("Hi", "body")
            .to("first@example.com")
            .to("second@example.com");

        let stem = preview_stem(&message).unwrap();
        assert!(stem.contains("first_at_example_com"));
        assert!(!stem.contains("second"));
    }

    #[test]
    fn test_preview_stem_requires_a_recipient() {
        let message = Message::new("Hi", "body");

        assert!(matches!(
            preview_stem(&message),
            Err(Error::NoRecipients)
        ));
    }

    #[test]
    fn test_preview_stem_is_case_insensitive() {
        let date = Utc.with_ymd_and_hms(2016, 8, 9, 17, 37, 13).unwrap();
        let lower = Message::new("foo subject", "body")
            .date(date)
            .to("me@example.com");
        let upper = Message::new("FOO Subject", "body")
            .date(date)
            .to("ME@example.com");

        assert_eq!(
            preview_stem(&lower).unwrap(),
            preview_stem(&upper).unwrap()
        );
    }

    proptest! {
        #[test]
        fn prop_slug_alphabet_is_bounded(input in ".*") {
            let slug = slugify(&input);
            prop_assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
            );
            prop_assert!(!slug.starts_with('_'));
            prop_assert!(!slug.ends_with('_'));
            prop_assert!(!slug.contains("__"));
        }

        #[test]
        fn prop_slugify_is_idempotent(input in ".*") {
            let once = slugify(&input);
            prop_assert_eq!(slugify(&once), once);
        }
    }
}
