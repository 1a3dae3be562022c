//! Log sanitization utilities for masking personal data.
//!
//! Names and email addresses are masked before they reach the log output so
//! that request logs do not carry full PII.

const VISIBLE_CHARS: usize = 3;

fn visible_prefix(value: &str) -> &str {
    match value.char_indices().nth(VISIBLE_CHARS) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// Mask an email address for safe logging.
///
/// Keeps at most the first three characters of the local part and the
/// whole domain.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("john@smith.com"), "joh***@smith.com");
/// assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local_part, domain) = email.split_at(at_pos);
            format!("{}***{}", visible_prefix(local_part), domain)
        }
        None => format!("{}***", visible_prefix(email)),
    }
}

/// Mask a user's name for safe logging.
pub fn mask_name(name: &str) -> String {
    format!("{}***", visible_prefix(name))
}
