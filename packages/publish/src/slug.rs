//! Public URL slugs.
//!
//! A slug is lowercase ASCII letters, digits and single dashes, never
//! starting or ending with a dash.

use uuid::Uuid;

/// Lowercase `text` and collapse every run of other characters into `-`.
///
/// Returns an empty string when `text` has no ASCII letters or digits.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// First 8 hex digits of a fresh v4 uuid
pub fn short_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

pub fn with_suffix(slug: &str) -> String {
    if slug.is_empty() {
        short_id()
    } else {
        format!("{}-{}", slug, short_id())
    }
}
