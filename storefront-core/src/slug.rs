//! Slug derivation for catalog titles.
//!
//! A slug is computed once, at product creation, and becomes the stable
//! external key used by update and delete. Nothing re-derives a slug from a
//! stored title; doing so would silently re-key the row.

/// Derive a URL-safe slug from a display title.
///
/// ASCII alphanumerics are kept and lowercased; every other run of
/// characters collapses to a single hyphen. Leading and trailing hyphens
/// are trimmed, so the result is either empty or bounded by alphanumerics.
pub fn slugify(input: &str) -> String {
    let mut slug = String::new();
    let mut last_was_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if !slug.is_empty() && !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_cases() {
        assert_eq!(slugify("Red Running Shoes"), "red-running-shoes");
        assert_eq!(slugify("  Multi   Space!!"), "multi-space");
        assert_eq!(slugify("foo/bar\\baz"), "foo-bar-baz");
    }

    #[test]
    fn slugify_is_deterministic() {
        let title = "Wireless Keyboard (DE layout)";
        assert_eq!(slugify(title), slugify(title));
    }

    #[test]
    fn slugify_output_charset() {
        let slug = slugify("  --Weird__ input:: 100% natural!  ");
        assert!(!slug.is_empty());
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!slug.starts_with('-'));
        assert!(!slug.ends_with('-'));
        assert!(!slug.contains("--"));
    }

    #[test]
    fn slugify_symbol_only_input_is_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!! ??? ..."), "");
    }

    #[test]
    fn slugify_keeps_digits() {
        assert_eq!(slugify("USB-C Hub 7-in-1"), "usb-c-hub-7-in-1");
    }
}
