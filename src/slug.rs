//! Slug Normalization
//!
//! Keeps slug paths URL-safe while the user types.

/// Whitespace as browsers match `\s`: Unicode `White_Space` without
/// U+0085, plus the byte-order mark U+FEFF.
fn is_form_whitespace(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{feff}'
}

/// Normalize a raw slug input.
///
/// Whitespace runs become a single `-`, anything outside
/// `[a-zA-Z0-9-./]` is dropped, and the result is lowercased.
pub fn normalize_slug(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_whitespace = false;

    for ch in raw.chars() {
        if is_form_whitespace(ch) {
            if !in_whitespace {
                out.push('-');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.' | '/') {
            out.push(ch.to_ascii_lowercase());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_slug_char(ch: char) -> bool {
        ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(ch, '-' | '.' | '/')
    }

    #[test]
    fn test_spaces_and_punctuation() {
        assert_eq!(normalize_slug("My Page!!"), "my-page");
    }

    #[test]
    fn test_whitespace_run_collapses() {
        assert_eq!(normalize_slug("docs \t\n guide"), "docs-guide");
    }

    #[test]
    fn test_keeps_path_characters() {
        assert_eq!(normalize_slug("Blog/2024/Release.Notes"), "blog/2024/release.notes");
    }

    #[test]
    fn test_stripped_char_between_spaces() {
        // Whitespace is replaced before stripping, so both hyphens survive
        assert_eq!(normalize_slug("a ! b"), "a--b");
    }

    #[test]
    fn test_non_ascii_dropped() {
        assert_eq!(normalize_slug("Café Über"), "caf-ber");
    }

    #[test]
    fn test_whitespace_matches_browser_class() {
        assert_eq!(normalize_slug("a\u{FEFF}b"), "a-b");
        assert_eq!(normalize_slug("a\u{00A0}\u{3000}b"), "a-b");
        // NEL is not whitespace to the browser, so it is just stripped
        assert_eq!(normalize_slug("a\u{0085}b"), "ab");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize_slug(""), "");
    }

    proptest! {
        #[test]
        fn prop_output_is_url_safe(raw in any::<String>()) {
            let slug = normalize_slug(&raw);
            prop_assert!(slug.chars().all(is_slug_char), "unexpected char in {:?}", slug);
            prop_assert!(!slug.chars().any(char::is_whitespace));
            prop_assert_eq!(slug.to_lowercase(), slug.clone());
        }

        #[test]
        fn prop_idempotent(raw in "[ A-Za-z0-9!@#./_-]{0,40}") {
            let once = normalize_slug(&raw);
            prop_assert_eq!(normalize_slug(&once), once.clone());
        }
    }
}
