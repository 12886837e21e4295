//! Slug and path segment generation.

use regex::Regex;
use std::sync::OnceLock;

/// Generate the URL slug of a heading.
///
/// Spaces become hyphens and the result is lowercased; nothing else is
/// touched, so slugs stay stable for titles that carry markdown emphasis.
///
/// # Examples
///
/// ```
/// use ungdocs::convert::slugify;
///
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("FAQ"), "faq");
/// ```
pub fn slugify(heading: &str) -> String {
    heading.replace(' ', "-").to_lowercase()
}

fn word_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").expect("valid separator regex"))
}

/// Convert a file or folder name into a kebab-case path segment.
///
/// Words are split on any non-alphanumeric character, on lower-to-upper
/// case transitions, at the end of an uppercase acronym and between letters
/// and digits.
///
/// # Examples
///
/// ```
/// use ungdocs::convert::kebab_case;
///
/// assert_eq!(kebab_case("Release Notes"), "release-notes");
/// assert_eq!(kebab_case("apiReference"), "api-reference");
/// assert_eq!(kebab_case("HTTPServer v2"), "http-server-v-2");
/// ```
pub fn kebab_case(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();

    for chunk in word_separator().split(name).filter(|c| !c.is_empty()) {
        let chars: Vec<char> = chunk.chars().collect();
        let mut current = String::new();

        for (i, &c) in chars.iter().enumerate() {
            if let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p)) {
                let next = chars.get(i + 1).copied();
                let boundary = (prev.is_lowercase() && c.is_uppercase())
                    || (prev.is_uppercase()
                        && c.is_uppercase()
                        && next.is_some_and(|n| n.is_lowercase()))
                    || (prev.is_alphabetic() && c.is_numeric())
                    || (prev.is_numeric() && c.is_alphabetic());
                if boundary && !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            current.extend(c.to_lowercase());
        }

        if !current.is_empty() {
            words.push(current);
        }
    }

    words.join("-")
}
