//! Heading anchor ids and HTML escaping.

use std::collections::{HashMap, HashSet};

/// Convert text to URL-safe slug.
///
/// Converts to lowercase, replaces whitespace/dashes/underscores with single dashes,
/// and removes other non-alphanumeric characters.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true; // Prevents leading dash

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Hands out unique anchor ids within one document.
///
/// Repeated ids get `-1`, `-2`, ... suffixes, skipping any suffixed form
/// already handed out. Explicit ids follow the same rule. Headings that
/// slugify to nothing fall back to `section`.
#[derive(Default)]
pub(crate) struct AnchorIds {
    used: HashSet<String>,
    suffixes: HashMap<String, usize>,
}

impl AnchorIds {
    /// Claim an id chosen by the author (`{#id}` heading attribute).
    pub(crate) fn reserve(&mut self, id: &str) -> String {
        self.claim(id.to_owned())
    }

    /// Generate a unique id for heading text.
    pub(crate) fn next(&mut self, text: &str) -> String {
        let mut base = slugify(text);
        if base.is_empty() {
            base.push_str("section");
        }
        self.claim(base)
    }

    fn claim(&mut self, base: String) -> String {
        if self.used.insert(base.clone()) {
            return base;
        }
        let suffix = self.suffixes.entry(base.clone()).or_default();
        loop {
            *suffix += 1;
            let candidate = format!("{base}-{suffix}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
