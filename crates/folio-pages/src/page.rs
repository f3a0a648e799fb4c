//! Page and front matter model.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_yaml::Mapping;

use crate::error::PageError;
use crate::front_matter::{parse_front_matter, split_front_matter};

/// First ATX level-1 heading in a markdown body.
static H1_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+?)(?:[ \t]+#+)?[ \t]*\r?$").expect("valid H1 pattern"));

/// Per-page layout configuration.
///
/// Supplied by the caller when rendering. Every field is optional; the
/// default value is the empty front matter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    /// File identifier of the page being rendered.
    #[serde(default)]
    pub file: Option<String>,
    /// Extra class for the `<main>` element.
    #[serde(default, rename = "mainClass", alias = "main_class")]
    pub main_class: Option<String>,
    /// Explicit page title. Numbers are accepted and kept as written.
    #[serde(default, deserialize_with = "string_or_number")]
    pub title: Option<String>,
}

/// Deserialize an optional scalar that may be written as a YAML number.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(serde_yaml::Number),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Number(number) => number.to_string(),
    }))
}

impl FrontMatter {
    /// Front matter that identifies `file` and sets nothing else.
    #[must_use]
    pub fn for_file(file: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            ..Self::default()
        }
    }
}

/// A content page with its metadata.
///
/// Pages are read-only once collected.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    /// File identifier, relative to the source directory with `/` separators.
    pub file: String,
    /// URL path (e.g. `""`, `"guide"`, `"guide/setup"`).
    pub url_path: String,
    /// Resolved title: front matter `title` > first H1 > file name.
    pub title: String,
    /// Markdown body with front matter removed.
    pub body: String,
    /// Layout settings from the page's own front matter. `file` is always set.
    pub front_matter: FrontMatter,
    /// Front matter keys not consumed by [`FrontMatter`].
    pub meta: Mapping,
}

impl Page {
    /// Build a page from its identifier and raw source.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::FrontMatter`] if the front matter block is invalid.
    pub fn from_source(file: impl Into<String>, source: &str) -> Result<Self, PageError> {
        let file = file.into();
        let (yaml, body) = split_front_matter(source);

        let (mut front_matter, meta) =
            parse_front_matter(yaml.unwrap_or_default()).map_err(|message| {
                PageError::FrontMatter {
                    file: file.clone(),
                    message,
                }
            })?;

        if front_matter.file.as_ref().is_some_and(|f| *f != file) {
            tracing::debug!(%file, "Ignoring `file` key in front matter");
        }
        front_matter.file = Some(file.clone());

        let title = front_matter
            .title
            .clone()
            .or_else(|| first_h1(body))
            .unwrap_or_else(|| title_from_file(&file));

        Ok(Self {
            url_path: url_path_for(&file),
            file,
            title,
            body: body.to_owned(),
            front_matter,
            meta,
        })
    }

    /// Href of the rendered page, with a trailing slash.
    #[must_use]
    pub fn href(&self) -> String {
        if self.url_path.is_empty() {
            "/".to_owned()
        } else {
            format!("/{}/", self.url_path)
        }
    }
}

/// Extract the first H1 heading text from a markdown body.
fn first_h1(body: &str) -> Option<String> {
    let caps = H1_REGEX.captures(body)?;
    Some(caps[1].trim().to_owned())
}

/// Convert a file identifier to its URL path.
///
/// Examples:
/// - `index.md` -> `""`
/// - `guide.md` -> `"guide"`
/// - `domain/index.md` -> `"domain"`
/// - `domain/setup.md` -> `"domain/setup"`
pub fn url_path_for(file: &str) -> String {
    let without_ext = file.strip_suffix(".md").unwrap_or(file);

    if without_ext == "index" {
        String::new()
    } else if let Some(without_index) = without_ext.strip_suffix("/index") {
        without_index.to_owned()
    } else {
        without_ext.to_owned()
    }
}

/// Derive a title from a file identifier.
///
/// Index files take their directory name. The root index becomes "Home".
fn title_from_file(file: &str) -> String {
    match url_path_for(file).rsplit('/').next() {
        None | Some("") => "Home".to_owned(),
        Some(slug) => titlecase_from_slug(slug),
    }
}

/// Convert a slug (kebab-case or `snake_case`) to title case.
fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}
