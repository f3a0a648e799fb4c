//! YAML front matter splitting and parsing.

use serde_yaml::{Mapping, Value};

use crate::page::FrontMatter;

/// Fence line opening and closing a front matter block.
const FENCE: &str = "---";

/// Keys consumed by [`FrontMatter`], including aliases.
const KNOWN_KEYS: &[&str] = &["file", "mainClass", "main_class", "title"];

/// Split a source file into its front matter block and body.
///
/// Front matter must start on the first line with `---` and end at the next
/// line consisting of `---` (or `...`). Without a closing fence the whole
/// input is treated as body.
///
/// # Examples
///
/// ```
/// use folio_pages::split_front_matter;
///
/// let (yaml, body) = split_front_matter("---\ntitle: Hi\n---\n# Body\n");
/// assert_eq!(yaml, Some("title: Hi\n"));
/// assert_eq!(body, "# Body\n");
/// ```
pub fn split_front_matter(source: &str) -> (Option<&str>, &str) {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let Some(rest) = strip_fence_line(source) else {
        return (None, source);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed == FENCE || trimmed == "..." {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    (None, source)
}

/// Strip the opening fence line, returning the remainder.
fn strip_fence_line(source: &str) -> Option<&str> {
    let rest = source.strip_prefix(FENCE)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Parse a front matter block into known fields and remaining metadata.
///
/// Recognised keys are `title`, `mainClass` (or `main_class`) and `file`.
/// Every other key is returned untouched in the mapping. Empty input yields
/// defaults.
///
/// # Errors
///
/// Returns the parser message if the block is not a YAML mapping, a
/// recognised key holds a non-string value, or both `mainClass` and
/// `main_class` are set.
pub fn parse_front_matter(yaml: &str) -> Result<(FrontMatter, Mapping), String> {
    if yaml.trim().is_empty() {
        return Ok((FrontMatter::default(), Mapping::new()));
    }

    let mut mapping = match serde_yaml::from_str::<Value>(yaml).map_err(|e| e.to_string())? {
        Value::Mapping(mapping) => mapping,
        Value::Null => Mapping::new(),
        _ => return Err("front matter must be a mapping".to_owned()),
    };

    let front_matter: FrontMatter = serde_yaml::from_value(Value::Mapping(mapping.clone()))
        .map_err(|e| e.to_string())?;
    for key in KNOWN_KEYS {
        mapping.remove(*key);
    }

    Ok((front_matter, mapping))
}
