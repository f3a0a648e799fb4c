//! Heading extraction and anchored content rendering.

use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

use crate::slug::AnchorIds;

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor ID for linking.
    pub id: String,
}

/// Heading being buffered until its end tag.
struct PendingHeading<'a> {
    level: HeadingLevel,
    explicit_id: Option<CowStr<'a>>,
    classes: Vec<CowStr<'a>>,
    attrs: Vec<(CowStr<'a>, Option<CowStr<'a>>)>,
    text: String,
    inner: Vec<Event<'a>>,
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Parse markdown into events where every heading carries an anchor id.
///
/// Returns the rewritten events and one entry per heading, in document order.
fn anchored_events(markdown: &str) -> (Vec<Event<'_>>, Vec<TocEntry>) {
    let mut ids = AnchorIds::default();
    let mut events = Vec::new();
    let mut entries = Vec::new();
    let mut pending: Option<PendingHeading<'_>> = None;

    for event in Parser::new_ext(markdown, parser_options()) {
        match event {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => {
                pending = Some(PendingHeading {
                    level,
                    explicit_id: id,
                    classes,
                    attrs,
                    text: String::new(),
                    inner: Vec::new(),
                });
            }
            Event::End(TagEnd::Heading(_)) => {
                let Some(heading) = pending.take() else {
                    events.push(event);
                    continue;
                };
                let id = match &heading.explicit_id {
                    Some(explicit) => ids.reserve(explicit),
                    None => ids.next(&heading.text),
                };
                entries.push(TocEntry {
                    level: heading_level_to_num(heading.level),
                    title: heading.text.trim().to_owned(),
                    id: id.clone(),
                });
                events.push(Event::Start(Tag::Heading {
                    level: heading.level,
                    id: Some(CowStr::from(id)),
                    classes: heading.classes,
                    attrs: heading.attrs,
                }));
                events.extend(heading.inner);
                events.push(event);
            }
            other => match pending.as_mut() {
                Some(heading) => {
                    match &other {
                        Event::Text(text) | Event::Code(text) => heading.text.push_str(text),
                        Event::SoftBreak | Event::HardBreak => heading.text.push(' '),
                        _ => {}
                    }
                    heading.inner.push(other);
                }
                None => events.push(other),
            },
        }
    }

    (events, entries)
}

/// Extract every heading of a markdown document with its anchor id.
#[must_use]
pub fn extract_headings(markdown: &str) -> Vec<TocEntry> {
    anchored_events(markdown).1
}

/// Render markdown to HTML with anchor ids on every heading.
///
/// The ids match those returned by [`extract_headings`].
#[must_use]
pub fn render_content(markdown: &str) -> String {
    let (events, _) = anchored_events(markdown);
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, events.into_iter());
    output
}

/// Convert heading level enum to number (1-6).
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
