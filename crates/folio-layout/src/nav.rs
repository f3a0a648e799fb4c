//! Navigation sidebar tree.

use std::collections::HashMap;
use std::fmt::Write;

use folio_config::NavEntry;
use folio_pages::Page;
use folio_toc::escape_html;

/// Navigation item in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Link text.
    pub title: String,
    /// Link target.
    pub href: String,
    /// Whether this item is the page being rendered.
    pub is_active: bool,
    /// Nested items.
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// Build the tree from pages in collection order.
    ///
    /// A page nests under the closest ancestor URL path that has a page of
    /// its own; `guide/setup` goes under `guide` when `guide` exists. The root
    /// page stays at the top level. The page whose file equals `active_file`
    /// is marked active.
    pub fn from_pages(pages: &[Page], active_file: Option<&str>) -> Vec<Self> {
        let mut by_path: HashMap<&str, usize> = HashMap::with_capacity(pages.len());
        for (index, page) in pages.iter().enumerate() {
            by_path.entry(page.url_path.as_str()).or_insert(index);
        }

        let mut children = vec![Vec::new(); pages.len()];
        let mut roots = Vec::new();
        for (index, page) in pages.iter().enumerate() {
            match parent_index(&page.url_path, &by_path) {
                Some(parent) => children[parent].push(index),
                None => roots.push(index),
            }
        }

        roots
            .into_iter()
            .map(|index| build_item(index, pages, &children, active_file))
            .collect()
    }

    /// Build the tree from configured entries.
    ///
    /// An entry is active when its href equals `active_href`.
    pub fn from_entries(entries: &[NavEntry], active_href: Option<&str>) -> Vec<Self> {
        entries
            .iter()
            .map(|entry| Self {
                title: entry.title.clone(),
                href: entry.href.clone(),
                is_active: active_href == Some(entry.href.as_str()),
                children: Self::from_entries(&entry.children, active_href),
            })
            .collect()
    }
}

/// Index of the nearest ancestor page, skipping the root.
fn parent_index(url_path: &str, by_path: &HashMap<&str, usize>) -> Option<usize> {
    let mut current = url_path;
    while let Some((parent, _)) = current.rsplit_once('/') {
        if let Some(&index) = by_path.get(parent) {
            return Some(index);
        }
        current = parent;
    }
    None
}

fn build_item(
    index: usize,
    pages: &[Page],
    children: &[Vec<usize>],
    active_file: Option<&str>,
) -> NavItem {
    let page = &pages[index];
    NavItem {
        title: page.title.clone(),
        href: page.href(),
        is_active: active_file == Some(page.file.as_str()),
        children: children[index]
            .iter()
            .map(|&child| build_item(child, pages, children, active_file))
            .collect(),
    }
}

/// Render the navigation sidebar.
pub(crate) fn render_nav(html: &mut String, site_title: &str, items: &[NavItem]) {
    html.push_str("<nav class=\"docs-nav\">\n");
    let _ = writeln!(
        html,
        "<a href=\"/\" class=\"site-title\">{}</a>",
        escape_html(site_title)
    );
    if !items.is_empty() {
        html.push_str("<ul>\n");
        render_nav_items(html, items);
        html.push_str("</ul>\n");
    }
    html.push_str("</nav>\n");
}

/// Render navigation items recursively.
fn render_nav_items(html: &mut String, items: &[NavItem]) {
    for item in items {
        html.push_str("<li>");
        let active = if item.is_active {
            " active\" aria-current=\"page"
        } else {
            ""
        };
        let _ = write!(
            html,
            "<a href=\"{}\" class=\"nav-link{active}\">{}</a>",
            escape_html(&item.href),
            escape_html(&item.title),
        );
        if !item.children.is_empty() {
            html.push_str("\n<ul>\n");
            render_nav_items(html, &item.children);
            html.push_str("</ul>\n");
        }
        html.push_str("</li>\n");
    }
}
