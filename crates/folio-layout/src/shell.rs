//! HTML page shell.
//!
//! Produces the document skeleton every page shares. CSS hooks:
//! `docs-main` wraps navigation, content and sidebar; `main` is the content
//! element; `toc-sidebar` and `sidebar` hold the table of contents;
//! `footer-inner` holds the footer text.

use std::fmt::Write;

use folio_toc::escape_html;

use crate::nav::{NavItem, render_nav};

/// Everything needed to render one page shell.
pub(crate) struct ShellData<'a> {
    pub lang: &'a str,
    pub title: &'a str,
    pub site_title: &'a str,
    pub stylesheets: &'a [String],
    pub navigation: &'a [NavItem],
    pub main_class: Option<&'a str>,
    /// Trusted HTML for the content slot.
    pub content: &'a str,
    /// Trusted HTML fragment; `None` hides the sidebar.
    pub toc: Option<&'a str>,
    pub footer: Option<&'a str>,
}

/// Render a complete HTML document.
pub(crate) fn render_document(data: &ShellData<'_>) -> String {
    let mut html = String::with_capacity(4096 + data.content.len());

    html.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(html, "<html lang=\"{}\">", escape_html(data.lang));
    render_head(&mut html, data);
    html.push_str("<body>\n");

    html.push_str("<div class=\"docs-main\">\n");
    render_nav(&mut html, data.site_title, data.navigation);
    render_main(&mut html, data.main_class, data.content);
    if let Some(toc) = data.toc {
        render_toc_sidebar(&mut html, toc);
    }
    html.push_str("</div>\n");

    render_footer(&mut html, data.footer);

    html.push_str("</body>\n</html>\n");
    html
}

fn render_head(html: &mut String, data: &ShellData<'_>) {
    html.push_str("<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(data.title));
    for href in data.stylesheets {
        let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{}\">", escape_html(href));
    }
    html.push_str("</head>\n");
}

fn render_main(html: &mut String, main_class: Option<&str>, content: &str) {
    match main_class.map(str::trim).filter(|c| !c.is_empty()) {
        Some(extra) => {
            let _ = writeln!(html, "<main class=\"main {}\">", escape_html(extra));
        }
        None => html.push_str("<main class=\"main\">\n"),
    }
    html.push_str(content);
    if !content.ends_with('\n') {
        html.push('\n');
    }
    html.push_str("</main>\n");
}

fn render_toc_sidebar(html: &mut String, toc: &str) {
    html.push_str("<aside class=\"toc-sidebar\">\n");
    html.push_str("<div class=\"sidebar\">\n");
    html.push_str(toc);
    if !toc.ends_with('\n') {
        html.push('\n');
    }
    html.push_str("</div>\n</aside>\n");
}

fn render_footer(html: &mut String, footer: Option<&str>) {
    html.push_str("<footer>\n<div class=\"footer-inner\">");
    if let Some(text) = footer {
        html.push_str(&escape_html(text));
    }
    html.push_str("</div>\n</footer>\n");
}
