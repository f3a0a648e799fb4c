//! Page layout rendering.

use std::sync::Arc;

use folio_config::{Config, NavEntry};
use folio_pages::{FrontMatter, Page, PageCollector};
use folio_toc::TocBuilder;

use crate::error::LayoutError;
use crate::nav::NavItem;
use crate::shell::{ShellData, render_document};

/// Site-wide settings for the page shell.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    /// Site title.
    pub title: String,
    /// Document language.
    pub lang: String,
    /// Footer text.
    pub footer: Option<String>,
    /// Stylesheet URLs.
    pub stylesheets: Vec<String>,
    /// Explicit navigation. Empty means derive from pages.
    pub nav: Vec<NavEntry>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            lang: "en".to_owned(),
            footer: None,
            stylesheets: Vec::new(),
            nav: Vec::new(),
        }
    }
}

impl From<&Config> for SiteSettings {
    fn from(config: &Config) -> Self {
        Self {
            title: config.site.title.clone(),
            lang: config.site.lang.clone(),
            footer: config.site.footer.clone(),
            stylesheets: config.site.stylesheets.clone(),
            nav: config.nav.clone(),
        }
    }
}

/// Inputs for one layout render.
#[derive(Debug, Clone, Default)]
pub struct RenderProps {
    /// Page configuration. Defaults to empty.
    pub frontmatter: FrontMatter,
    /// Rendered page content placed in the content slot.
    pub content: String,
    /// Title override. Falls back to front matter, then the matched page.
    pub title: Option<String>,
}

/// Result of looking up the current page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutContext {
    /// First page in collection order whose `file` matches.
    pub page: Option<Page>,
    /// Table of contents HTML. Empty when there is none.
    pub toc: String,
    /// Whether the table of contents sidebar is shown.
    pub show_sidebar: bool,
}

/// Renders pages into the shared documentation layout.
pub struct LayoutRenderer {
    collector: Arc<dyn PageCollector>,
    toc_builder: Arc<dyn TocBuilder>,
    settings: SiteSettings,
}

impl LayoutRenderer {
    /// Create a renderer.
    pub fn new(
        collector: Arc<dyn PageCollector>,
        toc_builder: Arc<dyn TocBuilder>,
        settings: SiteSettings,
    ) -> Self {
        Self {
            collector,
            toc_builder,
            settings,
        }
    }

    /// Page collector backing this renderer.
    #[must_use]
    pub fn collector(&self) -> &Arc<dyn PageCollector> {
        &self.collector
    }

    /// Site settings used for every page.
    #[must_use]
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Collect pages and look up the page named by `frontmatter.file`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Pages`] if pages cannot be collected.
    pub fn resolve(&self, frontmatter: &FrontMatter) -> Result<LayoutContext, LayoutError> {
        let pages = self.collector.pages()?;
        Ok(self.resolve_in(&pages, frontmatter))
    }

    /// Look up the page named by `frontmatter.file` in already-collected pages.
    ///
    /// The first page in collection order with an equal `file` wins. Without a
    /// match the table of contents is empty and the sidebar is hidden.
    pub fn resolve_in(&self, pages: &[Page], frontmatter: &FrontMatter) -> LayoutContext {
        let Some(file) = frontmatter.file.as_deref() else {
            return LayoutContext::default();
        };

        let Some(page) = pages.iter().find(|page| page.file == file) else {
            tracing::debug!(%file, "No page matches file, rendering without table of contents");
            return LayoutContext::default();
        };

        let toc = self.toc_builder.build_toc(page);
        let show_sidebar = !toc.is_empty();
        LayoutContext {
            page: Some(page.clone()),
            toc,
            show_sidebar,
        }
    }

    /// Collect pages and render a full document.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Pages`] if pages cannot be collected.
    pub fn render(&self, props: &RenderProps) -> Result<String, LayoutError> {
        let pages = self.collector.pages()?;
        Ok(self.render_in(&pages, props))
    }

    /// Render a full document against already-collected pages.
    pub fn render_in(&self, pages: &[Page], props: &RenderProps) -> String {
        let context = self.resolve_in(pages, &props.frontmatter);
        self.render_resolved(pages, props, &context)
    }

    /// Render a full document from a context produced by [`Self::resolve_in`].
    pub fn render_resolved(
        &self,
        pages: &[Page],
        props: &RenderProps,
        context: &LayoutContext,
    ) -> String {
        let navigation = self.navigation(pages, &props.frontmatter, context.page.as_ref());
        let title = self.document_title(props, context.page.as_ref());

        render_document(&ShellData {
            lang: &self.settings.lang,
            title: &title,
            site_title: &self.settings.title,
            stylesheets: &self.settings.stylesheets,
            navigation: &navigation,
            main_class: props.frontmatter.main_class.as_deref(),
            content: &props.content,
            toc: context.show_sidebar.then_some(context.toc.as_str()),
            footer: self.settings.footer.as_deref(),
        })
    }

    /// Navigation tree for the current page.
    fn navigation(
        &self,
        pages: &[Page],
        frontmatter: &FrontMatter,
        current: Option<&Page>,
    ) -> Vec<NavItem> {
        if self.settings.nav.is_empty() {
            NavItem::from_pages(pages, frontmatter.file.as_deref())
        } else {
            let active_href = current.map(Page::href);
            NavItem::from_entries(&self.settings.nav, active_href.as_deref())
        }
    }

    /// `<title>` text: page title followed by the site title.
    fn document_title(&self, props: &RenderProps, current: Option<&Page>) -> String {
        let page_title = props
            .title
            .as_deref()
            .or(props.frontmatter.title.as_deref())
            .or_else(|| current.map(|page| page.title.as_str()));

        match page_title {
            Some(title) if title != self.settings.title => {
                format!("{title} | {}", self.settings.title)
            }
            _ => self.settings.title.clone(),
        }
    }
}
