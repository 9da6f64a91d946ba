//! Loading a whole site from its `folio.toml`.

use std::path::Path;

use anyhow::Context;
use folio_core::showcase::{load_showcase, validate_all, ShowcaseSite};
use folio_core::{is_internal_url, paths_equal, walk_tree, SidebarItem, SidebarsFile, SiteConfig};
use tracing::info;

/// Everything a site declares, loaded and validated.
#[derive(Debug, Clone, PartialEq)]
pub struct DocsSite {
    pub config: SiteConfig,
    pub sidebars: SidebarsFile,
    pub showcase: Vec<ShowcaseSite>,
}

/// Counts reported by `folio-docs check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    pub sidebars: usize,
    pub items: usize,
    pub showcase_sites: usize,
}

impl DocsSite {
    /// Load the config and the files it references, stopping at the first
    /// invalid one.
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        let config = SiteConfig::load(config_path)
            .with_context(|| format!("loading site config {}", config_path.display()))?;

        let sidebars = SidebarsFile::load(&config.sidebars)
            .with_context(|| format!("loading sidebars {}", config.sidebars.display()))?;
        sidebars
            .get(&config.default_sidebar)
            .context("default sidebar is not defined")?;

        let showcase = match &config.showcase {
            Some(path) => {
                let sites = load_showcase(path)
                    .with_context(|| format!("loading showcase {}", path.display()))?;
                validate_all(&sites).context("invalid showcase entry")?;
                sites
            }
            None => Vec::new(),
        };

        Ok(Self {
            config,
            sidebars,
            showcase,
        })
    }

    pub fn report(&self) -> CheckReport {
        let mut items = 0;
        for id in self.sidebars.ids() {
            if let Ok(tree) = self.sidebars.get(id) {
                walk_tree(tree, |_, _| items += 1);
            }
        }
        CheckReport {
            sidebars: self.sidebars.len(),
            items,
            showcase_sites: self.showcase.len(),
        }
    }

    /// Sidebar `id`, or the site's default one.
    pub fn sidebar(&self, id: Option<&str>) -> anyhow::Result<(String, Vec<SidebarItem>)> {
        let id = id.unwrap_or(self.config.default_sidebar.as_str());
        let items = self
            .sidebars
            .get(id)
            .with_context(|| format!("selecting sidebar {id}"))?;
        Ok((id.to_string(), items.to_vec()))
    }
}

/// `folio-docs check`: load everything and summarize.
pub fn check(config_path: &Path) -> anyhow::Result<CheckReport> {
    let site = DocsSite::load(config_path)?;
    let report = site.report();
    info!(
        sidebars = report.sidebars,
        items = report.items,
        showcase = report.showcase_sites,
        "site is valid"
    );
    Ok(report)
}

/// Target of the first internal link in document order.
pub fn first_doc_path(items: &[SidebarItem]) -> Option<String> {
    let mut first = None;
    walk_tree(items, |_, item| {
        if first.is_some() {
            return;
        }
        if let SidebarItem::Link { href, .. } = item {
            if is_internal_url(href) {
                first = Some(href.clone());
            }
        }
    });
    first
}

/// Label of the link whose target matches `path`.
pub fn page_title(items: &[SidebarItem], path: &str) -> Option<String> {
    let mut title = None;
    walk_tree(items, |_, item| {
        if title.is_none() {
            if let SidebarItem::Link { label, href } = item {
                if paths_equal(href, path) {
                    title = Some(label.clone());
                }
            }
        }
    });
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<SidebarItem> {
        vec![
            SidebarItem::link("GitHub", "https://github.com/folio-docs/folio"),
            SidebarItem::category(
                "Guides",
                vec![
                    SidebarItem::category("Empty", vec![]),
                    SidebarItem::link("A", "/docs/guides/a"),
                ],
            ),
            SidebarItem::link("Intro", "/docs/intro"),
        ]
    }

    #[test]
    fn test_first_doc_skips_external_links() {
        assert_eq!(first_doc_path(&tree()), Some("/docs/guides/a".to_string()));
        assert_eq!(first_doc_path(&[]), None);
    }

    #[test]
    fn test_page_title_ignores_trailing_slash() {
        assert_eq!(page_title(&tree(), "/docs/intro/"), Some("Intro".to_string()));
        assert_eq!(page_title(&tree(), "/docs/missing"), None);
    }
}
