//! Theme settings consumed by the sidebar and logo resolution.

use serde::{Deserialize, Serialize};

use crate::paths::{is_internal_url, with_base_url};

/// Theme configuration from the `[theme]` table of `folio.toml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub navbar: NavbarConfig,
    /// Whether users may hide the docs sidebar entirely.
    pub hideable_sidebar: bool,
    /// Whether sidebar categories can be collapsed.
    pub sidebar_collapsible: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            navbar: NavbarConfig::default(),
            hideable_sidebar: false,
            sidebar_collapsible: true,
        }
    }
}

/// Navbar settings the sidebar reads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub title: Option<String>,
    /// When the navbar hides on scroll, the sidebar shows the logo itself.
    pub hide_on_scroll: bool,
    pub logo: Option<LogoConfig>,
}

/// Logo as written in configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogoConfig {
    pub src: String,
    #[serde(default)]
    pub src_dark: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// Logo ready to render: every URL resolved against the base URL.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedLogo {
    pub link: String,
    pub link_target: Option<String>,
    pub link_rel: Option<String>,
    pub image_url: Option<String>,
    pub alt: String,
    pub title: Option<String>,
}

impl ResolvedLogo {
    pub fn resolve(navbar: &NavbarConfig, base_url: &str, mode: ColorMode) -> Self {
        let title = navbar.title.clone();
        let Some(logo) = &navbar.logo else {
            return Self {
                link: with_base_url(base_url, "/"),
                alt: title.clone().unwrap_or_default(),
                title,
                ..Self::default()
            };
        };

        let link = with_base_url(base_url, logo.href.as_deref().unwrap_or("/"));
        let (link_target, link_rel) = match &logo.target {
            Some(target) => (Some(target.clone()), None),
            None if !is_internal_url(&link) => (
                Some("_blank".to_string()),
                Some("noopener noreferrer".to_string()),
            ),
            None => (None, None),
        };

        let src = match (mode, &logo.src_dark) {
            (ColorMode::Dark, Some(dark)) => dark.as_str(),
            _ => logo.src.as_str(),
        };

        Self {
            link,
            link_target,
            link_rel,
            image_url: Some(with_base_url(base_url, src)),
            alt: logo
                .alt
                .clone()
                .or_else(|| title.clone())
                .unwrap_or_default(),
            title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navbar(logo: LogoConfig) -> NavbarConfig {
        NavbarConfig {
            title: Some("Folio".to_string()),
            hide_on_scroll: true,
            logo: Some(logo),
        }
    }

    fn logo() -> LogoConfig {
        LogoConfig {
            src: "/img/logo.svg".to_string(),
            src_dark: Some("/img/logo-dark.svg".to_string()),
            alt: None,
            href: None,
            target: None,
        }
    }

    #[test]
    fn test_resolve_defaults_to_site_root() {
        let resolved = ResolvedLogo::resolve(&navbar(logo()), "/site/", ColorMode::Light);
        assert_eq!(resolved.link, "/site/");
        assert_eq!(resolved.link_target, None);
        assert_eq!(resolved.link_rel, None);
        assert_eq!(resolved.image_url.as_deref(), Some("/site/img/logo.svg"));
        assert_eq!(resolved.alt, "Folio");
    }

    #[test]
    fn test_resolve_dark_mode_source() {
        let resolved = ResolvedLogo::resolve(&navbar(logo()), "/", ColorMode::Dark);
        assert_eq!(resolved.image_url.as_deref(), Some("/img/logo-dark.svg"));
    }

    #[test]
    fn test_resolve_external_link_is_safe() {
        let mut cfg = logo();
        cfg.href = Some("https://example.com".to_string());
        let resolved = ResolvedLogo::resolve(&navbar(cfg), "/", ColorMode::Light);
        assert_eq!(resolved.link, "https://example.com");
        assert_eq!(resolved.link_target.as_deref(), Some("_blank"));
        assert_eq!(resolved.link_rel.as_deref(), Some("noopener noreferrer"));
    }

    #[test]
    fn test_resolve_explicit_target_wins() {
        let mut cfg = logo();
        cfg.href = Some("https://example.com".to_string());
        cfg.target = Some("_self".to_string());
        cfg.alt = Some("Home".to_string());
        let resolved = ResolvedLogo::resolve(&navbar(cfg), "/", ColorMode::Light);
        assert_eq!(resolved.link_target.as_deref(), Some("_self"));
        assert_eq!(resolved.link_rel, None);
        assert_eq!(resolved.alt, "Home");
    }

    #[test]
    fn test_resolve_without_logo() {
        let navbar = NavbarConfig {
            title: Some("Docs".to_string()),
            ..NavbarConfig::default()
        };
        let resolved = ResolvedLogo::resolve(&navbar, "/", ColorMode::Light);
        assert_eq!(resolved.image_url, None);
        assert_eq!(resolved.title.as_deref(), Some("Docs"));
    }

    #[test]
    fn test_theme_config_from_toml() {
        let theme: ThemeConfig = toml::from_str(
            r#"
            hideable_sidebar = true

            [navbar]
            title = "Folio"
            hide_on_scroll = true

            [navbar.logo]
            src = "img/logo.svg"
            "#,
        )
        .unwrap();
        assert!(theme.hideable_sidebar);
        assert!(theme.sidebar_collapsible);
        assert!(theme.navbar.hide_on_scroll);
        assert_eq!(theme.navbar.logo.unwrap().src, "img/logo.svg");
    }
}
