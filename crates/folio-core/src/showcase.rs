//! Showcase entries for the marketing page and their build-time checks.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ShowcaseError};
use crate::paths::has_protocol;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagType {
    Favorite,
    Opensource,
    Product,
    Design,
    I18n,
    Versioning,
    Large,
    Meta,
    Personal,
    Rtl,
}

impl TagType {
    pub fn label(&self) -> &'static str {
        match self {
            TagType::Favorite => "Favorite",
            TagType::Opensource => "Open-Source",
            TagType::Product => "Product",
            TagType::Design => "Design",
            TagType::I18n => "I18n",
            TagType::Versioning => "Versioning",
            TagType::Large => "Large",
            TagType::Meta => "Meta",
            TagType::Personal => "Personal",
            TagType::Rtl => "RTL Direction",
        }
    }
}

/// A site listed on the showcase page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseSite {
    pub title: String,
    pub description: String,
    /// Local path of the preview image.
    pub preview: String,
    pub website: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub tags: Vec<TagType>,
}

/// How multiple selected tags combine when filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagOperator {
    And,
    #[default]
    Or,
}

/// Previews must ship with the site; remote images are a hard error.
pub fn validate_preview(site: &ShowcaseSite) -> Result<(), ShowcaseError> {
    if has_protocol(&site.preview) {
        return Err(ShowcaseError::RemotePreview {
            title: site.title.clone(),
            preview: site.preview.clone(),
        });
    }
    Ok(())
}

/// Stop at the first invalid entry.
pub fn validate_all(sites: &[ShowcaseSite]) -> Result<(), ShowcaseError> {
    for site in sites {
        if site.title.trim().is_empty() {
            return Err(ShowcaseError::EmptyTitle {
                website: site.website.clone(),
            });
        }
        validate_preview(site)?;
    }
    Ok(())
}

pub fn load_showcase(path: impl AsRef<Path>) -> Result<Vec<ShowcaseSite>, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Favorites first, then alphabetical by title ignoring case.
pub fn sort_showcase(sites: &mut [ShowcaseSite]) {
    sites.sort_by(|a, b| {
        let a_fav = a.tags.contains(&TagType::Favorite);
        let b_fav = b.tags.contains(&TagType::Favorite);
        b_fav
            .cmp(&a_fav)
            .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
    });
}

/// Sites carrying the selected tags. No selection keeps everything.
pub fn filter_by_tags<'a>(
    sites: &'a [ShowcaseSite],
    selected: &[TagType],
    operator: TagOperator,
) -> Vec<&'a ShowcaseSite> {
    sites
        .iter()
        .filter(|site| {
            if selected.is_empty() {
                return true;
            }
            match operator {
                TagOperator::And => selected.iter().all(|tag| site.tags.contains(tag)),
                TagOperator::Or => selected.iter().any(|tag| site.tags.contains(tag)),
            }
        })
        .collect()
}
