//! Path and URL helpers shared by the sidebar, logo, and showcase code.

/// Compare two page paths the way the router does for active links.
///
/// A missing trailing slash is added to both sides and the comparison
/// ignores case, so `/Docs/Intro` and `/docs/intro/` are the same page.
/// The empty string gets no slash: it names no page, so it only equals
/// itself and never the site root `/`.
pub fn paths_equal(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

fn normalize(path: &str) -> String {
    if path.is_empty() || path.ends_with('/') {
        path.to_lowercase()
    } else {
        format!("{}/", path.to_lowercase())
    }
}

/// Whether `url` carries a protocol (`https:`, `mailto:`) or is
/// protocol-relative (`//cdn.example.com`).
pub fn has_protocol(url: &str) -> bool {
    if url.starts_with("//") {
        return true;
    }
    match url.find(':') {
        Some(idx) => url[..idx]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_'),
        None => false,
    }
}

/// Internal URLs are handled by the in-app router; everything else opens
/// in a new browsing context.
pub fn is_internal_url(url: &str) -> bool {
    !url.is_empty() && !has_protocol(url)
}

/// Prefix an absolute site path with the site's base URL.
///
/// Fragments and URLs with a protocol pass through untouched, as do
/// relative paths.
pub fn with_base_url(base_url: &str, url: &str) -> String {
    if url.starts_with('#') || has_protocol(url) {
        return url.to_string();
    }
    match url.strip_prefix('/') {
        Some(rest) => {
            let base = if base_url.ends_with('/') {
                base_url.to_string()
            } else {
                format!("{}/", base_url)
            };
            format!("{}{}", base, rest)
        }
        None => url.to_string(),
    }
}
