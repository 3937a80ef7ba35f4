//! Robots transform: point `Sitemap:` directives at the configured domain.

use crate::config::SiteConfig;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A `Sitemap:` directive line, anchored per line. The directive spacing
/// is captured and preserved; the rest of the line is discarded.
static RE_SITEMAP_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(Sitemap:[ \t]*).*$").unwrap());

/// Rewrite every `Sitemap:` line to `domain/sitemap.xml`.
pub fn apply(text: &str, config: &SiteConfig) -> String {
    let domain = config.domain.trim_end_matches('/');

    RE_SITEMAP_LINE
        .replace_all(text, |caps: &Captures| {
            format!("{}{}/sitemap.xml", &caps[1], domain)
        })
        .into_owned()
}

// ============================================================================
// tests
// ============================================================================
