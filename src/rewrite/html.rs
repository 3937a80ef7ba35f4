//! HTML page transform: canonical link, Open Graph URL/image, RSS title.
//!
//! Four pattern-guided replacements applied independently and in order.
//! Each is a no-op when its pattern is absent. The canonical and og:url
//! rules replace the whole matched URL with the bare domain; the page's
//! own path is intentionally dropped (see `canonical_drops_path` below,
//! which pins that behavior).

use crate::config::SiteConfig;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `<link rel="canonical" href="https://...`
static RE_CANONICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(<link[ \t\r\n]+rel="canonical"[ \t\r\n]+href=")https?://[^"<>]*"#).unwrap()
});

/// `<meta property="og:url" content="https://...`
static RE_OG_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(<meta[ \t\r\n]+property="og:url"[ \t\r\n]+content=")https?://[^"<>]*"#).unwrap()
});

/// `<meta property="og:image" content="...`
///
/// The closing quote and tag tail are not part of the match, so an
/// untouched value leaves the tag byte-for-byte intact.
static RE_OG_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(<meta[ \t\r\n]+property="og:image"[ \t\r\n]+content=")([^"]*)"#).unwrap()
});

/// `<link rel="alternate" type="application/rss+xml" title="...">`
static RE_RSS_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(<link[ \t\r\n]+rel="alternate"[ \t\r\n]+type="application/rss\+xml"[ \t\r\n]+title=")[^"]*(")"#,
    )
    .unwrap()
});

/// Scheme and host of an absolute URL.
static RE_SCHEME_HOST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://[^/]*").unwrap());

/// Rewrite domain-bearing metadata in an HTML document.
pub fn apply(html: &str, config: &SiteConfig) -> String {
    let domain = config.domain.trim_end_matches('/');

    // canonical
    let html = RE_CANONICAL.replace_all(html, |caps: &Captures| {
        format!("{}{}", &caps[1], domain)
    });

    // og:url
    let html = RE_OG_URL.replace_all(&html, |caps: &Captures| {
        format!("{}{}", &caps[1], domain)
    });

    // og:image
    let html = RE_OG_IMAGE.replace_all(&html, |caps: &Captures| {
        match rewrite_image_url(&caps[2], domain) {
            Some(rewritten) => format!("{}{}", &caps[1], rewritten),
            None => caps[0].to_string(),
        }
    });

    // RSS alternate-link title
    let html = RE_RSS_TITLE.replace_all(&html, |caps: &Captures| {
        format!("{}{}{}", &caps[1], config.site_name, &caps[2])
    });

    html.into_owned()
}

/// Rewrite an og:image value, or `None` to leave it untouched.
///
/// Absolute URLs keep their path under the new domain, root-relative
/// paths get the domain prefixed, bare relative paths are not touched.
fn rewrite_image_url(url: &str, domain: &str) -> Option<String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        let path = RE_SCHEME_HOST.replace(url, "");
        Some(format!("{domain}{path}"))
    } else if url.starts_with('/') {
        Some(format!("{domain}{url}"))
    } else {
        None
    }
}

// ============================================================================
// tests
// ============================================================================
