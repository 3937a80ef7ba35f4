//! Sitemap transform: blanket host swap over every absolute URL.

use crate::config::SiteConfig;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Any absolute URL token, up to the next `<`.
static RE_ABS_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://[^<]+").unwrap());

/// Scheme and host prefix of an absolute URL.
static RE_SCHEME_HOST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://[^/]+").unwrap());

/// Replace the scheme+host of every URL in the document, keeping the
/// path and everything after it verbatim.
pub fn apply(text: &str, config: &SiteConfig) -> String {
    let domain = config.domain.trim_end_matches('/');

    RE_ABS_URL
        .replace_all(text, |caps: &Captures| {
            let path = RE_SCHEME_HOST.replace(&caps[0], "");
            format!("{domain}{path}")
        })
        .into_owned()
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::test_config;

    const DOMAIN: &str = "https://new.example";

    #[test]
    fn host_swapped_path_and_query_preserved() {
        let config = test_config(DOMAIN, "");
        let xml = "<loc>https://old.example/a/b?c=1</loc>";
        assert_eq!(
            apply(xml, &config),
            "<loc>https://new.example/a/b?c=1</loc>"
        );
    }

    #[test]
    fn bare_origin_becomes_bare_domain() {
        let config = test_config(DOMAIN, "");
        let xml = "<loc>http://old.example</loc>";
        assert_eq!(apply(xml, &config), "<loc>https://new.example</loc>");
    }

    #[test]
    fn every_url_rewritten() {
        let config = test_config(DOMAIN, "");
        let xml = concat!(
            "<urlset>\n",
            "  <url><loc>https://old.example/</loc></url>\n",
            "  <url><loc>https://other.example/posts/a.html</loc></url>\n",
            "  <url><loc>http://third.example/about/</loc></url>\n",
            "</urlset>",
        );
        let out = apply(xml, &config);

        assert_eq!(out.matches("https://new.example").count(), 3);
        assert!(out.contains("<loc>https://new.example/</loc>"));
        assert!(out.contains("<loc>https://new.example/posts/a.html</loc>"));
        assert!(out.contains("<loc>https://new.example/about/</loc>"));
    }

    #[test]
    fn no_urls_is_a_no_op() {
        let config = test_config(DOMAIN, "");
        let xml = "<urlset></urlset>";
        assert_eq!(apply(xml, &config), xml);
    }

    #[test]
    fn idempotent() {
        let config = test_config(DOMAIN, "");
        let xml = "<loc>https://old.example/a/b?c=1</loc>\n<loc>https://old.example/</loc>";
        let once = apply(xml, &config);
        let twice = apply(&once, &config);
        assert_eq!(once, twice);
    }
}
