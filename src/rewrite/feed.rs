//! Feed transform: channel link and per-item post permalinks.
//!
//! The channel-level `<link>` is rewritten first and only on its first
//! occurrence, so item `<link>` elements are left to the posts rule.

use crate::config::SiteConfig;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A `<link>https://...</link>` element.
static RE_CHANNEL_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(<link>)https?://[^<]*(</link>)").unwrap());

/// An absolute post permalink: `https://host/.../posts/<file>.html`.
static RE_POST_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^<]*/posts/([A-Za-z0-9._-]+\.html)").unwrap());

/// Rewrite the channel link and all post permalinks in a feed document.
pub fn apply(text: &str, config: &SiteConfig) -> String {
    let domain = config.domain.trim_end_matches('/');

    // Channel link: first match only. Item permalinks stay for the rule below.
    let text = RE_CHANNEL_LINK.replace(text, |caps: &Captures| {
        format!("{}{}/{}", &caps[1], domain, &caps[2])
    });

    // Post permalinks: every occurrence, regardless of originating host.
    let text = RE_POST_URL.replace_all(&text, |caps: &Captures| {
        format!("{}/posts/{}", domain, &caps[1])
    });

    text.into_owned()
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
    fn channel_link_first_match_only() {
        let config = test_config(DOMAIN, "");
        let feed = concat!(
            "<channel>\n",
            "<link>https://old.example/</link>\n",
            "<item><link>https://old.example/</link></item>\n",
            "<item><link>https://old.example/</link></item>\n",
            "</channel>",
        );
        let out = apply(feed, &config);

        // Only the channel link is rewritten; the item links carry no
        // /posts/ path, so the posts rule leaves them untouched too.
        assert_eq!(out.matches("<link>https://new.example/</link>").count(), 1);
        assert_eq!(out.matches("<link>https://old.example/</link>").count(), 2);
    }

    #[test]
    fn post_links_rewritten_on_any_host() {
        let config = test_config(DOMAIN, "");
        let feed = concat!(
            "<link>https://old.example/</link>\n",
            "<item><link>https://old.example/posts/first-post.html</link></item>\n",
            "<item><link>http://mirror.example/posts/under_score.2.html</link></item>\n",
        );
        let out = apply(feed, &config);

        assert!(out.contains("<link>https://new.example/</link>"));
        assert!(out.contains("<link>https://new.example/posts/first-post.html</link>"));
        assert!(out.contains("<link>https://new.example/posts/under_score.2.html</link>"));
        assert!(!out.contains("old.example"));
        assert!(!out.contains("mirror.example"));
    }

    #[test]
    fn non_post_item_links_untouched() {
        let config = test_config(DOMAIN, "");
        let feed = concat!(
            "<link>https://old.example/</link>\n",
            "<item><link>https://old.example/pages/about.html</link></item>\n",
        );
        let out = apply(feed, &config);

        assert!(out.contains("<link>https://old.example/pages/about.html</link>"));
    }

    #[test]
    fn filename_charset_is_restricted() {
        let config = test_config(DOMAIN, "");
        // Query strings fall outside the allowed filename charset.
        let feed = "<item><link>https://old.example/posts/a.html?utm=x</link></item>";
        let out = apply(feed, &config);
        // The bare permalink part is still rewritten up to the filename.
        assert!(out.contains("https://new.example/posts/a.html?utm=x"));
    }

    #[test]
    fn no_links_is_a_no_op() {
        let config = test_config(DOMAIN, "");
        let feed = "<channel><title>stuff</title></channel>";
        assert_eq!(apply(feed, &config), feed);
    }

    #[test]
    fn idempotent() {
        let config = test_config(DOMAIN, "");
        let feed = concat!(
            "<link>https://old.example/</link>\n",
            "<item><link>https://old.example/posts/a.html</link></item>\n",
        );
        let once = apply(feed, &config);
        let twice = apply(&once, &config);
        assert_eq!(once, twice);
    }
}
