//! Domain rewrite passes over site artifacts.
//!
//! Four independent, idempotent text transforms, one per artifact
//! category. Each is a pure function `(text, config) -> text`; all
//! filesystem effects live in the orchestrator (`cli::sync`).
//!
//! | Transform | Artifact            | Scope                               |
//! |-----------|---------------------|-------------------------------------|
//! | `html`    | `*.html` pages      | canonical, og:url, og:image, RSS title |
//! | `feed`    | `feed.xml`          | channel link (first), post links    |
//! | `sitemap` | `sitemap.xml`       | every absolute URL                  |
//! | `robots`  | `robots.txt`        | `Sitemap:` directive lines          |

pub mod feed;
pub mod html;
pub mod robots;
pub mod sitemap;

/// Build a minimal config for transform tests.
#[cfg(test)]
pub(crate) fn test_config(domain: &str, site_name: &str) -> crate::config::SiteConfig {
    crate::config::SiteConfig {
        domain: domain.to_string(),
        site_name: site_name.to_string(),
        ..Default::default()
    }
}
