//! Sync command - rewrite site artifacts to the configured domain.
//!
//! Walks the project root for HTML pages, applies the matching rewrite
//! pass to each artifact category, and writes back only files whose
//! transformed text differs from the original. Fully sequential; each
//! file is read, transformed and written independently.

use crate::{
    cli::SyncArgs,
    config::SiteConfig,
    debug, log, rewrite,
};
use anyhow::{Context, Result};
use jwalk::WalkDir;
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

/// Well-known root artifacts, each optional.
const FEED_FILE: &str = "feed.xml";
const SITEMAP_FILE: &str = "sitemap.xml";
const ROBOTS_FILE: &str = "robots.txt";

/// Transform applied to one artifact category.
type Transform = fn(&str, &SiteConfig) -> String;

/// Counters for a sync run.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyncReport {
    /// Files inspected (HTML pages plus present well-known files).
    pub scanned: usize,
    /// Files rewritten, or that would be rewritten under --dry-run.
    pub updated: usize,
}

/// Run the sync command and print the summary line.
pub fn run_sync(config: &SiteConfig, args: &SyncArgs) -> Result<()> {
    let report = sync_site(config, args.dry_run)?;

    let prefix = if args.dry_run { "[dry-run] " } else { "" };
    log!(
        "sync";
        "{}updated {} of {} file(s) for {}",
        prefix, report.updated, report.scanned, config.domain
    );
    Ok(())
}

/// Synchronize every artifact under the project root.
pub fn sync_site(config: &SiteConfig, dry_run: bool) -> Result<SyncReport> {
    let mut report = SyncReport::default();

    // HTML pages, recursive
    for path in collect_html_files(config.get_root()) {
        report.scanned += 1;
        if sync_file(&path, dry_run, |text| rewrite::html::apply(text, config))? {
            report.updated += 1;
        }
    }

    // Well-known root artifacts
    const WELL_KNOWN: [(&str, Transform); 3] = [
        (FEED_FILE, rewrite::feed::apply),
        (SITEMAP_FILE, rewrite::sitemap::apply),
        (ROBOTS_FILE, rewrite::robots::apply),
    ];

    for (name, transform) in WELL_KNOWN {
        let path = config.root_join(name);
        if !path.exists() {
            debug!("sync"; "no {} at project root, skipping", name);
            continue;
        }
        report.scanned += 1;
        if sync_file(&path, dry_run, |text| transform(text, config))? {
            report.updated += 1;
        }
    }

    Ok(report)
}

/// Collect all HTML files under `root`, sorted for deterministic order.
fn collect_html_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path())
        .filter(|path| path.extension() == Some(OsStr::new("html")))
        .collect()
}

/// Apply `transform` to one file, writing back only on change.
///
/// Returns whether the file changed (would change, under dry-run).
fn sync_file(
    path: &Path,
    dry_run: bool,
    transform: impl FnOnce(&str) -> String,
) -> Result<bool> {
    let original = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let rewritten = transform(&original);
    if rewritten == original {
        return Ok(false);
    }

    if dry_run {
        debug!("sync"; "would update: {}", path.display());
    } else {
        fs::write(path, &rewritten)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("sync"; "updated: {}", path.display());
    }
    Ok(true)
}

// ============================================================================
// tests
// ============================================================================
