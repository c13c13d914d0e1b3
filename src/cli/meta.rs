//! `suspend meta`: print the resolved head metadata of one post.

use std::io::{Write, stdout};
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::page::Post;
use crate::seo::{ResolvedMetaTagSet, SiteDefaults, resolve};
use crate::utils::path::normalize_path;

/// Resolve the post at `path` and print the tag set as JSON.
///
/// Nothing is written to the output directory.
pub fn print_meta(config: &SiteConfig, path: &Path, pretty: bool) -> Result<()> {
    let resolved = resolve_post(config, path)?;
    let json = if pretty {
        serde_json::to_string_pretty(&resolved)?
    } else {
        serde_json::to_string(&resolved)?
    };

    let mut out = stdout().lock();
    writeln!(out, "{json}")?;
    Ok(())
}

fn resolve_post(config: &SiteConfig, path: &Path) -> Result<ResolvedMetaTagSet> {
    let path = normalize_path(path);
    let post = Post::load(&path, config)?;
    let resolved = resolve(&post.page_meta(), &SiteDefaults::from_config(config))
        .with_context(|| format!("invalid metadata in {}", config.root_relative(&path).display()))?;
    Ok(resolved)
}
