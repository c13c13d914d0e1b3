//! Site building orchestration.
//!
//! Build pipeline phases:
//! - **Init** - Clean and create the output directory
//! - **Collect** - Load and sort every markdown post
//! - **Assets** - Stylesheet and content-addressed images
//! - **Render** - Index page, then posts in parallel
//! - **Generate** - Feed, sitemap and web app manifest
//! - **Finalize** - Logging

use crate::{
    config::SiteConfig,
    embed::write_embedded_assets,
    generator::{feed::build_feed, manifest::build_manifest, sitemap::build_sitemap},
    log,
    logger::ProgressLine,
    page::{PostList, collect_posts},
    render::{RenderContext, render_index, render_post},
    theme::{FilePreferences, ThemeToggle},
    utils::plural_count,
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{ffi::OsStr, fs, path::Path};

/// Build the entire site into `build.output`.
///
/// Pipeline: init -> collect -> assets -> render -> generate -> finalize
pub fn build_site(config: &SiteConfig) -> Result<()> {
    init_output(config)?;

    let posts = collect_posts(config)?;
    if posts.is_empty() {
        log!("warning"; "no posts in {}", config.root_relative(&config.build.content).display());
    } else {
        log!("build"; "found {}", plural_count(posts.len(), "post"));
    }

    let dark = ThemeToggle::new(FilePreferences::new(config.preferences_path())).is_dark();
    let ctx = RenderContext::new(config, dark, posts.newest_year());

    write_embedded_assets(config, &config.build.output)?;
    publish_images(config, &posts)?;

    write_page(&config.build.output.join("index.html"), &render_index(&ctx, &posts)?)?;
    render_posts(&ctx, &posts)?;

    let (feed, (sitemap, manifest)) = rayon::join(
        || build_feed(config, &posts),
        || rayon::join(|| build_sitemap(config, &posts), || build_manifest(config)),
    );
    feed?;
    sitemap?;
    manifest?;

    log_build_result(&config.build.output)
}

/// Clean (when requested) and create the output directory.
fn init_output(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("failed to clean {}", output.display()))?;
        crate::debug!("build"; "cleaned {}", config.root_relative(output).display());
    }

    fs::create_dir_all(output).with_context(|| format!("failed to create {}", output.display()))
}

/// Copy every referenced local image to its `/static/<hash>/` path.
fn publish_images(config: &SiteConfig, posts: &PostList) -> Result<()> {
    let assets = posts.assets();
    let copied = assets
        .par_iter()
        .map(|asset| asset.publish(&config.build.output))
        .collect::<Result<Vec<bool>>>()?
        .into_iter()
        .filter(|copied| *copied)
        .count();

    if !assets.is_empty() {
        crate::debug!("image"; "{} published, {} unchanged", copied, assets.len() - copied);
    }
    Ok(())
}

/// Render all posts in parallel.
///
/// Rendering fails on the first post whose metadata does not validate; the
/// error names the source file.
fn render_posts(ctx: &RenderContext<'_>, posts: &PostList) -> Result<()> {
    let progress = ProgressLine::new(&[("posts", posts.len())]);

    (0..posts.len()).into_par_iter().try_for_each(|index| {
        let post = &posts.as_slice()[index];
        let html = render_post(ctx, posts, index).with_context(|| {
            format!(
                "failed to render {}",
                ctx.config.root_relative(&post.route.source).display()
            )
        })?;
        write_page(&post.route.output_file, &html)?;
        progress.inc("posts");
        Ok::<(), anyhow::Error>(())
    })?;

    progress.finish();
    Ok(())
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))
}

/// Log build completion
fn log_build_result(output: &Path) -> Result<()> {
    let file_count = fs::read_dir(output)?
        .filter_map(Result::ok)
        .filter(|e| e.file_name() != OsStr::new(".git"))
        .count();

    if file_count == 0 {
        log!("warning"; "output is empty, check the content directory");
    } else {
        log!("done"; "site written to {}", output.display());
    }

    Ok(())
}
