//! Feed generation (RSS, Atom).
//!
//! Generates syndication feeds from the collected posts:
//!
//! - **RSS 2.0**: Standard feed format (`rss.xml`)
//! - **Atom 1.0**: Modern feed format (`atom.xml`)

use std::path::PathBuf;

use crate::config::{FeedFormat, SiteConfig};
use crate::page::PostList;
use anyhow::Result;

pub mod atom;
mod common;
pub mod rss;

/// Build feed if enabled in config (RSS or Atom based on format setting).
///
/// Returns the written path, `None` when disabled.
pub fn build_feed(config: &SiteConfig, posts: &PostList) -> Result<Option<PathBuf>> {
    if !config.build.feed.enable {
        return Ok(None);
    }
    let path = match config.build.feed.format {
        FeedFormat::Rss => rss::build_rss(config, posts)?,
        FeedFormat::Atom => atom::build_atom(config, posts)?,
    };
    Ok(Some(path))
}
