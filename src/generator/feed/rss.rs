//! RSS 2.0 feed generation.

use super::common::{FeedPage, feed_pages};
use crate::{config::SiteConfig, generator::write_xml, page::PostList};
use anyhow::{Result, anyhow};
use regex::Regex;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::{path::PathBuf, sync::LazyLock};

/// Build RSS 2.0 feed
pub fn build_rss(config: &SiteConfig, posts: &PostList) -> Result<PathBuf> {
    let feed = RssFeed {
        config,
        pages: feed_pages(posts),
    };
    let xml = feed.into_xml()?;
    write_xml(config, &config.build.feed.path, &xml, "rss")
}

struct RssFeed<'a> {
    config: &'a SiteConfig,
    pages: Vec<FeedPage>,
}

impl RssFeed<'_> {
    fn into_xml(self) -> Result<String> {
        let site = &self.config.site;
        let items: Vec<_> = self
            .pages
            .iter()
            .map(|page| page_to_rss_item(page, self.config))
            .collect();

        let channel = ChannelBuilder::default()
            .title(&site.title)
            .link(site.base_url())
            .description(&site.description)
            .language(Some(site.language.clone()))
            .generator(Some("suspend".to_string()))
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
        Ok(channel.to_string())
    }
}

fn page_to_rss_item(page: &FeedPage, config: &SiteConfig) -> rss::Item {
    let link = format!("{}{}", config.site.base_url(), page.permalink);
    let author = normalize_rss_author(page.author.as_ref(), config);

    ItemBuilder::default()
        .title(Some(page.title.clone()))
        .link(Some(link.clone()))
        .guid(Some(GuidBuilder::default().permalink(true).value(link).build()))
        .description(page.summary.clone())
        .pub_date(Some(page.date.to_rfc2822()))
        .author(author)
        .build()
}

/// Normalize author field to RSS format: "email (Name)"
fn normalize_rss_author(author: Option<&String>, config: &SiteConfig) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$")
            .expect("author regex is valid")
    });

    let author = author?;

    // Check if post author is already valid
    if RE_VALID_AUTHOR.is_match(author) {
        return Some(author.clone());
    }

    let site_author = &config.site.author;
    if RE_VALID_AUTHOR.is_match(&site_author.name) {
        return Some(site_author.name.clone());
    }

    // Combine email and author name; without an email the field is dropped
    if site_author.email.is_empty() {
        return None;
    }
    Some(format!("{} ({})", site_author.email, site_author.name))
}
