//! Atom 1.0 feed generation.

use super::common::{FeedPage, feed_pages};
use crate::{config::SiteConfig, generator::write_xml, page::PostList};
use anyhow::Result;
use atom_syndication::{
    Entry, EntryBuilder, Feed, FeedBuilder, FixedDateTime, GeneratorBuilder, Link, LinkBuilder,
    Person, PersonBuilder, Text,
};
use std::path::PathBuf;

/// Build Atom 1.0 feed.
pub fn build_atom(config: &SiteConfig, posts: &PostList) -> Result<PathBuf> {
    let feed = AtomFeed {
        config,
        pages: feed_pages(posts),
    };
    let xml = feed.into_xml();
    write_xml(config, &config.build.feed.path, &xml, "atom")
}

struct AtomFeed<'a> {
    config: &'a SiteConfig,
    pages: Vec<FeedPage>,
}

impl AtomFeed<'_> {
    fn into_xml(self) -> String {
        let site = &self.config.site;
        let base_url = site.base_url();

        let entries: Vec<Entry> = self
            .pages
            .iter()
            .filter_map(|page| page_to_atom_entry(page, self.config))
            .collect();

        // Pages are newest first but undated ones never reach here
        let updated: FixedDateTime = self
            .pages
            .iter()
            .map(|p| p.date)
            .max()
            .and_then(|dt| dt.to_rfc3339().parse().ok())
            .unwrap_or_default();

        let author: Person = PersonBuilder::default()
            .name(site.author.name.clone())
            .email(Some(site.author.email.clone()).filter(|e| !e.is_empty()))
            .build();

        let self_link: Link = LinkBuilder::default()
            .href(format!(
                "{}/{}",
                base_url,
                self.config.build.feed.path.display()
            ))
            .rel("self".to_string())
            .mime_type(Some("application/atom+xml".to_string()))
            .build();

        let alternate_link: Link = LinkBuilder::default()
            .href(format!("{base_url}/"))
            .rel("alternate".to_string())
            .build();

        let feed: Feed = FeedBuilder::default()
            .title(Text::plain(site.title.clone()))
            .id(format!("{base_url}/"))
            .updated(updated)
            .authors(vec![author])
            .links(vec![self_link, alternate_link])
            .subtitle(Some(Text::plain(site.description.clone())))
            .generator(Some(GeneratorBuilder::default().value("suspend").build()))
            .lang(Some(site.language.clone()))
            .entries(entries)
            .build();

        feed.to_string()
    }
}

fn page_to_atom_entry(page: &FeedPage, config: &SiteConfig) -> Option<Entry> {
    let updated: FixedDateTime = page.date.to_rfc3339().parse().ok()?;
    let link = format!("{}{}", config.site.base_url(), page.permalink);

    let entry_link: Link = LinkBuilder::default()
        .href(&link)
        .rel("alternate".to_string())
        .build();

    let authors: Vec<Person> = page
        .author
        .as_ref()
        .map(|name| vec![PersonBuilder::default().name(name.clone()).build()])
        .unwrap_or_default();

    Some(
        EntryBuilder::default()
            .title(Text::plain(page.title.clone()))
            .id(&link)
            .updated(updated)
            .links(vec![entry_link])
            .summary(page.summary.clone().map(Text::plain))
            .authors(authors)
            .build(),
    )
}
