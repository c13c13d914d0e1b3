//! Common utilities for feed generation.

use crate::{log, page::PostList, utils::date::DateTimeUtc};

/// A post validated for feed inclusion (requires title and date).
#[derive(Debug, Clone)]
pub struct FeedPage {
    pub title: String,
    pub date: DateTimeUtc,
    pub permalink: String,
    pub summary: Option<String>,
    pub author: Option<String>,
}

impl FeedPage {
    fn from_post(post: &crate::page::Post) -> Option<Self> {
        if post.title().is_empty() {
            return None;
        }
        Some(Self {
            title: post.title().to_string(),
            date: post.date?,
            permalink: post.route.permalink.clone(),
            summary: Some(post.description().to_string()).filter(|s| !s.is_empty()),
            author: post
                .front
                .extra
                .get("author")
                .and_then(|v| v.as_str())
                .map(str::to_string),
        })
    }
}

/// Posts valid for feed inclusion, newest first (only posts with a date).
pub fn feed_pages(posts: &PostList) -> Vec<FeedPage> {
    let pages: Vec<FeedPage> = posts.iter().filter_map(FeedPage::from_post).collect();

    let excluded = posts.len() - pages.len();
    if excluded > 0 {
        log!("feed"; "excluded {} posts without title or date", excluded);
    }

    pages
}

#[cfg(test)]
pub(crate) fn test_page(title: &str, date: &str, permalink: &str) -> FeedPage {
    FeedPage {
        title: title.to_string(),
        date: DateTimeUtc::parse(date).unwrap(),
        permalink: permalink.to_string(),
        summary: Some(format!("About {title}")),
        author: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Post, PostRoute};
    use std::path::Path;

    fn post(slug: &str, content: &str) -> Post {
        let route = PostRoute::new(
            &Path::new("/c").join(format!("{slug}.md")),
            Path::new("/c"),
            Path::new("/o"),
        )
        .unwrap();
        Post::from_source(route, content, Path::new("/")).unwrap()
    }

    #[test]
    fn test_feed_pages_require_title_and_date() {
        let posts = PostList::new(vec![
            post("dated", "---\ntitle: Dated\ndate: 2024-01-01\nauthor: me@example.com (Me)\n---\nBody"),
            post("undated", "---\ntitle: Undated\n---\nBody"),
            post("untitled", "---\ndate: 2024-02-01\n---\nBody"),
        ])
        .unwrap();

        let pages = feed_pages(&posts);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].title, "Dated");
        assert_eq!(pages[0].permalink, "/dated/");
        assert_eq!(pages[0].summary.as_deref(), Some("Body"));
        assert_eq!(pages[0].author.as_deref(), Some("me@example.com (Me)"));
    }
}
