//! Post detail page.

use anyhow::{Context, Result};

use super::{RenderContext, layout::render_layout};
use crate::page::{Post, PostList};
use crate::seo::resolve;
use crate::utils::html::{escape, escape_attr};

/// Render the post at `index` of `posts`.
///
/// Fails when the post's metadata does not resolve (e.g. missing title).
pub fn render_post(ctx: &RenderContext<'_>, posts: &PostList, index: usize) -> Result<String> {
    let post = &posts.as_slice()[index];
    let resolved = resolve(&post.page_meta(), &ctx.site)
        .with_context(|| format!("invalid metadata in {}", post.route.source.display()))?;

    let date = post
        .date
        .map(|d| format!("<p class=\"post__date\">{}</p>", d.to_display()))
        .unwrap_or_default();

    let main = format!(
        concat!(
            "<article class=\"post\">\n",
            "<header><h1 class=\"post__title\">{title}</h1>{date}</header>\n",
            "<section class=\"post__body\">\n{body}</section>\n",
            "<hr/>\n",
            "</article>\n",
            "{nav}"
        ),
        title = escape(post.title()),
        date = date,
        body = post.html,
        nav = render_post_nav(posts.previous(index), posts.next(index)),
    );

    Ok(render_layout(ctx, &resolved, &main, false))
}

/// Previous (older) on the left, next (newer) on the right.
fn render_post_nav(previous: Option<&Post>, next: Option<&Post>) -> String {
    let link = |post: Option<&Post>, rel: &str| {
        post.map(|p| {
            let title = escape(p.title());
            let label = if rel == "prev" {
                format!("← {title}")
            } else {
                format!("{title} →")
            };
            format!(
                r#"<a href="{}" rel="{rel}">{label}</a>"#,
                escape_attr(&p.route.permalink)
            )
        })
        .unwrap_or_default()
    };

    format!(
        "<nav class=\"post-nav\"><ul><li>{}</li><li>{}</li></ul></nav>",
        link(previous, "prev"),
        link(next, "next"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PostRoute;
    use crate::render::test_support::config;
    use std::path::Path;

    fn post(slug: &str, front: &str) -> Post {
        let route = PostRoute::new(
            &Path::new("/c").join(format!("{slug}.md")),
            Path::new("/c"),
            Path::new("/o"),
        )
        .unwrap();
        Post::from_source(route, front, Path::new("/")).unwrap()
    }

    fn list() -> PostList {
        PostList::new(vec![
            post("first", "---\ntitle: First\ndate: 2020-01-01\n---\nOne"),
            post("second", "---\ntitle: Second\ndate: 2021-01-01\nog:type: article\n---\nTwo *words*"),
            post("third", "---\ntitle: Third\ndate: 2022-01-01\n---\nThree"),
        ])
        .unwrap()
    }

    #[test]
    fn test_post_page() {
        let config = config();
        let ctx = RenderContext::new(&config, false, Some(2022));
        let posts = list();

        // Sorted newest first: third, second, first
        let html = render_post(&ctx, &posts, 1).unwrap();
        assert!(html.contains(r#"<h1 class="post__title">Second</h1>"#));
        assert!(html.contains(r#"<p class="post__date">January 01, 2021</p>"#));
        assert!(html.contains("Two <em>words</em>"));
        assert!(html.contains(r#"<a href="/first/" rel="prev">← First</a>"#));
        assert!(html.contains(r#"<a href="/third/" rel="next">Third →</a>"#));
        assert!(html.contains(r#"<meta property="og:type" content="article"/>"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/second/"/>"#));
        assert!(!html.contains(r#"class="bio""#));
    }

    #[test]
    fn test_post_edges_have_single_link() {
        let config = config();
        let ctx = RenderContext::new(&config, false, Some(2022));
        let posts = list();

        let newest = render_post(&ctx, &posts, 0).unwrap();
        assert!(!newest.contains(r#"rel="next""#));
        assert!(newest.contains(r#"rel="prev""#));

        let oldest = render_post(&ctx, &posts, 2).unwrap();
        assert!(oldest.contains(r#"rel="next""#));
        assert!(!oldest.contains(r#"rel="prev""#));
    }

    #[test]
    fn test_untitled_post_fails() {
        let config = config();
        let ctx = RenderContext::new(&config, false, Some(2022));
        let posts = PostList::new(vec![post("untitled", "body only")]).unwrap();
        assert!(render_post(&ctx, &posts, 0).is_err());
    }
}
