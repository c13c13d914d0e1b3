//! Index page: bio, tagline and post cards.

use anyhow::{Context, Result};

use super::{RenderContext, layout::render_layout};
use crate::page::PostList;
use crate::seo::{PageMeta, resolve};
use crate::utils::html::{escape, escape_attr};

/// Render `/index.html`.
pub fn render_index(ctx: &RenderContext<'_>, posts: &PostList) -> Result<String> {
    let site = &ctx.config.site;
    let page = PageMeta::new(site.header_title()).with_path("/");
    let resolved = resolve(&page, &ctx.site).context("failed to resolve index metadata")?;

    let mut main = String::new();
    if !site.header.extra.trim().is_empty() {
        main.push_str(&format!(
            "<h3 class=\"tagline\">{}</h3>\n",
            escape(site.header.extra.trim())
        ));
    }

    for post in posts.iter() {
        let title = match post.title() {
            "" => post.route.slug.as_str(),
            title => title,
        };
        let date = post.date.map(|d| d.to_display()).unwrap_or_default();
        main.push_str(&format!(
            concat!(
                "<article class=\"card\">",
                "<header><h3><a href=\"{href}\">{title}</a></h3><small>{date}</small></header>",
                "<section><p>{description}</p></section>",
                "</article>\n"
            ),
            href = escape_attr(&post.route.permalink),
            title = escape(title),
            date = date,
            description = escape(post.description()),
        ));
    }

    Ok(render_layout(ctx, &resolved, main.trim_end(), true))
}
