//! `<head>` rendering from a resolved tag set.

use crate::seo::ResolvedMetaTagSet;
use crate::utils::html::{escape, void_tag};

use super::RenderContext;
use crate::embed::css::STYLE_PATH;

/// Render the `<head>` element.
///
/// Tags are written in resolver order; the canonical link only when the
/// resolver produced one.
pub fn render_head(ctx: &RenderContext<'_>, resolved: &ResolvedMetaTagSet) -> String {
    let mut out = String::with_capacity(1024 + resolved.tags.len() * 96);
    out.push_str("<head>\n");

    let mut line = |s: &str| {
        out.push_str("  ");
        out.push_str(s);
        out.push('\n');
    };

    line(&void_tag("meta", &[("charset", "utf-8")]));
    line(&void_tag(
        "meta",
        &[
            ("name", "viewport"),
            ("content", "width=device-width, initial-scale=1"),
        ],
    ));
    line(&format!("<title>{}</title>", escape(&resolved.title)));

    if let Some(canonical) = &resolved.canonical_url {
        line(&void_tag("link", &[("rel", "canonical"), ("href", canonical.as_str())]));
    }

    for tag in &resolved.tags {
        line(&void_tag(
            "meta",
            &[
                (tag.attr.as_str(), tag.key.as_str()),
                ("content", tag.content.as_str()),
            ],
        ));
    }

    let stylesheet = format!("/{STYLE_PATH}");
    line(&void_tag("link", &[("rel", "stylesheet"), ("href", stylesheet.as_str())]));

    let feed = &ctx.config.build.feed;
    if feed.enable {
        let href = format!("/{}", feed.path.display());
        line(&void_tag(
            "link",
            &[
                ("rel", "alternate"),
                ("type", feed.mime_type()),
                ("title", ctx.site.title),
                ("href", href.as_str()),
            ],
        ));
    }

    let manifest = &ctx.config.build.manifest;
    if manifest.enable {
        let href = format!("/{}", manifest.path.display());
        line(&void_tag("link", &[("rel", "manifest"), ("href", href.as_str())]));
        line(&void_tag(
            "meta",
            &[("name", "theme-color"), ("content", manifest.theme_color.as_str())],
        ));
    }

    out.push_str("</head>");
    out
}
