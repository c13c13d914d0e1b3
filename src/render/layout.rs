//! Page shell: head, navigation, header, optional bio, main, footer.

use super::{RenderContext, bio::render_bio, head::render_head, nav::render_nav};
use crate::seo::ResolvedMetaTagSet;
use crate::theme::body_class;
use crate::utils::html::{escape, escape_attr};

/// Wrap `main` into a complete HTML document.
pub fn render_layout(
    ctx: &RenderContext<'_>,
    resolved: &ResolvedMetaTagSet,
    main: &str,
    show_bio: bool,
) -> String {
    let head = render_head(ctx, resolved);
    let nav = render_nav(ctx);
    let bio = if show_bio {
        render_bio(&ctx.config.site).unwrap_or_default()
    } else {
        String::new()
    };

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"{lang}\">\n",
            "{head}\n",
            "<body class=\"{body_class}\">\n",
            "<div class=\"layout\">\n",
            "{nav}\n",
            "<header class=\"header\"><h1 class=\"header__title\"><a href=\"/\">{title}</a></h1></header>\n",
            "{bio}",
            "<main>\n{main}\n</main>\n",
            "<footer class=\"footer\">© {year}, Built with suspend</footer>\n",
            "</div>\n",
            "</body>\n",
            "</html>\n"
        ),
        lang = escape_attr(&resolved.language),
        head = head,
        body_class = body_class(ctx.dark),
        nav = nav,
        title = escape(ctx.config.site.header_title()),
        bio = if bio.is_empty() { bio } else { bio + "\n" },
        main = main,
        year = ctx.year,
    )
}
