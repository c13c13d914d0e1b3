//! Navigation bar.

use super::RenderContext;
use crate::theme::nav_class;
use crate::utils::html::{escape, escape_attr};

/// Site-name link to `/`, classed by theme.
pub fn render_nav(ctx: &RenderContext<'_>) -> String {
    let title = ctx.config.site.header_title();
    format!(
        concat!(
            r#"<header class="header-nav">"#,
            r#"<nav id="navigation" class="{class}">"#,
            r#"<ul class="menu"><li><a href="/">{title}</a></li></ul>"#,
            "</nav></header>"
        ),
        class = escape_attr(nav_class(ctx.dark)),
        title = escape(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::config;

    #[test]
    fn test_nav_class_follows_theme() {
        let config = config();
        let light = render_nav(&RenderContext::new(&config, false, Some(2024)));
        assert!(light.contains(r#"class="header__nav header__nav__light""#));

        let dark = render_nav(&RenderContext::new(&config, true, Some(2024)));
        assert!(dark.contains(r#"class="header__nav""#));
        assert!(dark.contains(r#"<a href="/">Suspend Fun</a>"#));
    }
}
