//! Author bio block.

use crate::config::SiteSectionConfig;
use crate::utils::html::{escape, escape_attr};

/// Author name, summary and social links; `None` without an author name.
pub fn render_bio(site: &SiteSectionConfig) -> Option<String> {
    let author = &site.author;
    if author.name.trim().is_empty() {
        return None;
    }

    let mut out = String::from(r#"<div class="bio"><p class="author-description">"#);
    out.push_str(&format!("Hi, I am <strong>{}</strong>", escape(&author.name)));
    if !author.summary.trim().is_empty() {
        out.push_str(&format!(" and {}", escape(author.summary.trim())));
    }
    out.push_str("</p>");

    let social = &site.social;
    let links: Vec<(&str, String)> = [
        ("Twitter", social.twitter.as_deref().map(|h| format!("https://twitter.com/{}", h.trim_start_matches('@')))),
        ("GitHub", social.github.as_deref().map(|h| format!("https://github.com/{h}"))),
        ("LinkedIn", social.linkedin.as_deref().map(|h| format!("https://www.linkedin.com/in/{h}/"))),
    ]
    .into_iter()
    .filter_map(|(label, href)| href.map(|href| (label, href)))
    .collect();

    if !links.is_empty() {
        out.push_str(r#"<ul class="socials">"#);
        for (label, href) in links {
            out.push_str(&format!(
                r#"<li><a href="{}" rel="me">{}</a></li>"#,
                escape_attr(&href),
                label
            ));
        }
        out.push_str("</ul>");
    }

    out.push_str("</div>");
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::config;

    #[test]
    fn test_bio_with_socials() {
        let config = config();
        let bio = render_bio(&config.site).unwrap();
        assert!(bio.contains("Hi, I am <strong>Raj Saxena</strong> and who lives in Berlin."));
        assert!(bio.contains(r#"href="https://twitter.com/therajsaxena""#));
        assert!(bio.contains(r#"href="https://github.com/raj-saxena""#));
        assert!(!bio.contains("linkedin"));
    }

    #[test]
    fn test_no_author_no_bio() {
        let config = crate::config::test_parse_config("");
        assert!(render_bio(&config.site).is_none());
    }
}
