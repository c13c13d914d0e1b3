//! Markdown to HTML conversion using pulldown-cmark.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};

/// Options for markdown conversion
#[derive(Debug, Clone, Copy)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
    /// Enable smart punctuation (curly quotes, dashes)
    pub smart_punctuation: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
            smart_punctuation: true,
        }
    }
}

impl MarkdownOptions {
    /// Convert to pulldown-cmark Options
    fn to_pulldown_options(self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        if self.smart_punctuation {
            opts.insert(Options::ENABLE_SMART_PUNCTUATION);
        }
        opts
    }
}

/// Render markdown to HTML.
///
/// `rewrite_image` is called with every image destination; returning
/// `Some(url)` replaces it (used to point local images at their published
/// `/static/...` path).
pub fn to_html<F>(markdown: &str, options: MarkdownOptions, mut rewrite_image: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let parser = Parser::new_ext(markdown, options.to_pulldown_options()).map(|event| match event {
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => {
            let dest_url = rewrite_image(&dest_url).map_or(dest_url, CowStr::from);
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            })
        }
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Image destinations referenced by the markdown, in document order.
pub fn image_urls(markdown: &str, options: MarkdownOptions) -> Vec<String> {
    Parser::new_ext(markdown, options.to_pulldown_options())
        .filter_map(|event| match event {
            Event::Start(Tag::Image { dest_url, .. }) => Some(dest_url.into_string()),
            _ => None,
        })
        .collect()
}

/// Plain text of the markdown with whitespace collapsed.
///
/// Markup, image alt text and raw HTML are dropped; block boundaries become
/// single spaces.
pub fn plain_text(markdown: &str, options: MarkdownOptions) -> String {
    let mut text = String::with_capacity(markdown.len());
    let mut image_depth = 0usize;

    for event in Parser::new_ext(markdown, options.to_pulldown_options()) {
        match event {
            Event::Start(Tag::Image { .. }) => image_depth += 1,
            Event::End(TagEnd::Image) => image_depth = image_depth.saturating_sub(1),
            Event::Text(t) | Event::Code(t) if image_depth == 0 => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::CodeBlock
                | TagEnd::TableCell
                | TagEnd::BlockQuote(_),
            ) => text.push(' '),
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str) -> String {
        to_html(markdown, MarkdownOptions::default(), |_| None)
    }

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(render("Hello **world**"), "<p>Hello <strong>world</strong></p>\n");
    }

    #[test]
    fn test_heading_and_link() {
        let html = render("# Title\n\n[suspend](https://suspendfun.com)");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains(r#"<a href="https://suspendfun.com">suspend</a>"#));
    }

    #[test]
    fn test_extensions_enabled() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~old~~\n\n- [x] done");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>old</del>"));
        assert!(html.contains(r#"type="checkbox""#));
    }

    #[test]
    fn test_smart_punctuation_by_default() {
        let html = render("\"Quoted\" -- it's done...");
        assert_eq!(html, "<p>\u{201c}Quoted\u{201d} \u{2013} it\u{2019}s done\u{2026}</p>\n");

        let text = plain_text("Don't -- stop", MarkdownOptions::default());
        assert_eq!(text, "Don\u{2019}t \u{2013} stop");
    }

    #[test]
    fn test_smart_punctuation_disabled() {
        let options = MarkdownOptions {
            smart_punctuation: false,
            ..MarkdownOptions::default()
        };
        let html = to_html("\"Quoted\" -- it's", options, |_| None);
        assert!(html.contains("-- it's"));
        assert!(!html.contains('\u{201c}'));
    }

    #[test]
    fn test_extensions_disabled() {
        let options = MarkdownOptions {
            strikethrough: false,
            ..MarkdownOptions::default()
        };
        let html = to_html("~~old~~", options, |_| None);
        assert!(!html.contains("<del>"));
    }

    #[test]
    fn test_image_rewrite() {
        let html = to_html(
            "![hero](./hero.png) ![remote](https://cdn.example.com/a.png)",
            MarkdownOptions::default(),
            |url| url.starts_with("./").then(|| "/static/abc/hero.png".to_string()),
        );
        assert!(html.contains(r#"src="/static/abc/hero.png""#));
        assert!(html.contains(r#"src="https://cdn.example.com/a.png""#));
    }

    #[test]
    fn test_image_urls() {
        let urls = image_urls("![a](a.png)\n\ntext\n\n![b](/b.jpg)", MarkdownOptions::default());
        assert_eq!(urls, vec!["a.png", "/b.jpg"]);
    }

    #[test]
    fn test_plain_text() {
        let text = plain_text(
            "# Title\n\nSome *emphasis* and `code`.\n\n![alt text](a.png)\n\n- one\n- two",
            MarkdownOptions::default(),
        );
        assert_eq!(text, "Title Some emphasis and code. one two");
    }
}
