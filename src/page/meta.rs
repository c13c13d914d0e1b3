//! Post front-matter.

use serde::{Deserialize, Serialize};

use super::JsonMap;
use crate::seo::MetaTag;
use crate::utils::date::DateTimeUtc;

/// Front-matter of a markdown post.
///
/// # Standard Fields
///
/// | Field         | Type     | Description                               |
/// |---------------|----------|-------------------------------------------|
/// | `title`       | `String` | Post title                                |
/// | `description` | `String` | Summary; the excerpt is used when absent  |
/// | `date`        | `String` | `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SSZ`    |
/// | `thumbnail`   | `String` | Hero image path (alias: `featured`)       |
/// | `draft`       | `bool`   | Draft status (default: false)             |
/// | `lang`        | `String` | Page language, overrides `site.language`  |
///
/// # Custom Fields (`extra`)
///
/// Everything else lands in `extra`. Keys containing a `:` (for example
/// `og:type` or `twitter:site`) are treated as head tag overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    #[serde(alias = "featured")]
    pub thumbnail: Option<String>,
    pub draft: bool,
    pub lang: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl FrontMatter {
    /// Parsed `date`, `None` when absent or malformed.
    pub fn parsed_date(&self) -> Option<DateTimeUtc> {
        self.date.as_deref().and_then(DateTimeUtc::parse)
    }

    /// Head tag overrides from `extra`, in key order.
    ///
    /// Only scalar values are used; arrays and objects are skipped.
    pub fn meta_overrides(&self) -> Vec<MetaTag> {
        self.extra
            .iter()
            .filter(|(key, _)| key.contains(':'))
            .filter_map(|(key, value)| {
                let content = match value {
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Number(n) => n.to_string(),
                    serde_json::Value::Bool(b) => b.to_string(),
                    _ => return None,
                };
                Some(MetaTag::infer(key.as_str(), content))
            })
            .collect()
    }
}
