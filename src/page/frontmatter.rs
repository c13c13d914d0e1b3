//! Front-matter extraction from YAML (`---`) or TOML (`+++`) blocks.

use anyhow::{Context, Result, bail};
use serde_json::Value;

use super::FrontMatter;

/// Split `content` into front-matter and body.
///
/// Returns `Ok(None)` when the file has no front-matter block.
pub fn extract(content: &str) -> Result<Option<(FrontMatter, &str)>> {
    match detect(content) {
        Some((fm, body, is_toml)) => {
            let front = if is_toml {
                parse_toml(fm)?
            } else {
                parse_yaml(fm)?
            };
            Ok(Some((front, body)))
        }
        None => Ok(None),
    }
}

/// Detect and extract front-matter.
/// Returns `(frontmatter, body, is_toml)` if found.
fn detect(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        if trimmed.starts_with(fence)
            && let Some(end) = trimmed[3..].find(&format!("\n{fence}"))
        {
            let fm = trimmed[3..3 + end].trim();
            let rest = &trimmed[3 + end + 4..];
            // Drop the remainder of the closing fence line
            let body = rest.split_once('\n').map_or("", |(_, body)| body);
            return Some((fm, body.trim_start_matches(['\r', '\n']), is_toml));
        }
    }

    None
}

/// Parse YAML front-matter.
///
/// Known fields are typed leniently (a numeric title becomes a string, a
/// `"true"` draft counts); everything else lands in `extra` unchanged.
fn parse_yaml(content: &str) -> Result<FrontMatter> {
    if content.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    let map = match serde_yaml::from_str::<Value>(content).context("invalid YAML front-matter")? {
        Value::Object(map) => map,
        Value::Null => return Ok(FrontMatter::default()),
        _ => bail!("invalid YAML front-matter: expected `key: value` pairs"),
    };

    let mut front = FrontMatter::default();
    for (key, value) in map {
        match key.to_ascii_lowercase().as_str() {
            "title" => front.title = value_to_string(value),
            "description" => front.description = value_to_string(value),
            "date" => front.date = value_to_string(value),
            "thumbnail" | "featured" => front.thumbnail = value_to_string(value),
            "lang" => front.lang = value_to_string(value),
            "draft" => {
                front.draft = match value {
                    Value::Bool(b) => b,
                    Value::String(s) => s.eq_ignore_ascii_case("true"),
                    _ => false,
                }
            }
            _ => {
                front.extra.insert(key, value);
            }
        }
    }
    Ok(front)
}

/// Parse TOML front-matter.
///
/// TOML datetimes become strings so `date = 2024-01-05` works unquoted.
fn parse_toml(content: &str) -> Result<FrontMatter> {
    let table: toml::Table = toml::from_str(content).context("invalid TOML front-matter")?;
    let json = toml_to_json(toml::Value::Table(table));
    serde_json::from_value(json).context("invalid TOML front-matter")
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yaml_frontmatter() {
        let content = "---\ntitle: \"Hello, World\"\ndate: 2024-01-01\n---\n\n# Body";
        let (front, body) = extract(content).unwrap().unwrap();

        assert_eq!(front.title.as_deref(), Some("Hello, World"));
        assert_eq!(front.date.as_deref(), Some("2024-01-01"));
        assert!(body.starts_with("# Body"));
    }

    #[test]
    fn test_yaml_unquoted_title_with_comma() {
        let content = "---\ntitle: Kotlin, coroutines and you\n---\n";
        let (front, _) = extract(content).unwrap().unwrap();
        assert_eq!(front.title.as_deref(), Some("Kotlin, coroutines and you"));
    }

    #[test]
    fn test_yaml_meta_keys_with_colon() {
        let content = "---\ntitle: Hello\nog:type: article\ntwitter:site: '@suspendfun'\n---\n";
        let (front, _) = extract(content).unwrap().unwrap();

        assert_eq!(front.extra.get("og:type"), Some(&json!("article")));
        assert_eq!(front.extra.get("twitter:site"), Some(&json!("@suspendfun")));
        assert_eq!(front.meta_overrides().len(), 2);
    }

    #[test]
    fn test_yaml_standard_fields() {
        let content =
            "---\ntitle: Hello\ndescription: Short\nfeatured: ./hero.png\ndraft: true\nlang: de\n---\n";
        let (front, _) = extract(content).unwrap().unwrap();

        assert_eq!(front.description.as_deref(), Some("Short"));
        assert_eq!(front.thumbnail.as_deref(), Some("./hero.png"));
        assert!(front.draft);
        assert_eq!(front.lang.as_deref(), Some("de"));
        assert!(front.extra.is_empty());
    }

    #[test]
    fn test_yaml_extra_fields() {
        let content = "---\ntitle: Hello\ncustom: world\ncount: 42\nflag: true\ntags: [x, y, z]\n---\n";
        let (front, _) = extract(content).unwrap().unwrap();

        assert_eq!(front.extra.get("custom"), Some(&json!("world")));
        assert_eq!(front.extra.get("count"), Some(&json!(42)));
        assert_eq!(front.extra.get("flag"), Some(&json!(true)));
        assert_eq!(front.extra.get("tags"), Some(&json!(["x", "y", "z"])));
    }

    #[test]
    fn test_yaml_block_scalar() {
        let content = "---\ntitle: Hello\ndescription: >-\n  Multi line\n  summary here\n---\nBody";
        let (front, body) = extract(content).unwrap().unwrap();
        assert_eq!(front.description.as_deref(), Some("Multi line summary here"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_yaml_escaped_quotes() {
        let content = "---\ntitle: \"Say \\\"hi\\\"\"\ndescription: 'It''s here'\n---\n";
        let (front, _) = extract(content).unwrap().unwrap();
        assert_eq!(front.title.as_deref(), Some("Say \"hi\""));
        assert_eq!(front.description.as_deref(), Some("It's here"));
    }

    #[test]
    fn test_yaml_lenient_types() {
        let content = "---\ntitle: 2024\ndraft: \"true\"\n---\n";
        let (front, _) = extract(content).unwrap().unwrap();
        assert_eq!(front.title.as_deref(), Some("2024"));
        assert!(front.draft);
    }

    #[test]
    fn test_invalid_yaml_fails() {
        assert!(extract("---\ntitle: [unclosed\n---\n").is_err());
        assert!(extract("---\n- just\n- a list\n---\n").is_err());
    }

    #[test]
    fn test_empty_yaml_block() {
        let (front, body) = extract("---\n---\nBody").unwrap().unwrap();
        assert!(front.title.is_none());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_toml_frontmatter() {
        let content = "+++\ntitle = \"Hello\"\ndate = 2024-01-05\n\"og:type\" = \"article\"\n+++\n\n# Body";
        let (front, body) = extract(content).unwrap().unwrap();

        assert_eq!(front.title.as_deref(), Some("Hello"));
        assert_eq!(front.date.as_deref(), Some("2024-01-05"));
        assert_eq!(front.extra.get("og:type"), Some(&json!("article")));
        assert!(body.starts_with("# Body"));
    }

    #[test]
    fn test_invalid_toml_fails() {
        assert!(extract("+++\ntitle = \n+++\n").is_err());
    }

    #[test]
    fn test_no_frontmatter() {
        assert!(extract("# Just content").unwrap().is_none());
        assert!(extract("---\nunterminated").unwrap().is_none());
    }
}
