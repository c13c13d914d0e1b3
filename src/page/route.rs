//! Post route - source to output path mapping.

use std::path::{Component, Path, PathBuf};

use anyhow::{Result, bail};

use crate::utils::slug::slugify;

/// Source -> output path mapping for a post
///
/// # Example
///
/// ```text
/// content/blog/hello-world/index.md   -> public/hello-world/index.html
/// content/blog/notes/Café Crème.md    -> public/notes/cafe-creme/index.html
///
/// PostRoute {
///     source:      content/blog/hello-world/index.md
///     slug:        hello-world
///     permalink:   /hello-world/
///     output_file: public/hello-world/index.html
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRoute {
    /// Source markdown file
    pub source: PathBuf,
    /// Directory holding the source (base for relative image references)
    pub source_dir: PathBuf,
    /// Slash-separated slug without leading or trailing `/`
    pub slug: String,
    /// URL path, `/<slug>/`
    pub permalink: String,
    /// Output HTML file
    pub output_file: PathBuf,
}

impl PostRoute {
    /// Derive the route of `source` inside `content_dir`.
    ///
    /// `<dir>/index.md` takes its slug from the directory; any other file from
    /// its stem. Every path component is slugified.
    pub fn new(source: &Path, content_dir: &Path, output_dir: &Path) -> Result<Self> {
        let Ok(relative) = source.strip_prefix(content_dir) else {
            bail!(
                "{} is outside the content directory {}",
                source.display(),
                content_dir.display()
            );
        };

        let mut parts: Vec<String> = relative
            .parent()
            .into_iter()
            .flat_map(Path::components)
            .filter_map(|c| match c {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        let is_index = relative
            .file_stem()
            .is_some_and(|stem| stem.eq_ignore_ascii_case("index"));
        if !is_index && let Some(stem) = relative.file_stem() {
            parts.push(stem.to_string_lossy().into_owned());
        }

        let segments: Vec<String> = parts
            .iter()
            .map(|part| slugify(part))
            .filter(|s| !s.is_empty())
            .collect();
        if segments.is_empty() {
            bail!("cannot derive a slug for {}", source.display());
        }

        let slug = segments.join("/");
        let mut output_file = output_dir.to_path_buf();
        output_file.extend(&segments);
        output_file.push("index.html");

        Ok(Self {
            source: source.to_path_buf(),
            source_dir: source.parent().map(Path::to_path_buf).unwrap_or_default(),
            permalink: format!("/{slug}/"),
            slug,
            output_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(source: &str) -> Result<PostRoute> {
        PostRoute::new(
            Path::new(source),
            Path::new("/site/content/blog"),
            Path::new("/site/public"),
        )
    }

    #[test]
    fn test_index_takes_directory_name() {
        let route = route("/site/content/blog/hello-world/index.md").unwrap();
        assert_eq!(route.slug, "hello-world");
        assert_eq!(route.permalink, "/hello-world/");
        assert_eq!(
            route.output_file,
            PathBuf::from("/site/public/hello-world/index.html")
        );
        assert_eq!(
            route.source_dir,
            PathBuf::from("/site/content/blog/hello-world")
        );
    }

    #[test]
    fn test_plain_file_takes_stem() {
        let route = route("/site/content/blog/My First Post.md").unwrap();
        assert_eq!(route.slug, "my-first-post");
        assert_eq!(route.permalink, "/my-first-post/");
    }

    #[test]
    fn test_nested_components_slugified() {
        let route = route("/site/content/blog/Notes/Café Crème.md").unwrap();
        assert_eq!(route.slug, "notes/cafe-creme");
        assert_eq!(
            route.output_file,
            PathBuf::from("/site/public/notes/cafe-creme/index.html")
        );
    }

    #[test]
    fn test_root_index_has_no_slug() {
        assert!(route("/site/content/blog/index.md").is_err());
    }

    #[test]
    fn test_outside_content_dir() {
        assert!(route("/elsewhere/post.md").is_err());
    }
}
