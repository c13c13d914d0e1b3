//! Post loading and the ordered post list.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use super::excerpt::{self, EXCERPT_LENGTH};
use super::markdown::{self, MarkdownOptions};
use super::{FrontMatter, PostRoute, frontmatter};
use crate::config::SiteConfig;
use crate::image::{StaticAsset, is_local_reference, resolve_reference};
use crate::seo::{ImageDescriptor, PageMeta};
use crate::utils::date::DateTimeUtc;
use crate::{debug, log};

/// One loaded markdown post.
#[derive(Debug, Clone)]
pub struct Post {
    pub route: PostRoute,
    pub front: FrontMatter,
    /// Parsed front-matter date.
    pub date: Option<DateTimeUtc>,
    /// Rendered HTML body.
    pub html: String,
    /// Plain-text excerpt of the body.
    pub excerpt: String,
    pub hero_image: Option<ImageDescriptor>,
    /// Local images referenced by the post (thumbnail and body).
    pub assets: Vec<StaticAsset>,
}

impl Post {
    /// Read and convert the post at `path`.
    pub fn load(path: &Path, config: &SiteConfig) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let route = PostRoute::new(path, &config.build.content, &config.build.output)?;
        Self::from_source(route, &content, config.get_root())
            .with_context(|| format!("failed to load {}", config.root_relative(path).display()))
    }

    /// Build a post from already-read `content`.
    pub fn from_source(route: PostRoute, content: &str, root: &Path) -> Result<Self> {
        let (front, body) = frontmatter::extract(content)?.unwrap_or((FrontMatter::default(), content));
        let options = MarkdownOptions::default();

        let date = front.parsed_date();
        if date.is_none()
            && let Some(raw) = &front.date
        {
            log!("warning"; "{}: ignoring malformed date `{}`", route.slug, raw);
        }

        let mut assets: FxHashMap<String, StaticAsset> = FxHashMap::default();

        let hero_image = match front.thumbnail.as_deref() {
            Some(reference) if is_local_reference(reference) => {
                let source = resolve_reference(reference, &route.source_dir, root);
                let asset = StaticAsset::from_source(&source)
                    .with_context(|| format!("thumbnail `{reference}` not found"))?;
                let descriptor = asset.describe()?;
                assets.insert(reference.to_string(), asset);
                Some(descriptor)
            }
            Some(reference) => {
                log!("warning"; "{}: remote thumbnail `{}` has unknown dimensions, skipping", route.slug, reference);
                None
            }
            None => None,
        };

        for url in markdown::image_urls(body, options) {
            if assets.contains_key(&url) || !is_local_reference(&url) {
                continue;
            }
            let source = resolve_reference(&url, &route.source_dir, root);
            if !source.is_file() {
                debug!("post"; "{}: image `{}` not found, left as-is", route.slug, url);
                continue;
            }
            assets.insert(url, StaticAsset::from_source(&source)?);
        }

        let html = markdown::to_html(body, options, |url| {
            assets.get(url).map(|asset| asset.url_path.clone())
        });
        let excerpt = excerpt::prune(&markdown::plain_text(body, options), EXCERPT_LENGTH);

        let mut assets: Vec<_> = assets.into_values().collect();
        assets.sort_by(|a, b| a.url_path.cmp(&b.url_path));

        Ok(Self {
            route,
            front,
            date,
            html,
            excerpt,
            hero_image,
            assets,
        })
    }

    /// Title from front-matter, empty when missing.
    pub fn title(&self) -> &str {
        self.front.title.as_deref().unwrap_or_default()
    }

    /// Front-matter description, falling back to the excerpt.
    pub fn description(&self) -> &str {
        self.front
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(&self.excerpt)
    }

    #[inline]
    pub fn is_draft(&self) -> bool {
        self.front.draft
    }

    /// Resolver input for this post.
    pub fn page_meta(&self) -> PageMeta {
        PageMeta {
            title: self.title().to_string(),
            description: Some(self.description().to_string()),
            path: Some(self.route.permalink.clone()),
            hero_image: self.hero_image.clone(),
            language: self.front.lang.clone(),
            meta: self.front.meta_overrides(),
        }
    }
}

/// Posts ordered newest first.
///
/// Undated posts sort after dated ones; ties are broken by slug so the order
/// is stable across builds.
#[derive(Debug, Default)]
pub struct PostList {
    posts: Vec<Post>,
}

impl PostList {
    /// Sort `posts`, rejecting two posts with the same permalink.
    pub fn new(mut posts: Vec<Post>) -> Result<Self> {
        {
            let mut seen: FxHashMap<&str, &Path> = FxHashMap::default();
            for post in &posts {
                if let Some(other) = seen.insert(&post.route.permalink, &post.route.source) {
                    bail!(
                        "permalink conflict: {} and {} both map to {}",
                        other.display(),
                        post.route.source.display(),
                        post.route.permalink
                    );
                }
            }
        }

        posts.sort_by(compare_posts);
        Ok(Self { posts })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn as_slice(&self) -> &[Post] {
        &self.posts
    }

    /// Older neighbour of the post at `index`.
    pub fn previous(&self, index: usize) -> Option<&Post> {
        self.posts.get(index + 1)
    }

    /// Newer neighbour of the post at `index`.
    pub fn next(&self, index: usize) -> Option<&Post> {
        index.checked_sub(1).and_then(|i| self.posts.get(i))
    }

    /// Year of the newest dated post.
    pub fn newest_year(&self) -> Option<u16> {
        self.posts.iter().find_map(|p| p.date).map(|d| d.year)
    }

    /// Unique assets across all posts.
    pub fn assets(&self) -> Vec<&StaticAsset> {
        let mut seen = FxHashSet::default();
        self.posts
            .iter()
            .flat_map(|p| &p.assets)
            .filter(|asset| seen.insert(&asset.url_path))
            .collect()
    }
}

fn compare_posts(a: &Post, b: &Post) -> Ordering {
    match (a.date, b.date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.route.slug.cmp(&b.route.slug))
}

/// Markdown files below `dir`.
pub fn collect_markdown_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("md")))
        .collect()
}

/// Load every post in the content directory, in parallel.
///
/// Drafts are dropped when `build.skip_drafts` is set.
pub fn collect_posts(config: &SiteConfig) -> Result<PostList> {
    let files = collect_markdown_files(&config.build.content);
    debug!("post"; "found {} markdown files", files.len());

    let posts = files
        .par_iter()
        .map(|path| Post::load(path, config))
        .collect::<Result<Vec<_>>>()?;

    let total = posts.len();
    let posts: Vec<_> = if config.build.skip_drafts {
        posts.into_iter().filter(|p| !p.is_draft()).collect()
    } else {
        posts
    };
    if posts.len() < total {
        debug!("post"; "skipped {} drafts", total - posts.len());
    }

    PostList::new(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::image::write_test_png;
    use tempfile::TempDir;

    fn site(dir: &Path) -> SiteConfig {
        let mut config = test_parse_config("");
        config.set_root(dir);
        config.build.content = dir.join("content/blog");
        config.build.output = dir.join("public");
        fs::create_dir_all(&config.build.content).unwrap();
        config
    }

    fn write_post(config: &SiteConfig, rel: &str, content: &str) -> PathBuf {
        let path = config.build.content.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    fn post(slug: &str, date: Option<&str>) -> Post {
        let route = PostRoute::new(
            &Path::new("/c").join(format!("{slug}.md")),
            Path::new("/c"),
            Path::new("/o"),
        )
        .unwrap();
        let content = match date {
            Some(date) => format!("---\ntitle: {slug}\ndate: {date}\n---\nbody"),
            None => format!("---\ntitle: {slug}\n---\nbody"),
        };
        Post::from_source(route, &content, Path::new("/")).unwrap()
    }

    #[test]
    fn test_load_post() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path());
        let path = write_post(
            &config,
            "hello/index.md",
            "---\ntitle: Hello\ndate: 2024-01-05\n---\n\nFirst *paragraph* here.\n",
        );

        let post = Post::load(&path, &config).unwrap();
        assert_eq!(post.title(), "Hello");
        assert_eq!(post.route.permalink, "/hello/");
        assert_eq!(post.date, Some(DateTimeUtc::from_ymd(2024, 1, 5)));
        assert!(post.html.contains("<em>paragraph</em>"));
        assert_eq!(post.excerpt, "First paragraph here.");
        assert_eq!(post.description(), "First paragraph here.");
        assert!(post.hero_image.is_none());
    }

    #[test]
    fn test_load_post_with_images() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path());
        let post_dir = config.build.content.join("pics");
        fs::create_dir_all(&post_dir).unwrap();
        write_test_png(&post_dir.join("hero.png"), 8, 4);
        write_test_png(&post_dir.join("inline.png"), 2, 2);
        let path = write_post(
            &config,
            "pics/index.md",
            "---\ntitle: Pics\nthumbnail: ./hero.png\n---\n\n![x](./inline.png) ![y](missing.png)\n",
        );

        let post = Post::load(&path, &config).unwrap();
        let hero = post.hero_image.as_ref().unwrap();
        assert_eq!((hero.width(), hero.height()), (8, 4));
        assert!(hero.source_path().starts_with("/static/"));
        assert_eq!(post.assets.len(), 2);
        assert!(post.html.contains("src=\"/static/"));
        assert!(post.html.contains("src=\"missing.png\""));

        let meta = post.page_meta();
        assert_eq!(meta.hero_image.as_ref(), Some(hero));
        assert_eq!(meta.path.as_deref(), Some("/pics/"));
    }

    #[test]
    fn test_missing_thumbnail_fails() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path());
        let path = write_post(&config, "a.md", "---\ntitle: A\nthumbnail: nope.png\n---\n");
        assert!(Post::load(&path, &config).is_err());
    }

    #[test]
    fn test_post_without_frontmatter_has_empty_title() {
        let route = PostRoute::new(Path::new("/c/a.md"), Path::new("/c"), Path::new("/o")).unwrap();
        let post = Post::from_source(route, "just text", Path::new("/")).unwrap();
        assert_eq!(post.title(), "");
        assert!(crate::seo::resolve(&post.page_meta(), &test_defaults()).is_err());
    }

    fn test_defaults() -> crate::seo::SiteDefaults<'static> {
        crate::seo::SiteDefaults {
            title: "Site",
            description: "Default",
            author: "Me",
            url: "https://example.com",
            language: "en",
            fallback_image: None,
        }
    }

    #[test]
    fn test_sort_order_and_neighbours() {
        let list = PostList::new(vec![
            post("b-old", Some("2020-01-01")),
            post("undated", None),
            post("new", Some("2024-03-01")),
            post("a-old", Some("2020-01-01")),
        ])
        .unwrap();

        let slugs: Vec<_> = list.iter().map(|p| p.route.slug.as_str()).collect();
        assert_eq!(slugs, ["new", "a-old", "b-old", "undated"]);

        assert!(list.next(0).is_none());
        assert_eq!(list.previous(0).unwrap().route.slug, "a-old");
        assert_eq!(list.next(1).unwrap().route.slug, "new");
        assert!(list.previous(3).is_none());
        assert_eq!(list.newest_year(), Some(2024));
    }

    #[test]
    fn test_permalink_conflict() {
        assert!(PostList::new(vec![post("same", None), post("same", None)]).is_err());
    }

    #[test]
    fn test_collect_posts_skips_drafts() {
        let dir = TempDir::new().unwrap();
        let mut config = site(dir.path());
        write_post(&config, "one.md", "---\ntitle: One\ndate: 2024-01-01\n---\n");
        write_post(&config, "two.md", "---\ntitle: Two\ndraft: true\n---\n");
        write_post(&config, "notes.txt", "not a post");

        assert_eq!(collect_posts(&config).unwrap().len(), 2);

        config.build.skip_drafts = true;
        let list = collect_posts(&config).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.iter().next().unwrap().title(), "One");
    }
}
