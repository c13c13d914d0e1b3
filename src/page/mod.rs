//! Posts: front-matter, markdown conversion, routing, and the post list.

mod excerpt;
mod frontmatter;
mod markdown;
mod meta;
mod route;
mod store;

pub use meta::FrontMatter;
pub use route::PostRoute;
pub use store::{Post, PostList, collect_posts};

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
