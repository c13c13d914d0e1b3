//! Configuration section definitions.
//!
//! Each module corresponds to a section in `suspend.toml`:
//!
//! | Module  | TOML Section | Purpose                                    |
//! |---------|--------------|--------------------------------------------|
//! | `build` | `[build]`    | Paths, feed, sitemap, manifest             |
//! | `site`  | `[site]`     | Title, description, author, url, social    |
//! | `theme` | `[theme]`    | Light/dark preference storage, accent      |

pub mod build;
pub mod site;
pub mod theme;

pub use build::{BuildSectionConfig, FeedFormat};
pub use site::SiteSectionConfig;
pub use theme::ThemeSectionConfig;
