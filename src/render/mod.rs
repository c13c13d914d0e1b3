//! HTML rendering.
//!
//! Pages are plain strings assembled from small component functions:
//!
//! ```text
//! layout ── head      (resolved meta tags, canonical link, stylesheet, feed)
//!        ├─ nav       (site name, theme-dependent class)
//!        ├─ header    (header title)
//!        ├─ bio       (index page only)
//!        ├─ main      (index listing or post detail)
//!        └─ footer
//! ```
//!
//! Metadata always goes through [`crate::seo::resolve`] first; a page whose
//! metadata fails validation is never rendered.

mod bio;
mod head;
mod index;
mod layout;
mod nav;
mod post;

pub use index::render_index;
pub use post::render_post;

use crate::config::SiteConfig;
use crate::seo::SiteDefaults;
use crate::utils::date::current_year;

/// Everything a page render needs besides the page itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    pub site: SiteDefaults<'a>,
    /// Dark theme flag from the preference store.
    pub dark: bool,
    /// Copyright year in the footer.
    pub year: u16,
}

impl<'a> RenderContext<'a> {
    /// `year` falls back to the current UTC year.
    pub fn new(config: &'a SiteConfig, dark: bool, year: Option<u16>) -> Self {
        Self {
            config,
            site: SiteDefaults::from_config(config),
            dark,
            year: year.unwrap_or_else(current_year),
        }
    }
}
