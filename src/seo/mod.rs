//! Head metadata resolution.
//!
//! Turns a page's content record plus site-wide defaults into the ordered
//! set of `<meta>` tags, the display title and the canonical link.
//!
//! - [`og`]: tag model (`MetaTag`, `TagAttr`) and site defaults
//! - [`resolve`]: the resolver itself
//!
//! Rendering the resolved set into markup lives in `render::head`.

pub mod og;
pub mod resolve;

use thiserror::Error;

pub use og::{MetaTag, SiteDefaults};
pub use resolve::{ImageDescriptor, PageMeta, ResolvedMetaTagSet, resolve};

/// Errors raised while resolving page metadata.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetaError {
    /// A required field is missing or malformed; the page must not be rendered.
    #[error("invalid page metadata: {0}")]
    Validation(String),

    #[error("invalid image `{path}`: {reason}")]
    Image { path: String, reason: String },
}
