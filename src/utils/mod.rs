//! Utility modules for the blog generator.

pub mod date;
pub mod html;
pub mod path;
mod plural;
pub mod slug;

pub use plural::plural_count;
