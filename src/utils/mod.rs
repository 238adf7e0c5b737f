//! Utility modules.

pub mod html;
pub mod path;
pub mod plural;
pub mod url;

pub use plural::plural_count;
