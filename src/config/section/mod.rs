//! Configuration section definitions.
//!
//! Each module corresponds to a section in `decor.toml`:
//!
//! | Module     | TOML Section   | Purpose                                |
//! |------------|----------------|----------------------------------------|
//! | `build`    | `[build]`      | Rendered site location, page filter    |
//! | `decorate` | `[decorate]`   | Content container and the decorators   |
//! | `site`     | `[site]`       | Site url and base path                 |

mod build;
mod decorate;
mod site;

pub use build::BuildSectionConfig;
pub use decorate::DecorateSectionConfig;
pub use site::SiteSectionConfig;
