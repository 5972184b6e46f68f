//! Configuration section definitions.
//!
//! Each module corresponds to a section in `enigma.toml`:
//!
//! | Module         | TOML Section     | Purpose                              |
//! |----------------|------------------|--------------------------------------|
//! | `site`         | `[site]`         | Title, author, url, base path        |
//! | `build`        | `[build]`        | Content directory                    |
//! | `markdown`     | `[markdown]`     | Frontmatter transforms               |
//! | `integrations` | `[integrations]` | Registered plugins (Tailwind CSS)    |
//! | `home`         | `[home]`         | Homepage hero text                   |

mod build;
mod home;
mod integrations;
mod markdown;
mod site;

pub use build::BuildConfig;
pub use home::HomeConfig;
pub use integrations::{IntegrationsConfig, TailwindConfig};
pub use markdown::MarkdownConfig;
pub use site::SiteInfoConfig;
