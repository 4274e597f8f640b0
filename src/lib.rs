//! Recognize git URLs and shorthands for well-known hosting providers.
//!
//! ```
//! let info = githost::from_url("git@github.com:foo/bar.git#v1.0").unwrap();
//! assert_eq!(info.host_name, "github");
//! assert_eq!(info.user.as_deref(), Some("foo"));
//! assert_eq!(info.project.as_deref(), Some("bar"));
//! assert_eq!(info.committish.as_deref(), Some("v1.0"));
//! ```

// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod host;
pub mod logging;
pub mod render;
pub mod shorthand;
pub mod url;
pub mod user_config;

mod info;
mod matcher;

// Re-export commonly used types
pub use host::{HostDefinition, HostRegistry, RegistryError, Representation};
pub use info::GitHostInfo;
pub use render::{RenderError, RenderOptions};
pub use shorthand::is_shorthand;
pub use url::{decompose, ParsedUrl};
pub use user_config::{load_user_config, UserConfig, UserConfigError};

/// Resolve `input` against the built-in hosts.
#[must_use]
pub fn from_url(input: &str) -> Option<GitHostInfo> {
    HostRegistry::builtin().resolve(input)
}

/// [`from_url`] for input that may be missing altogether.
#[must_use]
pub fn from_optional_url(input: Option<&str>) -> Option<GitHostInfo> {
    HostRegistry::builtin().resolve_optional(input)
}
