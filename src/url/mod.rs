//! Decomposition of git URL strings into their structural parts.
//!
//! Two grammars are tried in order:
//! - SCP-style addresses: `git@github.com:org-name/repo.git#ref`
//! - Generic URLs: `scheme://auth@host:port/path?query#hash`, plus
//!   scheme-only forms like `github:org-name/repo`
//!
//! Decomposition never fails. Input that fits neither grammar produces a
//! mostly empty [`ParsedUrl`] which later matches no host.

mod generic;
mod scp;

use serde::Serialize;
use tracing::trace;

/// Structural parts of a decomposed URL.
///
/// Fields follow the classic (non-WHATWG) URL record: `protocol` keeps its
/// trailing colon, `hash` keeps its leading `#`, `search` keeps its leading
/// `?`, and `path` is `pathname` followed by `search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    /// Lowercased scheme with trailing colon, e.g. `"https:"`.
    pub protocol: Option<String>,
    /// Whether the scheme was followed by `//`.
    pub slashes: bool,
    /// Raw credentials before the `@`, still percent-encoded.
    pub auth: Option<String>,
    /// Hostname plus `:port` when a port is present.
    pub host: Option<String>,
    pub port: Option<String>,
    pub hostname: Option<String>,
    /// Fragment including the leading `#`.
    pub hash: Option<String>,
    /// Query including the leading `?`.
    pub search: Option<String>,
    pub query: Option<String>,
    pub pathname: Option<String>,
    /// `pathname` followed by `search`.
    pub path: Option<String>,
    pub href: String,
}

/// Decompose a git URL.
///
/// The SCP-style form is tried first because generic URL grammar would read
/// `git@github.com:org/repo` as scheme `git@github.com:`.
#[must_use]
pub fn decompose(input: &str) -> ParsedUrl {
    if let Some(parsed) = scp::decompose_scp(input) {
        trace!(input, "decomposed as scp-style address");
        return parsed;
    }
    trace!(input, "decomposed with generic url grammar");
    generic::decompose_generic(input)
}

#[cfg(test)]
#[path = "decompose_tests.rs"]
mod tests;
