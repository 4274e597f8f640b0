use serde::Serialize;

use crate::host::Representation;

/// A git URL resolved against a known hosting provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitHostInfo {
    /// Name of the registry entry that matched (e.g. "github").
    pub host_name: String,
    /// Owner or account segment, absent for single-namespace URLs such as
    /// anonymous gists.
    pub user: Option<String>,
    /// Decoded credentials, kept only for `git:`, `http:` and `https:` URLs.
    pub auth: Option<String>,
    /// Repository name without the `.git` suffix.
    pub project: Option<String>,
    /// Branch, tag or commit from the URL fragment.
    pub committish: Option<String>,
    /// URL style the input was written in.
    pub default_representation: Representation,
}
