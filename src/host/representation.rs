use serde::{Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// URL style a hosted repository can be written in.
///
/// `Other` carries a bare protocol name that has no dedicated style, for
/// example `http` from `http://github.com/org/repo`. It is passed through
/// unvalidated; rendering falls back to [`Representation::SshUrl`] for it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Representation {
    Shortcut,
    Https,
    SshUrl,
    Git,
    Ssh,
    Browse,
    Docs,
    Path,
    Tarball,
    File,
    Bugs,
    Other(String),
}

impl Representation {
    /// Every representation that can have a URL template.
    pub const TEMPLATED: [Self; 11] = [
        Self::Shortcut,
        Self::Https,
        Self::SshUrl,
        Self::Git,
        Self::Ssh,
        Self::Browse,
        Self::Docs,
        Self::Path,
        Self::Tarball,
        Self::File,
        Self::Bugs,
    ];

    /// Map a URL protocol (with or without trailing colon) to the
    /// representation a URL with that protocol is written in.
    #[must_use]
    pub fn from_protocol(protocol: &str) -> Self {
        let bare = protocol.strip_suffix(':').unwrap_or(protocol);
        match bare {
            "git+ssh" | "ssh" => Self::SshUrl,
            "git+https" => Self::Https,
            "git" => Self::Git,
            other => Self::from_name(other),
        }
    }

    /// Look up a representation by its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "shortcut" => Self::Shortcut,
            "https" => Self::Https,
            "sshurl" => Self::SshUrl,
            "git" => Self::Git,
            "ssh" => Self::Ssh,
            "browse" => Self::Browse,
            "docs" => Self::Docs,
            "path" => Self::Path,
            "tarball" => Self::Tarball,
            "file" => Self::File,
            "bugs" => Self::Bugs,
            other => Self::Other(other.to_string()),
        }
    }

    /// Look up a representation that can have a URL template, by name.
    #[must_use]
    pub fn templated(name: &str) -> Option<Self> {
        Self::TEMPLATED
            .into_iter()
            .find(|representation| representation.as_str() == name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Shortcut => "shortcut",
            Self::Https => "https",
            Self::SshUrl => "sshurl",
            Self::Git => "git",
            Self::Ssh => "ssh",
            Self::Browse => "browse",
            Self::Docs => "docs",
            Self::Path => "path",
            Self::Tarball => "tarball",
            Self::File => "file",
            Self::Bugs => "bugs",
            Self::Other(name) => name,
        }
    }
}

impl FromStr for Representation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Representation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
