//! User-level configuration loaded from `~/.githost/config.toml`.
//!
//! The file is optional; without it the built-in hosts are used as-is. It
//! can switch the built-in hosts off and add hosts of its own:
//!
//! ```toml
//! [registry]
//! builtin = true
//!
//! [[hosts]]
//! name = "sourcehut"
//! domain = "git.sr.ht"
//! protocols = ["git+ssh", "https", "ssh"]
//! pathmatch = '^/~([^/]+)/([^/]+?)(?:\.git|/)?$'
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::host::{HostDefinition, HostRegistry, RegistryError, Representation};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid host in user config: {0}")]
    Registry(#[from] RegistryError),
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Registry-scoped settings (`[registry]` table in the TOML file).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Keep the built-in hosts ahead of the configured ones.
    #[serde(default = "default_builtin")]
    pub builtin: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            builtin: default_builtin(),
        }
    }
}

fn default_builtin() -> bool {
    true
}

/// One `[[hosts]]` entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    pub name: String,
    #[serde(default)]
    pub domain: Option<String>,
    pub protocols: Vec<String>,
    /// Path pattern; the default `owner/project` pattern when omitted.
    #[serde(default)]
    pub pathmatch: Option<String>,
    #[serde(default)]
    pub treepath: Option<String>,
    /// Templates keyed by representation name (`browse`, `sshurl`, …).
    #[serde(default)]
    pub templates: BTreeMap<String, String>,
}

impl HostConfig {
    /// Compile this entry into a host definition.
    pub fn to_definition(&self) -> Result<HostDefinition, RegistryError> {
        let mut host = HostDefinition::new(&self.name, self.domain.as_deref(), &self.protocols)?;
        if let Some(pattern) = &self.pathmatch {
            host = host.with_pathmatch(pattern)?;
        }
        if let Some(treepath) = &self.treepath {
            host = host.with_treepath(treepath);
        }
        for (name, template) in &self.templates {
            host = host.with_template(Representation::from_name(name), template);
        }
        Ok(host)
    }
}

/// Top-level user configuration.
///
/// All fields are optional at the TOML level; missing fields resolve to their
/// `Default` values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    /// Registry-level settings (`[registry]` section).
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Additional hosts (`[[hosts]]` entries), matched after the built-ins.
    #[serde(default)]
    pub hosts: Vec<HostConfig>,
}

impl UserConfig {
    /// Build the host registry this configuration describes.
    pub fn build_registry(&self) -> Result<HostRegistry, RegistryError> {
        let mut hosts = if self.registry.builtin {
            HostRegistry::builtin().hosts().to_vec()
        } else {
            Vec::new()
        };
        for host in &self.hosts {
            hosts.push(host.to_definition()?);
        }
        HostRegistry::new(hosts)
    }
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Resolve the canonical path for the user config file (`~/.githost/config.toml`).
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".githost").join("config.toml"))
}

/// Load the user configuration.
///
/// An explicit `path` must exist. Without one, `~/.githost/config.toml` is
/// used if present and defaults otherwise.
pub fn load_user_config(path: Option<&Path>) -> Result<UserConfig, UserConfigError> {
    if let Some(path) = path {
        return read_config(path);
    }

    let Some(path) = user_config_path() else {
        debug!("Could not determine user config directory; using defaults");
        return Ok(UserConfig::default());
    };

    if !path.exists() {
        debug!(
            "User config not found at {}; using defaults",
            path.display()
        );
        return Ok(UserConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<UserConfig, UserConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: UserConfig = toml::from_str(&content)?;
    debug!("Loaded user config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "user_config_tests.rs"]
mod tests;
