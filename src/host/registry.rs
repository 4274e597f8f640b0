use std::collections::HashSet;
use std::sync::LazyLock;

use super::builtin::builtin_hosts;
use super::{HostDefinition, RegistryError, Representation};
use crate::info::GitHostInfo;
use crate::matcher;
use crate::render::{self, RenderError, RenderOptions};

#[expect(
    clippy::expect_used,
    reason = "Built-in host patterns are compile-time constants and cannot fail"
)]
static BUILTIN: LazyLock<HostRegistry> = LazyLock::new(|| {
    builtin_hosts()
        .and_then(HostRegistry::new)
        .expect("built-in host definitions are valid")
});

/// Ordered, read-only collection of host definitions.
///
/// Matching visits hosts in order, but order never decides a result: a URL
/// claimed by more than one host resolves to nothing.
#[derive(Debug, Clone)]
pub struct HostRegistry {
    hosts: Vec<HostDefinition>,
}

impl HostRegistry {
    /// Build a registry, rejecting two definitions with the same name.
    pub fn new(hosts: Vec<HostDefinition>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for host in &hosts {
            if !seen.insert(host.name()) {
                return Err(RegistryError::DuplicateHost(host.name().to_string()));
            }
        }
        Ok(Self { hosts })
    }

    /// The shared registry of built-in hosts (github, bitbucket, gitlab, gist).
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    #[must_use]
    pub fn hosts(&self) -> &[HostDefinition] {
        &self.hosts
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&HostDefinition> {
        self.hosts.iter().find(|host| host.name() == name)
    }

    /// Resolve a git URL or `owner/repo` shorthand against this registry.
    ///
    /// Returns `None` for empty input, for input no host recognizes, and for
    /// input that more than one host recognizes.
    #[must_use]
    pub fn resolve(&self, input: &str) -> Option<GitHostInfo> {
        matcher::resolve(self, input)
    }

    /// [`HostRegistry::resolve`] for input that may be missing altogether.
    #[must_use]
    pub fn resolve_optional(&self, input: Option<&str>) -> Option<GitHostInfo> {
        input.and_then(|input| self.resolve(input))
    }

    /// Write `info` as a URL in the given representation.
    pub fn render(
        &self,
        info: &GitHostInfo,
        representation: &Representation,
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        render::render(self, info, representation, options)
    }

    /// Write `info` in its default representation, falling back to `sshurl`
    /// when that representation has no template for the host.
    pub fn render_default(
        &self,
        info: &GitHostInfo,
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        render::render_default(self, info, options)
    }
}
