use regex::Regex;
use std::collections::BTreeMap;

use super::{RegistryError, Representation};

/// Path pattern used by hosts that put `owner/project` at the path root.
pub const DEFAULT_PATHMATCH: &str = r"^/([^/]+)/([^/]+?)(?:\.git|/)?$";

/// Templates shared by every host unless the host overrides them.
const DEFAULT_TEMPLATES: [(Representation, &str); 8] = [
    (
        Representation::Ssh,
        "git@{domain}:{user}/{project}.git{#committish}",
    ),
    (
        Representation::SshUrl,
        "git+ssh://git@{domain}/{user}/{project}.git{#committish}",
    ),
    (
        Representation::Browse,
        "https://{domain}/{user}/{project}{/tree/committish}",
    ),
    (
        Representation::Docs,
        "https://{domain}/{user}/{project}{/tree/committish}#readme",
    ),
    (
        Representation::Https,
        "git+https://{auth@}{domain}/{user}/{project}.git{#committish}",
    ),
    (
        Representation::File,
        "https://{domain}/{user}/{project}/raw/{committish}/{path}",
    ),
    (
        Representation::Shortcut,
        "{type}:{user}/{project}{#committish}",
    ),
    (Representation::Path, "{user}/{project}{#committish}"),
];

/// One hosting provider: how its URLs are recognized and written.
#[derive(Debug, Clone)]
pub struct HostDefinition {
    name: String,
    domain: Option<String>,
    protocol_pattern: Regex,
    pathmatch: Regex,
    treepath: Option<String>,
    templates: BTreeMap<Representation, String>,
}

impl HostDefinition {
    /// Create a host with the default path pattern and templates.
    ///
    /// `protocols` are bare names such as `git+ssh` or `https`. A `None`
    /// domain makes the host reachable only through its `name:` shortcut.
    pub fn new<I, S>(name: &str, domain: Option<&str>, protocols: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let protocols: Vec<String> = protocols
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect();
        if protocols.is_empty() {
            return Err(RegistryError::EmptyProtocols(name.to_string()));
        }

        let alternatives: Vec<String> = protocols.iter().map(|p| regex::escape(p)).collect();
        let protocol_pattern = compile(name, &format!("^({}):$", alternatives.join("|")))?;
        let pathmatch = compile(name, DEFAULT_PATHMATCH)?;
        let templates = DEFAULT_TEMPLATES
            .iter()
            .map(|(repr, template)| (repr.clone(), (*template).to_string()))
            .collect();

        Ok(Self {
            name: name.to_string(),
            domain: domain.map(str::to_string),
            protocol_pattern,
            pathmatch,
            treepath: None,
            templates,
        })
    }

    /// Replace the path pattern. Group 1 is the owner, group 2 the project;
    /// either may be absent.
    pub fn with_pathmatch(mut self, pattern: &str) -> Result<Self, RegistryError> {
        self.pathmatch = compile(&self.name, pattern)?;
        Ok(self)
    }

    /// Path segment that precedes a committish in browse URLs.
    #[must_use]
    pub fn with_treepath(mut self, treepath: &str) -> Self {
        self.treepath = Some(treepath.to_string());
        self
    }

    /// Set or override the URL template for one representation.
    #[must_use]
    pub fn with_template(mut self, representation: Representation, template: &str) -> Self {
        self.templates.insert(representation, template.to_string());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    #[must_use]
    pub fn pathmatch(&self) -> &Regex {
        &self.pathmatch
    }

    #[must_use]
    pub fn treepath(&self) -> Option<&str> {
        self.treepath.as_deref()
    }

    #[must_use]
    pub fn template(&self, representation: &Representation) -> Option<&str> {
        self.templates.get(representation).map(String::as_str)
    }

    /// Whether `protocol` (with trailing colon, e.g. `"https:"`) is on this
    /// host's whitelist.
    #[must_use]
    pub fn accepts_protocol(&self, protocol: &str) -> bool {
        self.protocol_pattern.is_match(protocol)
    }
}

fn compile(host: &str, pattern: &str) -> Result<Regex, RegistryError> {
    Regex::new(pattern).map_err(|source| RegistryError::InvalidPattern {
        host: host.to_string(),
        source,
    })
}
