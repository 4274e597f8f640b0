//! Writing a resolved URL back out through the host's URL templates.
//!
//! Templates use `{name}` placeholders. The plain placeholders (`type`,
//! `domain`, `user`, `auth`, `project`, `committish`, `treepath`, `path`) are
//! component-encoded; `{auth@}` and `{#committish}` insert the raw value with
//! its separator, or nothing. `{/tree/committish}` and `{/committish}` vanish
//! without a committish, and a bare `{committish}` falls back to `master`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

use crate::host::{HostDefinition, HostRegistry, Representation};
use crate::info::GitHostInfo;

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const DEFAULT_COMMITTISH: &str = "master";

#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([^{}]+)\}").expect("PLACEHOLDER is a valid regex literal")
});

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown host: {0}")]
    UnknownHost(String),

    #[error("Host {host} has no {representation} template")]
    MissingTemplate {
        host: String,
        representation: Representation,
    },
}

/// Options for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Strip a leading `git+` (`git+https://…` becomes `https://…`).
    pub no_git_plus: bool,
    /// File inside the repository, used by the `file` representation.
    pub path: Option<String>,
}

pub(crate) fn render(
    registry: &HostRegistry,
    info: &GitHostInfo,
    representation: &Representation,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let host = lookup(registry, info)?;
    let template = host
        .template(representation)
        .ok_or_else(|| RenderError::MissingTemplate {
            host: host.name().to_string(),
            representation: representation.clone(),
        })?;

    let rendered = fill(template, &variables(host, info, options));
    if options.no_git_plus {
        if let Some(stripped) = rendered.strip_prefix("git+") {
            return Ok(stripped.to_string());
        }
    }
    Ok(rendered)
}

pub(crate) fn render_default(
    registry: &HostRegistry,
    info: &GitHostInfo,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let host = lookup(registry, info)?;
    let representation = if host.template(&info.default_representation).is_some() {
        &info.default_representation
    } else {
        &Representation::SshUrl
    };
    render(registry, info, representation, options)
}

fn lookup<'r>(
    registry: &'r HostRegistry,
    info: &GitHostInfo,
) -> Result<&'r HostDefinition, RenderError> {
    registry
        .get(&info.host_name)
        .ok_or_else(|| RenderError::UnknownHost(info.host_name.clone()))
}

fn variables(
    host: &HostDefinition,
    info: &GitHostInfo,
    options: &RenderOptions,
) -> HashMap<&'static str, String> {
    let auth = info.auth.as_deref().filter(|a| !a.is_empty());
    let committish = info.committish.as_deref().filter(|c| !c.is_empty());
    let encoded_committish = committish.map(encode);
    let treepath = encode(host.treepath().unwrap_or_default());
    let file_path = options
        .path
        .as_deref()
        .map(|p| encode_path(p.trim_start_matches('/')))
        .unwrap_or_default();

    HashMap::from([
        ("type", encode(host.name())),
        ("domain", encode(host.domain().unwrap_or_default())),
        ("user", encode(info.user.as_deref().unwrap_or_default())),
        ("auth", encode(auth.unwrap_or_default())),
        ("project", encode(info.project.as_deref().unwrap_or_default())),
        ("path", file_path),
        (
            "auth@",
            auth.map_or_else(String::new, |a| format!("{a}@")),
        ),
        (
            "#committish",
            committish.map_or_else(String::new, |c| format!("#{c}")),
        ),
        (
            "/tree/committish",
            encoded_committish
                .as_deref()
                .map_or_else(String::new, |c| format!("/{treepath}/{c}")),
        ),
        (
            "/committish",
            encoded_committish
                .as_deref()
                .map_or_else(String::new, |c| format!("/{c}")),
        ),
        (
            "committish",
            encoded_committish.unwrap_or_else(|| DEFAULT_COMMITTISH.to_string()),
        ),
        ("treepath", treepath),
    ])
}

/// Substitute known placeholders; unknown ones are left as written.
fn fill(template: &str, vars: &HashMap<&'static str, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            caps.get(1)
                .and_then(|key| vars.get(key.as_str()))
                .map_or_else(|| whole.to_string(), Clone::clone)
        })
        .into_owned()
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Encode each segment of a file path, keeping the separators.
fn encode_path(path: &str) -> String {
    path.split('/').map(encode).collect::<Vec<_>>().join("/")
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
