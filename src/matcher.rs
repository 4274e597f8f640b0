//! Host matching and field extraction.
//!
//! Every host in the registry gets a chance at the decomposed URL through
//! one of two strategies:
//! - shortcut: the protocol is the host's own name (`gitlab:org/repo`)
//! - domain: the host equals the host's domain, the protocol is on its
//!   whitelist and the path fits its path pattern
//!
//! Exactly one host must accept the URL for it to resolve.

use percent_encoding::percent_decode_str;
use regex::Regex;
use std::str::Utf8Error;
use std::sync::LazyLock;
use tracing::debug;

use crate::host::{HostDefinition, HostRegistry, Representation};
use crate::info::GitHostInfo;
use crate::shorthand::{is_shorthand, SHORTHAND_SCHEME};
use crate::url::{decompose, ParsedUrl};

/// Protocols whose credentials are worth keeping; SSH identity lives in the
/// host segment instead.
const AUTH_PROTOCOLS: &[&str] = &["git:", "https:", "http:"];

#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static SHORTCUT_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(.*?)(?:\.git)?$").expect("SHORTCUT_PATH is a valid regex literal")
});

pub(crate) fn resolve(registry: &HostRegistry, input: &str) -> Option<GitHostInfo> {
    if input.is_empty() {
        return None;
    }

    let url = if is_shorthand(input) {
        format!("{SHORTHAND_SCHEME}{input}")
    } else {
        input.to_string()
    };
    let parsed = decompose(&url);

    let matches: Vec<GitHostInfo> = registry
        .hosts()
        .iter()
        .filter_map(|host| match_host(host, &parsed))
        .collect();

    if matches.len() > 1 {
        let names: Vec<&str> = matches.iter().map(|m| m.host_name.as_str()).collect();
        debug!(input, hosts = ?names, "ambiguous git url claimed by several hosts");
        return None;
    }
    let info = matches.into_iter().next();
    if info.is_none() {
        debug!(input, "git url matched no known host");
    }
    info
}

/// Try one host against the decomposed URL.
fn match_host(host: &HostDefinition, parsed: &ParsedUrl) -> Option<GitHostInfo> {
    let protocol = parsed.protocol.as_deref()?;

    let auth = match parsed.auth.as_deref() {
        Some(auth) if !auth.is_empty() && AUTH_PROTOCOLS.contains(&protocol) => {
            Some(decode(auth).ok()?)
        }
        _ => None,
    };
    let committish = parsed
        .hash
        .as_deref()
        .map(|hash| decode(hash.strip_prefix('#').unwrap_or(hash)))
        .transpose()
        .ok()?;

    let (user, project, default_representation) =
        if protocol.strip_suffix(':') == Some(host.name()) {
            match_shortcut(parsed)?
        } else {
            match_domain(host, parsed, protocol)?
        };

    Some(GitHostInfo {
        host_name: host.name().to_string(),
        user,
        auth,
        project,
        committish,
        default_representation,
    })
}

type Extracted = (Option<String>, Option<String>, Representation);

/// `name:user/project` style input.
fn match_shortcut(parsed: &ParsedUrl) -> Option<Extracted> {
    let user = decode(parsed.host.as_deref()?).ok()?;
    let path = SHORTCUT_PATH.replace(parsed.path.as_deref()?, "$1");
    let project = decode(&path).ok()?;
    Some((Some(user), Some(project), Representation::Shortcut))
}

/// URL on the host's own domain.
fn match_domain(host: &HostDefinition, parsed: &ParsedUrl, protocol: &str) -> Option<Extracted> {
    let domain = host.domain()?;
    if parsed.host.as_deref() != Some(domain) || !host.accepts_protocol(protocol) {
        return None;
    }

    let caps = host.pathmatch().captures(parsed.path.as_deref()?)?;
    let user = caps.get(1).map(|m| decode(m.as_str())).transpose().ok()?;
    let project = caps.get(2).map(|m| decode(m.as_str())).transpose().ok()?;
    Some((user, project, Representation::from_protocol(protocol)))
}

/// Percent-decode one URL component.
fn decode(component: &str) -> Result<String, Utf8Error> {
    percent_decode_str(component)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
