use regex::Regex;
use std::sync::LazyLock;

use super::ParsedUrl;

/// Protocol assigned to SCP-style addresses.
const SCP_PROTOCOL: &str = "git+ssh:";

/// `auth@host:[/]path[.git][#hash]` where path is at most `org/repo`.
#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static SCP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^@]+)@([^:]+):/?((?:[^/]+/)?[^/]+?)(?:\.git)?(#.*)?$")
        .expect("SCP_PATTERN is a valid regex literal")
});

/// Decompose `user@host:path` input, or `None` if it is not SCP-style.
pub(super) fn decompose_scp(input: &str) -> Option<ParsedUrl> {
    let caps = SCP_PATTERN.captures(input)?;
    let auth = caps.get(1)?.as_str();
    let host = caps.get(2)?.as_str();
    let path = format!("/{}", caps.get(3)?.as_str());
    let hash = caps.get(4).map(|m| m.as_str().to_string());

    let href = format!(
        "git+ssh://{auth}@{host}{path}{}",
        hash.as_deref().unwrap_or_default()
    );

    Some(ParsedUrl {
        protocol: Some(SCP_PROTOCOL.to_string()),
        slashes: true,
        auth: Some(auth.to_string()),
        host: Some(host.to_string()),
        port: None,
        hostname: Some(host.to_string()),
        hash,
        search: None,
        query: None,
        pathname: Some(path.clone()),
        path: Some(path),
        href,
    })
}
