//! Generic URL grammar in the classic, lenient style: any scheme is
//! accepted, non-special schemes still carry a host (`github:user/repo`
//! has host `user`), and malformed input degrades into path text instead of
//! failing.

use regex::Regex;
use std::sync::LazyLock;

use super::ParsedUrl;

/// Protocols that always denote `//host`.
const SLASHED_PROTOCOLS: &[&str] = &["http:", "https:", "ftp:", "gopher:", "file:"];

/// Protocols that never carry a host.
const HOSTLESS_PROTOCOLS: &[&str] = &["javascript:"];

/// Characters that end the authority section.
const HOST_ENDING_CHARS: &[char] = &['/', '?', '#'];

/// Characters that cannot be part of a hostname.
const NON_HOST_CHARS: &[char] = &[
    '%', '/', '?', ';', '#', '\'', '{', '}', '|', '\\', '^', '`', '<', '>', '"', ' ', '\r', '\n',
    '\t',
];

const HOSTNAME_MAX_LEN: usize = 255;

#[expect(
    clippy::expect_used,
    reason = "URL grammar patterns are compile-time constants and cannot fail"
)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("URL grammar pattern is a valid regex literal")
}

static PROTOCOL_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-zA-Z0-9.+\-]+:"));
static SLASHED_AUTH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^//[^@/]+@[^@/]+"));
static PORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r":[0-9]*$"));
static HOSTNAME_PART: LazyLock<Regex> = LazyLock::new(|| compile(r"^[+a-zA-Z0-9_\-]{0,63}$"));
static HOSTNAME_PART_START: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^([+a-zA-Z0-9_\-]{0,63})(.*)$"));

/// Decompose `input` with the generic grammar.
pub(super) fn decompose_generic(input: &str) -> ParsedUrl {
    let mut parsed = ParsedUrl::default();
    let mut rest = backslashes_to_slashes(input.trim());

    let protocol = PROTOCOL_PATTERN
        .find(&rest)
        .map(|m| m.as_str().to_ascii_lowercase());
    if let Some(proto) = &protocol {
        rest = rest.get(proto.len()..).unwrap_or_default().to_string();
    }

    let hostless = protocol
        .as_deref()
        .is_some_and(|p| HOSTLESS_PROTOCOLS.contains(&p));
    let slashed_protocol = protocol
        .as_deref()
        .is_some_and(|p| SLASHED_PROTOCOLS.contains(&p));

    let mut slashes = false;
    if protocol.is_some() || SLASHED_AUTH_PATTERN.is_match(&rest) {
        slashes = rest.starts_with("//");
        if slashes && !hostless {
            rest = rest.get(2..).unwrap_or_default().to_string();
            parsed.slashes = true;
        }
    }

    if !hostless && (slashes || (protocol.is_some() && !slashed_protocol)) {
        rest = parse_authority(&mut parsed, &rest);
    }

    if let Some(idx) = rest.find('#') {
        parsed.hash = rest.get(idx..).map(str::to_string);
        rest.truncate(idx);
    }
    if let Some(idx) = rest.find('?') {
        let search = rest.get(idx..).unwrap_or_default().to_string();
        parsed.query = search.get(1..).map(str::to_string);
        parsed.search = Some(search);
        rest.truncate(idx);
    }

    if !rest.is_empty() {
        parsed.pathname = Some(rest);
    }
    let has_hostname = parsed.hostname.as_deref().is_some_and(|h| !h.is_empty());
    if slashed_protocol && has_hostname && parsed.pathname.is_none() {
        parsed.pathname = Some("/".to_string());
    }
    if parsed.pathname.is_some() || parsed.search.is_some() {
        parsed.path = Some(format!(
            "{}{}",
            parsed.pathname.as_deref().unwrap_or_default(),
            parsed.search.as_deref().unwrap_or_default()
        ));
    }

    parsed.protocol = protocol;
    parsed.href = build_href(&parsed, slashed_protocol);
    parsed
}

/// Backslashes ahead of the query or fragment are read as `/`.
fn backslashes_to_slashes(input: &str) -> String {
    let end = input.find(['?', '#']).unwrap_or(input.len());
    let (head, tail) = input.split_at_checked(end).unwrap_or((input, ""));
    format!("{}{tail}", head.replace('\\', "/"))
}

/// Consume `auth@host:port` from the front of `input`, filling `parsed`, and
/// return what is left.
fn parse_authority(parsed: &mut ParsedUrl, input: &str) -> String {
    let mut rest = input;

    // Last `@` before the path starts; earlier ones belong to the password.
    let authority = rest
        .find(HOST_ENDING_CHARS)
        .and_then(|end| rest.get(..end))
        .unwrap_or(rest);
    if let Some(at) = authority.rfind('@') {
        parsed.auth = rest.get(..at).map(str::to_string);
        rest = rest.get(at.saturating_add(1)..).unwrap_or_default();
    }

    let host_end = rest.find(NON_HOST_CHARS).unwrap_or(rest.len());
    let (host, tail) = rest.split_at_checked(host_end).unwrap_or((rest, ""));
    let mut tail = tail.to_string();

    let (mut hostname, port) = split_port(host);
    let ipv6 = hostname.starts_with('[') && hostname.ends_with(']');
    if !ipv6 {
        if let Some((valid, not_host)) = split_invalid_hostname(&hostname) {
            hostname = valid;
            tail = format!("/{not_host}{tail}");
        }
    }

    hostname = if hostname.len() > HOSTNAME_MAX_LEN {
        String::new()
    } else {
        hostname.to_lowercase()
    };

    parsed.host = Some(match &port {
        Some(port) => format!("{hostname}:{port}"),
        None => hostname.clone(),
    });
    parsed.port = port;

    if ipv6 {
        hostname = hostname
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or_default()
            .to_string();
        if !tail.starts_with('/') {
            tail = format!("/{tail}");
        }
    }
    parsed.hostname = Some(hostname);
    tail
}

/// Split a trailing `:digits` off `host`. An empty port still drops the colon.
fn split_port(host: &str) -> (String, Option<String>) {
    let Some(found) = PORT_PATTERN.find(host) else {
        return (host.to_string(), None);
    };
    let port = found
        .as_str()
        .strip_prefix(':')
        .filter(|p| !p.is_empty())
        .map(str::to_string);
    let hostname = host.get(..found.start()).unwrap_or_default().to_string();
    (hostname, port)
}

/// Find the first dot-separated label that is not a valid hostname label.
///
/// Returns the valid prefix of the hostname and the text that has to be
/// pushed back into the path, or `None` when every label is valid.
fn split_invalid_hostname(hostname: &str) -> Option<(String, String)> {
    let labels: Vec<&str> = hostname.split('.').collect();
    for (idx, label) in labels.iter().enumerate() {
        if label.is_empty() || HOSTNAME_PART.is_match(label) {
            continue;
        }
        // Non-ASCII labels survive here; they would be punycoded by a full parser.
        let ascii: String = label
            .chars()
            .map(|c| if c.is_ascii() { c } else { 'x' })
            .collect();
        if HOSTNAME_PART.is_match(&ascii) {
            continue;
        }

        let mut valid: Vec<&str> = labels.iter().take(idx).copied().collect();
        let mut not_host: Vec<&str> = labels.iter().skip(idx.saturating_add(1)).copied().collect();
        if let Some(caps) = HOSTNAME_PART_START.captures(label) {
            valid.push(caps.get(1).map_or("", |m| m.as_str()));
            not_host.insert(0, caps.get(2).map_or("", |m| m.as_str()));
        }
        return Some((valid.join("."), not_host.join(".")));
    }
    None
}

fn build_href(parsed: &ParsedUrl, slashed_protocol: bool) -> String {
    let slashes = if parsed.slashes || (slashed_protocol && parsed.host.is_some()) {
        "//"
    } else {
        ""
    };
    let auth = parsed
        .auth
        .as_deref()
        .map_or_else(String::new, |auth| format!("{auth}@"));
    format!(
        "{}{slashes}{auth}{}{}{}{}",
        parsed.protocol.as_deref().unwrap_or_default(),
        parsed.host.as_deref().unwrap_or_default(),
        parsed.pathname.as_deref().unwrap_or_default(),
        parsed.search.as_deref().unwrap_or_default(),
        parsed.hash.as_deref().unwrap_or_default(),
    )
}

#[cfg(test)]
#[path = "generic_tests.rs"]
mod tests;
