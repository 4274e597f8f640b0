//! Detection of the terse `owner/repo` shorthand.

use regex::Regex;
use std::sync::LazyLock;

/// Scheme prepended to shorthand input before decomposition.
pub const SHORTHAND_SCHEME: &str = "github:";

/// Owner segment (no leading `.` or `-`), `/`, repo segment, optional `#ref`.
///
/// This does not check the ref against git's full refname grammar; an invalid
/// committish is left for git itself to reject.
#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static SHORTHAND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^:@%/\s.-][^:@%/\s]*/[^:@\s/%]+(?:#.*)?$")
        .expect("SHORTHAND_PATTERN is a valid regex literal")
});

/// Returns `true` if `input` is an `owner/repo[#committish]` shorthand rather
/// than a URL or an SCP-style address.
#[must_use]
pub fn is_shorthand(input: &str) -> bool {
    SHORTHAND_PATTERN.is_match(input)
}

#[cfg(test)]
#[path = "shorthand_tests.rs"]
mod tests;
