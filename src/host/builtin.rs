//! The hosting providers known out of the box.

use super::{HostDefinition, RegistryError, Representation};

const GIST_PATHMATCH: &str = r"^/(?:([^/]+)/)?([a-z0-9]+)(?:\.git)?$";

/// Built-in hosts, in match order.
pub(super) fn builtin_hosts() -> Result<Vec<HostDefinition>, RegistryError> {
    Ok(vec![github()?, bitbucket()?, gitlab()?, gist()?])
}

fn github() -> Result<HostDefinition, RegistryError> {
    let host = HostDefinition::new(
        "github",
        Some("github.com"),
        ["git", "http", "git+ssh", "git+https", "ssh", "https"],
    )?
    .with_treepath("tree")
    .with_template(
        Representation::File,
        "https://{auth@}raw.githubusercontent.com/{user}/{project}/{committish}/{path}",
    )
    .with_template(
        Representation::Bugs,
        "https://{domain}/{user}/{project}/issues",
    )
    .with_template(
        Representation::Git,
        "git://{auth@}{domain}/{user}/{project}.git{#committish}",
    )
    .with_template(
        Representation::Tarball,
        "https://{domain}/{user}/{project}/archive/{committish}.tar.gz",
    );
    Ok(host)
}

fn bitbucket() -> Result<HostDefinition, RegistryError> {
    let host = HostDefinition::new(
        "bitbucket",
        Some("bitbucket.org"),
        ["git+ssh", "git+https", "ssh", "https"],
    )?
    .with_treepath("src")
    .with_template(
        Representation::Tarball,
        "https://{domain}/{user}/{project}/get/{committish}.tar.gz",
    );
    Ok(host)
}

fn gitlab() -> Result<HostDefinition, RegistryError> {
    let host = HostDefinition::new(
        "gitlab",
        Some("gitlab.com"),
        ["git+ssh", "git+https", "ssh", "https"],
    )?
    .with_treepath("tree")
    .with_template(
        Representation::Docs,
        "https://{domain}/{user}/{project}{/tree/committish}#README",
    )
    .with_template(
        Representation::Bugs,
        "https://{domain}/{user}/{project}/issues",
    )
    .with_template(
        Representation::Tarball,
        "https://{domain}/{user}/{project}/repository/archive.tar.gz?ref={committish}",
    );
    Ok(host)
}

/// Gists are addressed by id; the owner segment is optional.
fn gist() -> Result<HostDefinition, RegistryError> {
    let host = HostDefinition::new(
        "gist",
        Some("gist.github.com"),
        ["git", "git+ssh", "git+https", "ssh", "https"],
    )?
    .with_pathmatch(GIST_PATHMATCH)?
    .with_template(
        Representation::File,
        "https://gist.githubusercontent.com/{user}/{project}/raw{/committish}/{path}",
    )
    .with_template(Representation::Bugs, "https://{domain}/{project}")
    .with_template(
        Representation::Git,
        "git://{domain}/{project}.git{#committish}",
    )
    .with_template(
        Representation::Ssh,
        "git@{domain}:/{project}.git{#committish}",
    )
    .with_template(
        Representation::SshUrl,
        "git+ssh://git@{domain}/{project}.git{#committish}",
    )
    .with_template(Representation::Browse, "https://{domain}/{project}{/committish}")
    .with_template(Representation::Docs, "https://{domain}/{project}{/committish}")
    .with_template(
        Representation::Https,
        "git+https://{domain}/{project}.git{#committish}",
    )
    .with_template(Representation::Shortcut, "{type}:{project}{#committish}")
    .with_template(Representation::Path, "{project}{#committish}")
    .with_template(
        Representation::Tarball,
        "https://{domain}/{user}/{project}/archive/{committish}.tar.gz",
    );
    Ok(host)
}
