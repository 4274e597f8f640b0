use super::*;

fn info(input: &str) -> GitHostInfo {
    HostRegistry::builtin().resolve(input).unwrap()
}

fn render_as(input: &str, representation: Representation) -> String {
    render(
        HostRegistry::builtin(),
        &info(input),
        &representation,
        &RenderOptions::default(),
    )
    .unwrap()
}

#[test]
fn test_github_representations() {
    let input = "foo/bar#v1.0";
    assert_eq!(render_as(input, Representation::Shortcut), "github:foo/bar#v1.0");
    assert_eq!(render_as(input, Representation::Path), "foo/bar#v1.0");
    assert_eq!(
        render_as(input, Representation::Https),
        "git+https://github.com/foo/bar.git#v1.0"
    );
    assert_eq!(
        render_as(input, Representation::SshUrl),
        "git+ssh://git@github.com/foo/bar.git#v1.0"
    );
    assert_eq!(
        render_as(input, Representation::Ssh),
        "git@github.com:foo/bar.git#v1.0"
    );
    assert_eq!(
        render_as(input, Representation::Git),
        "git://github.com/foo/bar.git#v1.0"
    );
    assert_eq!(
        render_as(input, Representation::Browse),
        "https://github.com/foo/bar/tree/v1.0"
    );
    assert_eq!(
        render_as(input, Representation::Docs),
        "https://github.com/foo/bar/tree/v1.0#readme"
    );
    assert_eq!(
        render_as(input, Representation::Tarball),
        "https://github.com/foo/bar/archive/v1.0.tar.gz"
    );
    assert_eq!(
        render_as(input, Representation::Bugs),
        "https://github.com/foo/bar/issues"
    );
}

#[test]
fn test_missing_committish_defaults() {
    assert_eq!(
        render_as("foo/bar", Representation::Browse),
        "https://github.com/foo/bar"
    );
    assert_eq!(
        render_as("foo/bar", Representation::Tarball),
        "https://github.com/foo/bar/archive/master.tar.gz"
    );
    assert_eq!(
        render_as("foo/bar", Representation::SshUrl),
        "git+ssh://git@github.com/foo/bar.git"
    );
}

#[test]
fn test_file_path() {
    let options = RenderOptions {
        path: Some("/src/my file.rs".to_string()),
        ..RenderOptions::default()
    };
    let rendered = render(
        HostRegistry::builtin(),
        &info("foo/bar#v1.0"),
        &Representation::File,
        &options,
    )
    .unwrap();
    assert_eq!(
        rendered,
        "https://raw.githubusercontent.com/foo/bar/v1.0/src/my%20file.rs"
    );
}

#[test]
fn test_no_git_plus() {
    let options = RenderOptions {
        no_git_plus: true,
        ..RenderOptions::default()
    };
    let rendered = render(
        HostRegistry::builtin(),
        &info("foo/bar"),
        &Representation::Https,
        &options,
    )
    .unwrap();
    assert_eq!(rendered, "https://github.com/foo/bar.git");
}

#[test]
fn test_auth_is_inserted_raw() {
    let input = "https://user:pw@github.com/foo/bar";
    assert_eq!(
        render_as(input, Representation::Https),
        "git+https://user:pw@github.com/foo/bar.git"
    );
    assert_eq!(
        render_as(input, Representation::Git),
        "git://user:pw@github.com/foo/bar.git"
    );
}

#[test]
fn test_committish_encoding() {
    let input = "foo/bar#feature/x";
    assert_eq!(
        render_as(input, Representation::Browse),
        "https://github.com/foo/bar/tree/feature%2Fx"
    );
    assert_eq!(
        render_as(input, Representation::SshUrl),
        "git+ssh://git@github.com/foo/bar.git#feature/x"
    );
}

#[test]
fn test_host_treepath() {
    assert_eq!(
        render_as("bitbucket:team/repo#dev", Representation::Browse),
        "https://bitbucket.org/team/repo/src/dev"
    );
}

#[test]
fn test_gist_templates() {
    let input = "https://gist.github.com/abc123";
    assert_eq!(
        render_as(input, Representation::SshUrl),
        "git+ssh://git@gist.github.com/abc123.git"
    );
    assert_eq!(
        render_as(input, Representation::Browse),
        "https://gist.github.com/abc123"
    );
}

#[test]
fn test_missing_template() {
    let result = render(
        HostRegistry::builtin(),
        &info("gitlab:org/repo"),
        &Representation::Git,
        &RenderOptions::default(),
    );
    assert!(matches!(
        result,
        Err(RenderError::MissingTemplate { host, representation })
            if host == "gitlab" && representation == Representation::Git
    ));
}

#[test]
fn test_unknown_host() {
    let mut orphan = info("foo/bar");
    orphan.host_name = "nowhere".to_string();
    let result = render_default(HostRegistry::builtin(), &orphan, &RenderOptions::default());
    assert!(matches!(result, Err(RenderError::UnknownHost(name)) if name == "nowhere"));
}

#[test]
fn test_default_representation() {
    let rendered = render_default(
        HostRegistry::builtin(),
        &info("git@github.com:foo/bar.git"),
        &RenderOptions::default(),
    )
    .unwrap();
    assert_eq!(rendered, "git+ssh://git@github.com/foo/bar.git");
}

#[test]
fn test_untemplated_default_falls_back_to_sshurl() {
    let http = info("http://github.com/foo/bar");
    assert_eq!(
        http.default_representation,
        Representation::Other("http".to_string())
    );
    let rendered =
        render_default(HostRegistry::builtin(), &http, &RenderOptions::default()).unwrap();
    assert_eq!(rendered, "git+ssh://git@github.com/foo/bar.git");
}

#[test]
fn test_unknown_placeholder_left_alone() {
    let vars = HashMap::from([("user", "me".to_string())]);
    assert_eq!(fill("{user}/{nope}", &vars), "me/{nope}");
}
