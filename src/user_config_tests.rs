use super::*;
use std::fs;
use tempfile::tempdir;

const SOURCEHUT: &str = r#"
[[hosts]]
name = "sourcehut"
domain = "git.sr.ht"
protocols = ["git+ssh", "https", "ssh"]
pathmatch = '^/~([^/]+)/([^/]+?)(?:\.git|/)?$'
treepath = "tree"

[hosts.templates]
browse = "https://{domain}/~{user}/{project}{/tree/committish}"
"#;

#[test]
fn test_empty_toml_produces_defaults() {
    let cfg: UserConfig = toml::from_str("").expect("Should parse empty TOML");
    assert_eq!(cfg, UserConfig::default());
    assert!(cfg.registry.builtin);
    assert!(cfg.hosts.is_empty());
}

#[test]
fn test_registry_section_only() {
    let cfg: UserConfig = toml::from_str("[registry]\n").expect("Should parse [registry] section");
    assert_eq!(cfg.registry, RegistryConfig::default());
}

#[test]
fn test_unknown_registry_field_rejected() {
    let result: Result<UserConfig, _> = toml::from_str("[registry]\nbogus = 1\n");
    assert!(result.is_err());
}

#[test]
fn test_host_entry_parses() {
    let cfg: UserConfig = toml::from_str(SOURCEHUT).expect("Should parse hosts");
    assert_eq!(cfg.hosts.len(), 1);
    let host = &cfg.hosts[0];
    assert_eq!(host.name, "sourcehut");
    assert_eq!(host.domain.as_deref(), Some("git.sr.ht"));
    assert_eq!(host.protocols, vec!["git+ssh", "https", "ssh"]);
    assert_eq!(host.treepath.as_deref(), Some("tree"));
    assert!(host.templates.contains_key("browse"));
}

#[test]
fn test_configured_host_is_appended() {
    let cfg: UserConfig = toml::from_str(SOURCEHUT).expect("Should parse hosts");
    let registry = cfg.build_registry().expect("Should build registry");
    let names: Vec<&str> = registry.hosts().iter().map(HostDefinition::name).collect();
    assert_eq!(names, vec!["github", "bitbucket", "gitlab", "gist", "sourcehut"]);

    let info = registry
        .resolve("https://git.sr.ht/~someone/tool#main")
        .expect("Should resolve sourcehut URL");
    assert_eq!(info.host_name, "sourcehut");
    assert_eq!(info.user.as_deref(), Some("someone"));
    assert_eq!(info.project.as_deref(), Some("tool"));
    assert_eq!(info.committish.as_deref(), Some("main"));

    let browse = registry
        .render(&info, &Representation::Browse, &crate::RenderOptions::default())
        .expect("Should render");
    assert_eq!(browse, "https://git.sr.ht/~someone/tool/tree/main");
}

#[test]
fn test_builtin_can_be_disabled() {
    let toml_str = format!("[registry]\nbuiltin = false\n{SOURCEHUT}");
    let cfg: UserConfig = toml::from_str(&toml_str).expect("Should parse");
    let registry = cfg.build_registry().expect("Should build registry");
    assert_eq!(registry.hosts().len(), 1);
    assert!(registry.resolve("foo/bar").is_none());
}

#[test]
fn test_duplicate_of_builtin_name_rejected() {
    let toml_str = r#"
[[hosts]]
name = "github"
domain = "github.example.com"
protocols = ["https"]
"#;
    let cfg: UserConfig = toml::from_str(toml_str).expect("Should parse");
    let result = cfg.build_registry();
    assert!(matches!(result, Err(RegistryError::DuplicateHost(name)) if name == "github"));
}

#[test]
fn test_second_host_on_builtin_domain_makes_urls_ambiguous() {
    let toml_str = r#"
[[hosts]]
name = "mirror"
domain = "github.com"
protocols = ["https"]
"#;
    let cfg: UserConfig = toml::from_str(toml_str).expect("Should parse");
    let registry = cfg.build_registry().expect("Should build registry");
    assert!(registry.resolve("https://github.com/foo/bar").is_none());
    // The mirror does not accept ssh, so these still resolve to github alone.
    assert!(registry.resolve("git@github.com:foo/bar.git").is_some());
}

#[test]
fn test_invalid_pathmatch_rejected() {
    let toml_str = r#"
[[hosts]]
name = "broken"
domain = "broken.example"
protocols = ["https"]
pathmatch = "^/(unclosed"
"#;
    let cfg: UserConfig = toml::from_str(toml_str).expect("Should parse");
    assert!(matches!(
        cfg.build_registry(),
        Err(RegistryError::InvalidPattern { .. })
    ));
}

#[test]
fn test_roundtrip_serialization() {
    let cfg: UserConfig = toml::from_str(SOURCEHUT).expect("Should parse");
    let serialized = toml::to_string(&cfg).expect("Should serialize");
    let deserialized: UserConfig = toml::from_str(&serialized).expect("Should deserialize");
    assert_eq!(cfg, deserialized);
}

#[test]
fn test_load_from_explicit_path() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, SOURCEHUT).expect("write config");

    let cfg = load_user_config(Some(config_path.as_path())).expect("load config");
    assert_eq!(cfg.hosts.len(), 1);
}

#[test]
fn test_explicit_path_must_exist() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("config.toml");
    let result = load_user_config(Some(missing.as_path()));
    assert!(matches!(result, Err(UserConfigError::Io(_))));
}

#[test]
fn test_bad_toml_reported() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[[hosts]\n").expect("write config");
    let result = load_user_config(Some(config_path.as_path()));
    assert!(matches!(result, Err(UserConfigError::Toml(_))));
}
