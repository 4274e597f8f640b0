use clap::Parser;
use color_eyre::eyre::Result;
use githost::logging::{init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use githost::{load_user_config, GitHostInfo, HostRegistry, RenderOptions, Representation};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// githost - Normalize git URLs for GitHub, Bitbucket, GitLab and gists
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Git URLs or owner/repo shorthands to resolve
    #[arg(required = true)]
    urls: Vec<String>,

    /// Representation to print: shortcut, https, sshurl, git, ssh, browse,
    /// docs, path, tarball, file or bugs (default: the input's own style)
    #[arg(short, long, value_parser = parse_format)]
    format: Option<Representation>,

    /// Print the resolved fields as JSON instead of a URL
    #[arg(long, conflicts_with = "format")]
    json: bool,

    /// Strip a leading "git+" from the printed URL
    #[arg(long)]
    no_git_plus: bool,

    /// File inside the repository, used with --format file
    #[arg(long)]
    file_path: Option<String>,

    /// Config file with additional hosts (default: ~/.githost/config.toml)
    #[arg(long, env = "GITHOST_CONFIG")]
    config: Option<PathBuf>,

    /// Enable JSON log format (for log aggregation)
    #[arg(long, env = "GITHOST_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Also write logs to this directory
    #[arg(long, env = "GITHOST_LOG_DIR")]
    log_dir: Option<String>,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "GITHOST_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,
}

fn parse_format(name: &str) -> Result<Representation, String> {
    Representation::templated(name).ok_or_else(|| {
        let names: Vec<&str> = Representation::TEMPLATED
            .iter()
            .map(Representation::as_str)
            .collect();
        format!("expected one of: {}", names.join(", "))
    })
}

fn print_info(
    registry: &HostRegistry,
    info: &GitHostInfo,
    args: &Args,
    options: &RenderOptions,
) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string(info)?);
        return Ok(());
    }
    let rendered = match &args.format {
        Some(representation) => registry.render(info, representation, options)?,
        None => registry.render_default(info, options)?,
    };
    println!("{rendered}");
    Ok(())
}

fn main() -> Result<ExitCode> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    let args = Args::parse();

    let log_dir = args.log_dir.as_deref().map(PathBuf::from);
    let log_config = LogConfig {
        log_dir: log_dir.clone(),
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..LogConfig::default()
    };
    if let Err(e) = init_logging(log_config) {
        eprintln!("Error: Failed to initialize logging: {e}");
        if let Some(dir) = &log_dir {
            eprintln!("Logs: {}", dir.join(LOG_FILENAME).display());
        }
        return Err(e);
    }

    let user_cfg = load_user_config(args.config.as_deref())?;
    let registry = user_cfg.build_registry()?;
    debug!("Registry has {} hosts", registry.hosts().len());

    let options = RenderOptions {
        no_git_plus: args.no_git_plus,
        path: args.file_path.clone(),
    };

    let mut failed = false;
    for url in &args.urls {
        let Some(info) = registry.resolve(url) else {
            eprintln!("githost: not a recognized git host URL: {url}");
            failed = true;
            continue;
        };
        if let Err(e) = print_info(&registry, &info, &args, &options) {
            eprintln!("githost: {url}: {e}");
            failed = true;
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
