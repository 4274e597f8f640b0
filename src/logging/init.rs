use color_eyre::eyre::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    registry::Registry,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};
use super::{LogConfig, LOG_FILENAME};
type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;
/// Initialize the logging system with the given configuration.
pub fn init_logging(config: LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("githost={}", config.log_level)));
    let mut layers: Vec<BoxedLayer> = vec![stderr_layer(config.json_format)];
    if let Some(log_dir) = &config.log_dir {
        std::fs::create_dir_all(log_dir)?;
        let file_appender = RollingFileAppender::new(config.rotation, log_dir, LOG_FILENAME);
        layers.push(file_layer(config.json_format, file_appender));
    }
    tracing_subscriber::registry()
        .with(layers).with(env_filter).with(ErrorLayer::default()).init();
    Ok(())
}
fn stderr_layer(json_format: bool) -> BoxedLayer {
    if json_format {
        fmt::layer()
            .json().with_writer(std::io::stderr).with_current_span(true).with_target(true)
            .boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).with_target(false).boxed()
    }
}
fn file_layer(json_format: bool, file_appender: RollingFileAppender) -> BoxedLayer {
    if json_format {
        fmt::layer()
            .json().with_writer(file_appender).with_span_events(FmtSpan::CLOSE)
            .with_current_span(true).with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(file_appender).with_span_events(FmtSpan::CLOSE)
            .with_target(true).with_ansi(false)
            .boxed()
    }
}
/// Parse rotation period from string.
#[must_use]
pub fn parse_rotation(s: &str) -> Rotation {
    match s.to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}
