use anyhow::{Context, Result};
use md2page::{Config, Converter};
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` overrides the default level, which is `info` or `debug` with
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    // An already installed subscriber keeps receiving events
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        warn!("Log subscriber not installed: {}", e);
    }
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(config.verbose);
    config.validate().context("Invalid configuration")?;

    let output = config.output_path();

    let mut converter = Converter::new(config.extensions());
    if let Some(title) = &config.title {
        converter = converter.with_title(title);
    }

    converter
        .convert(&config.input, &output, config.css.as_deref())
        .with_context(|| format!("Failed to convert {}", config.input.display()))?;

    if config.open
        && let Err(e) = open::that(&output)
    {
        warn!("Failed to open {}: {}", output.display(), e);
    }

    Ok(())
}
