//! Kafka console UI settings resolver — entry point.
//!
//! Resolves the `ui.*` settings exactly as the console does at startup and
//! prints the result, so operators can check a deployment's branding and menu
//! configuration before rolling it out.
//!
//! # Usage
//!
//! ```text
//! kui-settings [OPTIONS]
//!
//! Options:
//!   --config <PATH>       .toml or .properties config file [env: KUI_CONFIG]
//!   --no-env              Ignore UI_* environment variables
//!   --set <KEY=VALUE>     Override one property (repeatable)
//!   --format <FORMAT>     json | properties [default: json]
//! ```
//!
//! Logs go to stderr (level from `RUST_LOG`, default `info`); stdout carries
//! only the rendered settings.  A value that cannot be bound aborts with a
//! non-zero exit status and a message naming the offending key.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use kui_settings::application::{render, OutputFormat};
use kui_settings::infrastructure::env_source::process_env_vars;
use kui_settings::infrastructure::{load_settings, StartupOptions};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Output format accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Json,
    Properties,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Properties => OutputFormat::Properties,
        }
    }
}

/// Resolve and print the Kafka console UI settings.
#[derive(Debug, Parser)]
#[command(
    name = "kui-settings",
    about = "Resolves the Kafka console UI settings from file, environment and overrides",
    version
)]
struct Cli {
    /// Config file to read (`.toml` or `.properties`).
    #[arg(long = "config", value_name = "PATH", env = "KUI_CONFIG")]
    config: Option<PathBuf>,

    /// Do not read `UI_*` environment variables.
    #[arg(long)]
    no_env: bool,

    /// Override a single property, e.g. `--set ui.title="Acme Kafka"`.
    ///
    /// Highest precedence; may be given several times.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatArg::Json)]
    format: FormatArg,
}

impl Cli {
    /// Converts the parsed arguments into [`StartupOptions`].
    fn startup_options(&self) -> StartupOptions {
        StartupOptions {
            config_file: self.config.clone(),
            read_env: !self.no_env,
            overrides: self.set.clone(),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let options = cli.startup_options();

    info!(
        "resolving ui settings (config={:?}, env={}, overrides={})",
        options.config_file,
        options.read_env,
        options.overrides.len()
    );

    let store =
        load_settings(&options, process_env_vars()).context("failed to resolve UI settings")?;

    let output = render(store.settings(), cli.format.into()).context("failed to render UI settings")?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
