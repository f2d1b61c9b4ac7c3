use std::env;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use modmine_core::{Config, MineError, ModuleMiner};
use tracing::{debug, Level};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "modmine", version)]
#[command(about = "Mine documentation metadata from a Puppet module without running it", long_about = None)]
struct Cli {
    /// Module root containing Manifest, types/ and providers/
    path: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    debug!(path = %cli.path.display(), "modmine v{} starting", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Mine the module and render it; nothing reaches stdout unless this succeeds.
fn run(cli: &Cli) -> Result<String, MineError> {
    let config = Config::load()?;
    debug!(?config, "Configuration loaded");

    let document = ModuleMiner::with_config(&cli.path, &config).mine()?;
    document.to_json(config.output.pretty)
}

/// Logs go to stderr; stdout carries only the JSON document.
fn init_logging() {
    let mut filter = EnvFilter::from_default_env();

    if env::var("RUST_LOG").is_err() {
        let level = env::var("MODMINE_LOG_LEVEL")
            .map(|s| parse_level(&s))
            .unwrap_or(Level::WARN);
        for directive in [format!("modmine_core={}", level), format!("modmine_cli={}", level)] {
            if let Ok(directive) = directive.parse::<Directive>() {
                filter = filter.add_directive(directive);
            }
        }
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to WARN. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::WARN
        }
    }
}
