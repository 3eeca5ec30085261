//! Bootstrap installer for the grove native executable.
//!
//! Downloads the platform-specific artifact published for the launcher's own
//! release version, decompresses it, and installs it next to the launcher.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use grove_core::paths;
use grove_installer::Installer;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Release version bundled with this launcher, read from package metadata.
const RELEASE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "grove-install")]
#[command(about = "Download and install the grove executable for this platform")]
struct Cli {
    /// Release version to install instead of the bundled one.
    #[arg(long)]
    version: Option<String>,

    /// Install directory (defaults to the launcher's own directory).
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Print the install result as JSON.
    #[arg(long)]
    json: bool,

    /// Set logging level.
    #[arg(short = 'l', long, default_value = "warn", value_enum)]
    level: LogLevel,
}

/// Log level options for the CLI.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.level);

    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> grove_core::Result<()> {
    let install_dir = match cli.dir {
        Some(dir) => dir,
        None => paths::install_dir()?,
    };
    let version = cli.version.as_deref().unwrap_or(RELEASE_VERSION);

    let installer = Installer::new(install_dir);
    let installed = installer.install(version).await?;

    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "path": installed.path,
                "version": installed.version,
                "platform": installed.platform,
                "sha256": installed.sha256,
            })
        );
    } else {
        println!(
            "Installed grove {} to {}",
            installed.version,
            installed.path.display()
        );
    }
    Ok(())
}

/// Initialize tracing to stderr. `RUST_LOG` overrides the `--level` flag.
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "grove_installer={level},grove_core={level}",
            level = level.as_str()
        ))
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
