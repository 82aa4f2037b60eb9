use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use recently::{render, source, Config};

#[derive(Parser)]
#[command(name = "recently", about = "Read GNOME recently-used.xbel bookmark files")]
struct Cli {
    /// User that owns the files, attached to every bookmark record.
    #[arg(long, short)]
    user: String,

    /// Config file to layer over the defaults (default: ~/.config/recently/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at debug level, including full parse failure details.
    #[arg(long)]
    debug: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// recently-used.xbel files to read.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let default_level = if cli.debug { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .init();
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for path in &cli.files {
        let content = match source::load(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("{err}, skipping");
                continue;
            }
        };
        let source_path = path.display().to_string();
        tracing::debug!(source = %source_path, bytes = content.len(), "extracting");
        for entry in recently::extract(&content, &cli.user, &source_path) {
            if let Some(line) = render::render_entry(&entry, &config.output) {
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(())
}
