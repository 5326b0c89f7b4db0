use std::fs::File;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atelier::{fixture, summary, ui};

#[derive(Parser)]
#[command(name = "atelier")]
#[command(about = "Interactive terminal browser for a research portfolio catalogue")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalogue in the terminal UI
    Browse {
        /// Catalogue fixture to load instead of the embedded one
        #[arg(long)]
        fixture: Option<PathBuf>,

        /// Skip timed fade/stagger transitions
        #[arg(long)]
        reduced_motion: bool,

        /// Log destination (defaults to atelier.log in the user data dir)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
    /// Validate a catalogue fixture and print its summary tree
    Validate {
        /// Catalogue fixture to check instead of the embedded one
        #[arg(long)]
        fixture: Option<PathBuf>,
    },
}

/// Initialize tracing. While the UI owns the terminal, logs go to a file;
/// otherwise stderr is fine.
fn init_tracing(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "atelier=debug".into()),
    );

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::sync::Mutex::new(File::create(path)?);
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file))
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
    Ok(())
}

/// Default log location under the user data dir.
fn default_log_path() -> anyhow::Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "atelier")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(dirs.data_dir().join("atelier.log"))
}

fn browse(
    fixture_path: Option<PathBuf>,
    reduced_motion: bool,
    log_file: Option<PathBuf>,
) -> anyhow::Result<()> {
    let log_path = match log_file {
        Some(path) => path,
        None => default_log_path()?,
    };
    init_tracing(Some(&log_path))?;

    let catalogue = fixture::load(fixture_path.as_deref())?;
    tracing::info!(
        collections = catalogue.collections().len(),
        certifications = catalogue.certifications().len(),
        "catalogue loaded"
    );

    ui::run(catalogue, reduced_motion)
}

fn validate(fixture_path: Option<PathBuf>) -> anyhow::Result<()> {
    init_tracing(None)?;

    let catalogue = fixture::load(fixture_path.as_deref())?;
    print!("{}", summary::render_catalogue(&catalogue));

    let violations = catalogue.validate();
    for violation in &violations {
        println!("warning: {violation}");
    }
    let fatal = violations.iter().filter(|v| v.is_fatal()).count();
    if fatal > 0 {
        anyhow::bail!("{fatal} fatal invariant violation(s)");
    }

    println!(
        "ok: {} collection(s), {} certification(s)",
        catalogue.collections().len(),
        catalogue.certifications().len()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Browse {
            fixture,
            reduced_motion,
            log_file,
        }) => browse(fixture, reduced_motion, log_file),
        Some(Commands::Validate { fixture }) => validate(fixture),
        // Default: browse the embedded catalogue.
        None => browse(None, false, None),
    }
}
