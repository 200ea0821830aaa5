mod config;
mod error;
mod grid;
mod inspect;
mod tui;

use std::{fs, io, path::PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flowgrid")]
#[command(about = "Virtualized flow-layout grid with keyboard navigation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the grid in the terminal
    Run(tui::RunArgs),
    /// Print the layout and a navigation trace as JSON
    Inspect(inspect::InspectArgs),
}

fn log_path() -> Option<PathBuf> {
    let dir = dirs::cache_dir()?.join("flowgrid");
    fs::create_dir_all(&dir).ok()?;
    Some(dir.join("flowgrid.log"))
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn init_tracing(command: &Commands) {
    match command {
        // The terminal belongs to the UI, so logs go to a file.
        Commands::Run(_) => {
            let Some(log_file) = log_path().and_then(|path| fs::File::create(path).ok()) else {
                return;
            };
            tracing_subscriber::fmt()
                .with_env_filter(env_filter("flowgrid=info"))
                .with_writer(log_file)
                .with_ansi(false)
                .with_target(false)
                .init();
        }
        Commands::Inspect(_) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter("flowgrid=info"))
                .with_writer(io::stderr)
                .with_target(false)
                .init();
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.command);

    let result = match &cli.command {
        Commands::Run(args) => tui::run(args).await,
        Commands::Inspect(args) => inspect::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
