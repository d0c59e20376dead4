//! atomscope - A terminal devtools panel for atom-based reactive state graphs
//!
//! Binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use atomscope_core::prelude::*;

/// A terminal devtools panel for atom-based reactive state graphs
#[derive(Parser, Debug)]
#[command(name = "atomscope")]
#[command(about = "Inspect an exported atom state snapshot", long_about = None)]
struct Args {
    /// Path to the snapshot JSON file
    #[arg(value_name = "SNAPSHOT")]
    snapshot: PathBuf,

    /// Start with nested atom references resolved to their values
    #[arg(long)]
    deep: bool,

    /// Disable live reload when the snapshot file changes
    #[arg(long)]
    no_watch: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("atomscope: {e}");
        if let Ok(log_file) = atomscope_core::logging::get_current_log_file() {
            eprintln!("see {} for details", log_file.display());
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(args: Args) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, since the TUI owns stdout
    atomscope_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("atomscope starting");
    info!("Snapshot: {}", args.snapshot.display());
    info!("═══════════════════════════════════════════════════════");

    let mut settings = atomscope_app::config::load_settings(&args.snapshot);
    if args.deep {
        settings.display.parse_nested_atoms = true;
    }
    if args.no_watch {
        settings.watcher.enabled = false;
    }

    let result = atomscope_tui::run(&args.snapshot, settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("atomscope exiting");
    result
}
