use std::path::PathBuf;

use clap::Parser;
use grocer::{App, Overrides, init_logging};

#[derive(Parser, Debug)]
#[command(name = "grocer")]
#[command(about = "A terminal shopping list manager")]
struct Args {
    /// Path to the data directory (default: ~/.grocer/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Report unknown list or item ids instead of ignoring them
    #[arg(long)]
    strict: bool,

    /// Match catalog names ignoring case and surrounding whitespace
    #[arg(long)]
    ignore_case: bool,

    /// Load lists from a JSON snapshot before starting
    #[arg(long, value_name = "PATH")]
    import: Option<PathBuf>,

    /// Write lists to a JSON snapshot and exit without starting the UI
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args
        .data_dir
        .unwrap_or_else(grocer::data::storage::DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let overrides = Overrides {
        strict: args.strict,
        ignore_case: args.ignore_case,
    };
    let mut app = App::with_data_dir(data_dir, overrides);

    if let Some(path) = &args.import {
        app.import_json(path)?;
    }

    if let Some(path) = &args.export {
        app.export_json(path)?;
        tracing::info!("Exported lists to {}", path.display());
        return Ok(());
    }

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
