//! AppLens -- interactive analytics over an app-store dataset.
//!
//! Thin binary entry point. All logic lives in the `applens-core`
//! and `applens-gui` crates; this file parses the command line, loads the
//! dataset once, and hands it to the dashboard or the `report` command.

mod cli;
mod report;

use anyhow::Context;
use applens_core::loader::load_csv;
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialise structured logging. Logs go to stderr so `report --json`
    // output on stdout stays machine-readable.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("AppLens starting");

    // A dataset that cannot be loaded is fatal: no window, non-zero exit.
    let dataset = load_csv(&cli.data)
        .inspect_err(|e| tracing::error!("Failed to load dataset: {}", e))
        .with_context(|| format!("loading dataset {}", cli.data.display()))?;
    let dataset = Arc::new(dataset);

    match &cli.command {
        Some(Command::Report(args)) => report::run(&dataset, args, std::io::stdout().lock()),
        None => run_dashboard(dataset, &cli),
    }
}

fn run_dashboard(dataset: Arc<applens_core::model::Dataset>, cli: &Cli) -> anyhow::Result<()> {
    let icon = applens_gui::icon::generate_icon(64);

    // Build application state *before* opening the window so the first
    // rendered frame already has the dashboard computed.
    let source = cli.data.display().to_string();
    let state = applens_gui::AppState::new(dataset, source, cli.preset.into());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("AppLens -- App Analytics Dashboard")
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 560.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "AppLens",
        options,
        Box::new(|cc| Ok(Box::new(applens_gui::AppLensApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
