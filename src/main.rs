// src/main.rs
use eframe::egui;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use deepsea_console::config::Settings;
use deepsea_console::file::{self, catalog::CatalogFileHandler, FileHandler};
use deepsea_console::{ConsoleApp, ConsoleState};

#[derive(Debug, Parser)]
#[command(name = "deepsea-console", about = "Operator console for the analysis modules")]
struct Cli {
    /// Settings file layered over the defaults
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory that /assets references resolve against
    #[arg(long, value_name = "DIR")]
    asset_root: Option<PathBuf>,

    /// Write the active module catalog as RON and exit
    #[arg(long, value_name = "PATH")]
    export_catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(root) = cli.asset_root {
        settings.asset_root = root;
    }

    init_tracing(&settings.log_filter);

    let catalog = file::load_catalog(&settings)?;
    info!(modules = catalog.modules().len(), "module catalog loaded");

    if let Some(path) = cli.export_catalog {
        CatalogFileHandler::new().save(&catalog, &path)?;
        info!(path = %path.display(), "catalog exported");
        return Ok(());
    }

    let state = ConsoleState::new(Arc::new(catalog));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title(settings.title.clone()),
        ..Default::default()
    };

    let app_name = settings.title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Box::new(ConsoleApp::new(state, &settings))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
