use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::AdminGuiApp;

#[derive(Parser, Debug)]
#[command(about = "Member admin panel")]
struct Args {
    /// TOML settings file (defaults to ./admin_panel.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Members feed URL, overriding config and environment.
    #[arg(long)]
    members_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings =
        admin_core::load_settings(args.config.as_deref()).context("failed to load settings")?;
    settings.apply_cli_overrides(args.members_url);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    tracing::info!(members_url = %settings.members_url, "starting admin panel");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Admin UI")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Admin UI",
        options,
        Box::new(|_cc| Ok(Box::new(AdminGuiApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("admin panel window failed: {err}"))
}
