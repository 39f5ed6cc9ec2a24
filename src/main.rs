// EDMC Log Collector - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading
// 3. Logging initialisation (debug mode support)
// 4. Host-version resolution
// 5. eframe GUI launch (or a single headless collection with --collect)

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use edmc_logcollector::app;
pub use edmc_logcollector::core;
pub use edmc_logcollector::platform;
pub use edmc_logcollector::ui;
pub use edmc_logcollector::util;

use crate::app::controller::CollectionController;
use crate::core::version::{resolve_host_version, HostVersionIndicator};
use crate::platform::paths::PlatformDirs;
use crate::ui::status::StatusLabel;
use clap::Parser;
use std::sync::Arc;

/// EDMC Log Collector - bundle recent EDMC and journal logs for support.
///
/// Click the button (or pass --collect) to gather every log file modified in
/// the last 24 hours into a single ZIP under the system temp directory.
#[derive(Parser, Debug)]
#[command(name = "EDMC Log Collector", version, about)]
struct Cli {
    /// Host application (EDMC) version, e.g. "5.12.0".
    /// Overrides the EDMC_VERSION environment variable.
    #[arg(long = "host-version")]
    host_version: Option<String>,

    /// Collect once and exit without launching the GUI.
    /// Prints the archive path on success.
    #[arg(long = "collect")]
    collect: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging is initialised so its [logging] level can
    // feed the filter; its warnings are replayed right after init.
    let (config, config_warnings) = match platform::config::config_dir() {
        Some(dir) => platform::config::load_config(&dir),
        None => (platform::config::AppConfig::default(), Vec::new()),
    };

    util::logging::init(cli.debug, config.log_level.as_deref());

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "EDMC Log Collector starting"
    );

    // Normalise the host-version indicator exactly once, here at the
    // integration boundary. A CLI value is a literal; otherwise an accessor
    // consults the environment and falls back to the modern layout version.
    let indicator = match cli.host_version {
        Some(v) => HostVersionIndicator::Literal(v),
        None => HostVersionIndicator::Accessor(Box::new(|| {
            std::env::var(util::constants::HOST_VERSION_ENV)
                .unwrap_or_else(|_| util::constants::MODERN_LAYOUT_VERSION.to_string())
        })),
    };

    let host_version = match resolve_host_version(&indicator) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(error = %e, "Host version resolution failed");
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };
    tracing::debug!(%host_version, "Host version resolved");

    let dirs = PlatformDirs::resolve();
    let output_path = dirs.output_archive_path();
    let status = StatusLabel::new();
    let controller = CollectionController::new(
        Arc::new(status.clone()),
        host_version,
        dirs,
        output_path,
        // Headless runs skip the file-manager reveal; scripts want the path
        // on stdout, not a window.
        !cli.collect,
    );

    if cli.collect {
        match controller.run() {
            Some(report) => println!("{}", report.archive_path.display()),
            None => std::process::exit(1),
        }
        return;
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([380.0, 170.0])
            .with_min_inner_size([300.0, 130.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::CollectorApp::new(controller, status, config.dark_mode)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch EDMC Log Collector GUI: {e}");
        std::process::exit(1);
    }
}
