// EDMC Log Collector - app/controller.rs
//
// The collection run orchestrator: locate -> build -> reveal, with every
// failure caught at this boundary and translated into one fixed status
// message. Full diagnostic detail goes to the log, never to the label.

use crate::core::archive;
use crate::core::locator;
use crate::core::model::{CollectionReport, LogSourceSet, StatusMessage};
use crate::platform::fs::reveal_in_file_manager;
use crate::platform::paths::PlatformDirs;
use crate::util::error::CollectorError;
use chrono::Utc;
use semver::Version;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Status-reporting interface the controller talks to.
///
/// Injected at construction; the controller never holds a widget handle.
pub trait StatusSink: Send + Sync {
    /// Display `status`. Implementations own any revert-to-idle behaviour.
    fn set_status(&self, status: StatusMessage);
}

/// Orchestrates a single collection run end to end.
pub struct CollectionController {
    status: Arc<dyn StatusSink>,

    /// Resolved host version; normalisation happened at the integration
    /// boundary, so the ambiguous string-or-accessor shape never gets here.
    host_version: Version,

    dirs: PlatformDirs,
    output_path: PathBuf,

    /// When false, the file-manager reveal is skipped (headless runs, tests).
    reveal: bool,

    /// Serialises triggers: a run in flight makes further triggers no-ops,
    /// so two runs can never race on the fixed output path.
    in_flight: AtomicBool,
}

impl CollectionController {
    pub fn new(
        status: Arc<dyn StatusSink>,
        host_version: Version,
        dirs: PlatformDirs,
        output_path: PathBuf,
        reveal: bool,
    ) -> Self {
        Self {
            status,
            host_version,
            dirs,
            output_path,
            reveal,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Run one collection synchronously, blocking until it completes.
    ///
    /// Never propagates an error: every failure from any step is logged with
    /// its full chain and shown to the user as the single fixed failure
    /// message. Returns the report on success, `None` on failure or when a
    /// run was already in flight.
    pub fn run(&self) -> Option<CollectionReport> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            tracing::debug!("Collection already in flight; trigger ignored");
            return None;
        }

        self.status.set_status(StatusMessage::Collecting);
        tracing::debug!("Collecting log files...");

        let outcome = self.try_run();
        self.in_flight.store(false, Ordering::SeqCst);

        match outcome {
            Ok(report) => {
                tracing::info!(
                    archive = %report.archive_path.display(),
                    entries = report.entries_written,
                    "Logs collected"
                );
                self.status.set_status(StatusMessage::Collected);
                if self.reveal {
                    reveal_in_file_manager(&report.archive_path);
                }
                Some(report)
            }
            Err(e) => {
                log_error_chain(&e);
                self.status.set_status(StatusMessage::Failed);
                None
            }
        }
    }

    /// The fallible run body; `run()` is the only caller and the only place
    /// its errors are handled.
    fn try_run(&self) -> Result<CollectionReport, CollectorError> {
        let now = Utc::now();
        let sources =
            LogSourceSet::for_host_version(&self.host_version, &self.dirs.temp_dir, &self.dirs.home_dir);
        tracing::debug!(?sources, "Log sources resolved");

        let candidates = locator::locate(&sources, now)?;
        tracing::debug!(count = candidates.len(), "Got list of logs");

        let report = archive::build(&candidates, &self.output_path)?;
        Ok(report)
    }
}

/// Log an error with its complete source chain, stack-trace style.
fn log_error_chain(error: &CollectorError) {
    let mut chain = String::new();
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(error);
    while let Some(e) = current {
        if !chain.is_empty() {
            chain.push_str(" | caused by: ");
        }
        chain.push_str(&e.to_string());
        current = e.source();
    }
    tracing::error!(error = %chain, "Collection failed");
}

// =============================================================================
// Tests
// =============================================================================
