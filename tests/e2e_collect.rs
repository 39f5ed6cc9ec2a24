// EDMC Log Collector - tests/e2e_collect.rs
//
// End-to-end tests for the collection pipeline.
//
// These tests exercise the real filesystem, real walkdir enumeration, real
// mtime filtering, and a real ZIP writer and reader -- no mocks, no stubs.
// Each test builds a fixture tree shaped like a user machine (temp dir +
// home dir), points a controller at it, and reads the finished archive back.

use chrono::{Duration, Utc};
use edmc_logcollector::app::controller::CollectionController;
use edmc_logcollector::core::model::StatusMessage;
use edmc_logcollector::core::version::{resolve_host_version, HostVersionIndicator};
use edmc_logcollector::platform::paths::PlatformDirs;
use edmc_logcollector::ui::status::StatusLabel;
use filetime::{set_file_mtime, FileTime};
use semver::Version;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

/// A fake user machine: its own temp dir and home dir.
struct Machine {
    temp: TempDir,
    home: TempDir,
}

impl Machine {
    fn new() -> Self {
        Self {
            temp: tempfile::tempdir().expect("tempdir"),
            home: tempfile::tempdir().expect("homedir"),
        }
    }

    fn dirs(&self) -> PlatformDirs {
        PlatformDirs {
            temp_dir: self.temp.path().to_path_buf(),
            home_dir: self.home.path().to_path_buf(),
        }
    }

    fn modern_log_dir(&self) -> PathBuf {
        self.home
            .path()
            .join("AppData")
            .join("Local")
            .join("EDMarketConnector")
            .join("logs")
    }

    fn journal_dir(&self) -> PathBuf {
        self.home
            .path()
            .join("Saved Games")
            .join("Frontier Developments")
            .join("Elite Dangerous")
    }

    /// Controller over this machine, reporting to `status`, reveal disabled.
    fn controller(&self, version: Version, status: &StatusLabel) -> CollectionController {
        let dirs = self.dirs();
        let output = dirs.output_archive_path();
        CollectionController::new(Arc::new(status.clone()), version, dirs, output, false)
    }
}

/// Write a file and backdate its mtime by `hours_ago`.
fn write_aged(dir: &Path, name: &str, hours_ago: i64) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("content of {name}")).expect("write fixture");
    let mtime = Utc::now() - Duration::hours(hours_ago);
    set_file_mtime(&path, FileTime::from_unix_time(mtime.timestamp(), 0)).expect("set mtime");
    path
}

/// Entry names of the finished archive, sorted for stable assertions.
fn archive_entries(path: &Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(fs::File::open(path).expect("open archive"))
        .expect("read archive");
    let mut names: Vec<String> = archive.file_names().map(String::from).collect();
    names.sort();
    names
}

// =============================================================================
// Modern layout E2E
// =============================================================================

/// A modern-layout run collects exactly the recent host log and the recent
/// journal, skips the stale host log, and ends on the success status.
#[test]
fn e2e_modern_run_collects_recent_files_only() {
    let machine = Machine::new();
    let logs = machine.modern_log_dir();
    let journal = machine.journal_dir();
    fs::create_dir_all(&logs).unwrap();
    fs::create_dir_all(&journal).unwrap();

    write_aged(&logs, "EDMarketConnector-debug.log", 1);
    write_aged(&logs, "EDMarketConnector-old.log", 48);
    write_aged(&journal, "Journal.2024-06-01T180000.01.log", 2);

    let status = StatusLabel::new();
    let controller = machine.controller(Version::new(5, 12, 0), &status);

    let report = controller.run().expect("collection succeeds");

    assert_eq!(report.entries_written, 2);
    assert_eq!(
        archive_entries(&report.archive_path),
        vec![
            "EDMarketConnector-debug.log".to_string(),
            "Journal.2024-06-01T180000.01.log".to_string(),
        ]
    );
    assert_eq!(status.current(), StatusMessage::Collected);
}

/// The archive lands at the fixed output path under the machine's temp dir.
#[test]
fn e2e_archive_lands_at_fixed_path() {
    let machine = Machine::new();
    fs::create_dir_all(machine.modern_log_dir()).unwrap();
    fs::create_dir_all(machine.journal_dir()).unwrap();

    let status = StatusLabel::new();
    let controller = machine.controller(Version::new(6, 0, 0), &status);
    let report = controller.run().expect("collection succeeds");

    assert_eq!(
        report.archive_path,
        machine
            .temp
            .path()
            .join("EDMC-LogCollector")
            .join("Triumvirate-logs.zip")
    );
    assert!(report.archive_path.exists());
}

/// Running twice replaces the archive; entries from the first run do not
/// survive into the second.
#[test]
fn e2e_second_run_replaces_archive() {
    let machine = Machine::new();
    let logs = machine.modern_log_dir();
    fs::create_dir_all(&logs).unwrap();
    fs::create_dir_all(machine.journal_dir()).unwrap();

    let first = write_aged(&logs, "first.log", 1);

    let status = StatusLabel::new();
    let controller = machine.controller(Version::new(5, 12, 0), &status);
    controller.run().expect("first run succeeds");

    fs::remove_file(&first).unwrap();
    write_aged(&logs, "second.log", 1);

    let report = controller.run().expect("second run succeeds");
    assert_eq!(
        archive_entries(&report.archive_path),
        vec!["second.log".to_string()]
    );
}

// =============================================================================
// Legacy layout E2E
// =============================================================================

/// A legacy-layout run includes the unconditional temp-dir log regardless of
/// its age, plus recent files from the legacy debug directory.
#[test]
fn e2e_legacy_run_includes_unconditional_log() {
    let machine = Machine::new();
    let debug_dir = machine.temp.path().join("EDMarketConnector");
    fs::create_dir_all(&debug_dir).unwrap();
    fs::create_dir_all(machine.journal_dir()).unwrap();

    // A week old: far outside the recency window, still collected.
    write_aged(machine.temp.path(), "EDMarketConnector.log", 168);
    write_aged(&debug_dir, "debug-1.log", 3);
    write_aged(&debug_dir, "debug-stale.log", 30);

    let status = StatusLabel::new();
    let controller = machine.controller(Version::new(5, 11, 0), &status);
    let report = controller.run().expect("collection succeeds");

    assert_eq!(
        archive_entries(&report.archive_path),
        vec!["EDMarketConnector.log".to_string(), "debug-1.log".to_string()]
    );
    assert_eq!(status.current(), StatusMessage::Collected);
}

// =============================================================================
// Failure paths E2E
// =============================================================================

/// A missing journal directory fails the whole run: failure status, no
/// archive, nothing half-collected presented as success.
#[test]
fn e2e_missing_journal_dir_fails_run() {
    let machine = Machine::new();
    fs::create_dir_all(machine.modern_log_dir()).unwrap();
    // journal dir deliberately absent

    let status = StatusLabel::new();
    let controller = machine.controller(Version::new(5, 12, 0), &status);

    assert!(controller.run().is_none());
    assert_eq!(status.current(), StatusMessage::Failed);
    assert!(!machine.dirs().output_archive_path().exists());
}

/// An unparseable host-version indicator is rejected at the integration
/// boundary, before any controller exists; no archive can be produced.
#[test]
fn e2e_bad_host_version_never_reaches_collection() {
    let machine = Machine::new();

    let indicator = HostVersionIndicator::Literal("definitely-not-semver".into());
    let resolved = resolve_host_version(&indicator);
    assert!(resolved.is_err(), "indicator must be rejected");

    assert!(
        !machine.dirs().output_archive_path().exists(),
        "no archive may exist for a run that never started"
    );
}

/// The accessor shape resolves like a literal and drives a full run.
#[test]
fn e2e_accessor_version_drives_modern_run() {
    let machine = Machine::new();
    fs::create_dir_all(machine.modern_log_dir()).unwrap();
    fs::create_dir_all(machine.journal_dir()).unwrap();
    write_aged(&machine.modern_log_dir(), "app.log", 1);

    let indicator = HostVersionIndicator::Accessor(Box::new(|| "5.12.3".to_string()));
    let version = resolve_host_version(&indicator).expect("accessor resolves");

    let status = StatusLabel::new();
    let controller = machine.controller(version, &status);
    let report = controller.run().expect("collection succeeds");

    assert_eq!(archive_entries(&report.archive_path), vec!["app.log".to_string()]);
}
