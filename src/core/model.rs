// EDMC Log Collector - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};
use semver::Version;
use std::path::{Path, PathBuf};

use crate::core::version::uses_legacy_layout;
use crate::util::constants;

// =============================================================================
// Log file candidate (output of discovery)
// =============================================================================

/// A file that qualified for collection: its path plus the metadata the
/// recency filter looked at. Produced by `locator::locate`, consumed by
/// `archive::build`, discarded after the run.
#[derive(Debug, Clone)]
pub struct LogFileCandidate {
    /// Full path to the file.
    pub path: PathBuf,

    /// Last modification timestamp. `None` for the legacy unconditional log
    /// file, which is collected without ever reading its metadata.
    pub modified: Option<DateTime<Utc>>,

    /// File size in bytes at discovery time (0 when metadata was not read).
    pub size: u64,
}

// =============================================================================
// Log source set
// =============================================================================

/// The resolved set of locations to scan, determined once per run from the
/// host version.
///
/// EDMC moved its log files between releases: before
/// `constants::MODERN_LAYOUT_VERSION` they lived under the system temp
/// directory, afterwards under the per-user AppData tree. The game journal
/// directory is the same in both layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSourceSet {
    /// Single log file collected unconditionally, exempt from the recency
    /// window. Present only on the legacy layout.
    pub unconditional_file: Option<PathBuf>,

    /// Host-application log directory, mtime-filtered.
    pub host_log_dir: PathBuf,

    /// Game journal directory, filename-pattern- and mtime-filtered.
    pub journal_dir: PathBuf,
}

impl LogSourceSet {
    /// Resolve the source set for `host_version`.
    ///
    /// `temp_dir` and `home_dir` are passed in rather than read from the
    /// environment so tests can point the whole run at a fixture tree
    /// (see `platform::paths::PlatformDirs` for the real values).
    pub fn for_host_version(host_version: &Version, temp_dir: &Path, home_dir: &Path) -> Self {
        if uses_legacy_layout(host_version) {
            Self {
                unconditional_file: Some(temp_dir.join(constants::LEGACY_LOG_FILE_NAME)),
                host_log_dir: temp_dir.join(constants::LEGACY_LOG_DIR_NAME),
                journal_dir: join_components(home_dir, constants::JOURNAL_DIR),
            }
        } else {
            Self {
                unconditional_file: None,
                host_log_dir: join_components(home_dir, constants::MODERN_LOG_DIR),
                journal_dir: join_components(home_dir, constants::JOURNAL_DIR),
            }
        }
    }
}

fn join_components(base: &Path, components: &[&str]) -> PathBuf {
    components.iter().fold(base.to_path_buf(), |p, c| p.join(c))
}

// =============================================================================
// Collection report
// =============================================================================

/// Summary of a successful collection run, for status display and tests.
#[derive(Debug, Clone)]
pub struct CollectionReport {
    /// Where the archive was written.
    pub archive_path: PathBuf,

    /// Number of entries in the finished archive (after name dedup).
    pub entries_written: usize,
}

// =============================================================================
// Status message
// =============================================================================

/// User-facing run state shown on the status label.
///
/// The set is closed and the labels are fixed; no per-failure-kind detail
/// reaches the user (full detail goes to the log instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    /// Idle, waiting for a trigger. The label reverts here on its own.
    Ready,

    /// A collection run is in flight.
    Collecting,

    /// The last run finished and the archive was written.
    Collected,

    /// The last run failed; directs the user to the support contact.
    Failed,
}

impl StatusMessage {
    /// Fixed display text for this state.
    pub fn label(&self) -> &'static str {
        match self {
            StatusMessage::Ready => "Ready to collect.",
            StatusMessage::Collecting => "Collecting logs...",
            StatusMessage::Collected => "Logs collected.",
            StatusMessage::Failed => "Collection failed. Contact @elcylite on Discord.",
        }
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_legacy_source_set_layout() {
        let v = Version::new(5, 11, 3);
        let set = LogSourceSet::for_host_version(&v, Path::new("/tmp"), Path::new("/home/cmdr"));

        assert_eq!(
            set.unconditional_file.as_deref(),
            Some(Path::new("/tmp/EDMarketConnector.log"))
        );
        assert_eq!(set.host_log_dir, Path::new("/tmp/EDMarketConnector"));
        assert_eq!(
            set.journal_dir,
            Path::new("/home/cmdr/Saved Games/Frontier Developments/Elite Dangerous")
        );
    }

    #[test]
    fn test_modern_source_set_layout() {
        let v = Version::new(5, 12, 0);
        let set = LogSourceSet::for_host_version(&v, Path::new("/tmp"), Path::new("/home/cmdr"));

        assert!(set.unconditional_file.is_none());
        assert_eq!(
            set.host_log_dir,
            Path::new("/home/cmdr/AppData/Local/EDMarketConnector/logs")
        );
        assert_eq!(
            set.journal_dir,
            Path::new("/home/cmdr/Saved Games/Frontier Developments/Elite Dangerous")
        );
    }

    #[test]
    fn test_status_labels_are_fixed() {
        assert_eq!(StatusMessage::Ready.label(), "Ready to collect.");
        assert!(StatusMessage::Failed.label().contains("@elcylite"));
    }
}
