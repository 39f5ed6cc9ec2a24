// EDMC Log Collector - platform/paths.rs
//
// Resolution of the real platform directories the collector reads from and
// writes to. Core code never touches the environment; it receives these
// values (or test fixtures shaped like them) from here.

use crate::util::constants;
use directories::UserDirs;
use std::path::PathBuf;

/// The two directory roots every collection run hangs off: the system temp
/// directory and the user home directory.
///
/// Constructible directly in tests to point a run at a fixture tree.
#[derive(Debug, Clone)]
pub struct PlatformDirs {
    /// System temp directory (legacy log sources, archive output).
    pub temp_dir: PathBuf,

    /// User home directory (modern log sources, game journals).
    pub home_dir: PathBuf,
}

impl PlatformDirs {
    /// Resolve the real platform directories.
    ///
    /// Falls back to the current directory for home if the platform cannot
    /// name one; discovery will then fail with a clear missing-directory
    /// error rather than a panic.
    pub fn resolve() -> Self {
        let temp_dir = std::env::temp_dir();
        let home_dir = match UserDirs::new() {
            Some(dirs) => dirs.home_dir().to_path_buf(),
            None => {
                tracing::warn!("Could not determine home directory, using current directory");
                PathBuf::from(".")
            }
        };

        tracing::debug!(
            temp = %temp_dir.display(),
            home = %home_dir.display(),
            "Platform directories resolved"
        );

        Self { temp_dir, home_dir }
    }

    /// The fixed archive location: `<temp>/EDMC-LogCollector/Triumvirate-logs.zip`.
    pub fn output_archive_path(&self) -> PathBuf {
        self.temp_dir
            .join(constants::OUTPUT_DIR_NAME)
            .join(constants::OUTPUT_ARCHIVE_NAME)
    }
}
