// EDMC Log Collector - util/constants.rs
//
// Single source of truth for all named constants, paths, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "EDMC Log Collector";

/// Application identifier used for config directories.
pub const APP_ID: &str = "EDMC-LogCollector";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Host version
// =============================================================================

/// First EDMC release that moved its logs out of the temp directory and into
/// the per-user AppData layout. Versions below this use the legacy layout.
pub const MODERN_LAYOUT_VERSION: &str = "5.12.0";

/// Environment variable consulted by the default host-version accessor.
pub const HOST_VERSION_ENV: &str = "EDMC_VERSION";

// =============================================================================
// Log sources
// =============================================================================

/// How far back a file's mtime may lie for it to count as a recent log.
pub const RECENCY_WINDOW_HOURS: i64 = 24;

/// Legacy single log file directly under the system temp directory.
/// Always collected on the legacy path, exempt from the recency window.
pub const LEGACY_LOG_FILE_NAME: &str = "EDMarketConnector.log";

/// Legacy debug-log directory under the system temp directory.
pub const LEGACY_LOG_DIR_NAME: &str = "EDMarketConnector";

/// Modern log directory components under the user home directory.
pub const MODERN_LOG_DIR: &[&str] = &["AppData", "Local", "EDMarketConnector", "logs"];

/// Game journal directory components under the user home directory.
pub const JOURNAL_DIR: &[&str] = &["Saved Games", "Frontier Developments", "Elite Dangerous"];

/// Journal filename pattern: `Journal.20YY-MM-DDThhmmss.NN.log`, exact case.
pub const JOURNAL_FILE_PATTERN: &str = r"^Journal\.20\d{2}-\d{2}-\d{2}T\d{6}\.\d{2}\.log$";

// =============================================================================
// Archive output
// =============================================================================

/// Output directory created under the system temp directory.
pub const OUTPUT_DIR_NAME: &str = "EDMC-LogCollector";

/// Fixed archive filename inside the output directory.
pub const OUTPUT_ARCHIVE_NAME: &str = "Triumvirate-logs.zip";

// =============================================================================
// UI
// =============================================================================

/// Seconds an informational status message stays visible before the label
/// reverts to the ready state.
pub const STATUS_REVERT_SECS: u64 = 30;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
