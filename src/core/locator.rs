// EDMC Log Collector - core/locator.rs
//
// Log file discovery: enumerate the resolved source directories and keep
// what passes the recency filter.
//
// Uses `walkdir` capped at depth 1; the sources are flat directories and
// nothing here ever recurses. Only file *metadata* (mtime) is read, never
// file *contents*; content access is owned by the archive builder.
//
// Error policy: a missing or unreadable source directory is a hard failure
// for the whole run, never "zero logs found". Per-entry metadata failures
// abort the run as well; there is no partial-success path.

use crate::core::model::{LogFileCandidate, LogSourceSet};
use crate::util::constants;
use crate::util::error::LocateError;
use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Discover every log file that qualifies for collection.
///
/// `now` is captured once by the caller and shared across all recency
/// comparisons in the run, so a slow enumeration cannot shift the window.
///
/// Returned order is enumeration order: the legacy unconditional file (if
/// any) first, then the host log directory, then the journal directory.
/// No sorting is guaranteed.
pub fn locate(
    sources: &LogSourceSet,
    now: DateTime<Utc>,
) -> Result<Vec<LogFileCandidate>, LocateError> {
    let mut candidates: Vec<LogFileCandidate> = Vec::new();

    // The legacy single log file is collected without a recency check and
    // without even a stat: if it has vanished, the archive build fails, which
    // is the documented outcome for a vanished source.
    if let Some(ref unconditional) = sources.unconditional_file {
        tracing::debug!(file = %unconditional.display(), "Including unconditional legacy log");
        candidates.push(LogFileCandidate {
            path: unconditional.clone(),
            modified: None,
            size: 0,
        });
    }

    let host_logs = enumerate_recent(&sources.host_log_dir, now, None)?;
    tracing::debug!(
        dir = %sources.host_log_dir.display(),
        kept = host_logs.len(),
        "Host log directory enumerated"
    );
    candidates.extend(host_logs);

    let journals = match journal_regex() {
        Some(re) => enumerate_recent(&sources.journal_dir, now, Some(re))?,
        None => Vec::new(),
    };
    tracing::debug!(
        dir = %sources.journal_dir.display(),
        kept = journals.len(),
        "Journal directory enumerated"
    );
    candidates.extend(journals);

    tracing::debug!(total = candidates.len(), "Discovery complete");
    Ok(candidates)
}

/// Enumerate regular files directly inside `dir` (non-recursive) and keep
/// those modified within the recency window. When `name_filter` is set, a
/// file must also match it by bare filename to be considered at all.
fn enumerate_recent(
    dir: &Path,
    now: DateTime<Utc>,
    name_filter: Option<&Regex>,
) -> Result<Vec<LogFileCandidate>, LocateError> {
    // Pre-flight validation. `fs::metadata` rather than `Path::is_dir` so a
    // permission error is distinguishable from a path that does not exist.
    match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(LocateError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(LocateError::DirNotFound {
                path: dir.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(LocateError::DirUnreadable {
                path: dir.to_path_buf(),
                source: e,
            });
        }
    }

    let window = Duration::hours(constants::RECENCY_WINDOW_HOURS);
    let mut kept: Vec<LogFileCandidate> = Vec::new();

    let walker = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    for entry_result in walker {
        let entry = entry_result.map_err(|e| LocateError::Traversal {
            path: dir.to_path_buf(),
            source: e,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();

        if let Some(pattern) = name_filter {
            let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if !pattern.is_match(file_name) {
                tracing::trace!(file = %path.display(), "Name does not match journal pattern");
                continue;
            }
        }

        let metadata = entry.metadata().map_err(|e| LocateError::Metadata {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        let modified: DateTime<Utc> = metadata
            .modified()
            .map_err(|e| LocateError::Metadata {
                path: path.to_path_buf(),
                source: e,
            })?
            .into();

        if now.signed_duration_since(modified) > window {
            tracing::trace!(
                file = %path.display(),
                mtime = %modified,
                "Skipped: outside recency window"
            );
            continue;
        }

        kept.push(LogFileCandidate {
            path: path.to_path_buf(),
            modified: Some(modified),
            size: metadata.len(),
        });
    }

    Ok(kept)
}

/// Compiled journal filename pattern.
///
/// The pattern is a constant that always compiles; should it ever fail the
/// failure is logged once and no journal is matched, the same way invalid
/// patterns are logged and skipped rather than crashing the scan.
fn journal_regex() -> Option<&'static Regex> {
    static JOURNAL_RE: OnceLock<Option<Regex>> = OnceLock::new();
    JOURNAL_RE
        .get_or_init(|| match Regex::new(constants::JOURNAL_FILE_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::error!(error = %e, "Journal pattern failed to compile; matching nothing");
                None
            }
        })
        .as_ref()
}

// =============================================================================
// Tests
// =============================================================================
