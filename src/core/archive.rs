// EDMC Log Collector - core/archive.rs
//
// ZIP archive construction for the collected log files.
//
// Entries are flattened to bare filenames; any directory structure on the
// source side is dropped. Name collisions are resolved last-write-wins and
// logged, so the finished archive holds exactly one entry per name.
//
// The write is not atomic: a failed build can leave a partial archive on
// disk. The next successful build truncates it. Acceptable for this tool's
// risk profile.

use crate::core::model::{CollectionReport, LogFileCandidate};
use crate::util::error::ArchiveError;
use indexmap::IndexMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Build the output archive from the discovered candidates.
///
/// Creates the parent directory of `output_path` if absent (idempotent) and
/// opens the archive with truncate semantics: a prior archive at the same
/// path is fully replaced, never appended to.
///
/// Any single unreadable source fails the whole build; partial archives are
/// never reported as success. The ZIP writer is finalised on the success
/// path and dropped (releasing the file handle) on every failure path.
pub fn build(
    candidates: &[LogFileCandidate],
    output_path: &Path,
) -> Result<CollectionReport, ArchiveError> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ArchiveError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let manifest = flatten_names(candidates)?;

    let file = File::create(output_path).map_err(|e| ArchiveError::Create {
        path: output_path.to_path_buf(),
        source: e,
    })?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    for (name, source) in &manifest {
        writer
            .start_file(name.as_str(), options)
            .map_err(|e| ArchiveError::Write {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        let mut input = File::open(source).map_err(|e| ArchiveError::SourceUnreadable {
            path: source.clone(),
            source: e,
        })?;
        io::copy(&mut input, &mut writer).map_err(|e| ArchiveError::SourceUnreadable {
            path: source.clone(),
            source: e,
        })?;
    }

    writer.finish().map_err(|e| ArchiveError::Write {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(
        archive = %output_path.display(),
        entries = manifest.len(),
        "Archive written"
    );

    Ok(CollectionReport {
        archive_path: output_path.to_path_buf(),
        entries_written: manifest.len(),
    })
}

/// Map candidates to `bare filename -> source path`, preserving first-seen
/// order. A repeated name displaces the earlier source (last write wins);
/// each displacement is logged so support staff can tell a file is missing
/// from the bundle.
fn flatten_names(
    candidates: &[LogFileCandidate],
) -> Result<IndexMap<String, PathBuf>, ArchiveError> {
    let mut manifest: IndexMap<String, PathBuf> = IndexMap::with_capacity(candidates.len());

    for candidate in candidates {
        let name = candidate
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ArchiveError::BadEntryName {
                path: candidate.path.clone(),
            })?;

        if let Some(displaced) = manifest.insert(name.to_string(), candidate.path.clone()) {
            tracing::warn!(
                entry = name,
                displaced = %displaced.display(),
                kept = %candidate.path.display(),
                "Duplicate archive entry name; keeping the later source"
            );
        }
    }

    Ok(manifest)
}

// =============================================================================
// Tests
// =============================================================================
