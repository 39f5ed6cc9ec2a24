// EDMC Log Collector - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for a collection run.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum CollectorError {
    /// Host-version resolution failed (configuration error).
    Version(VersionError),

    /// Log-source enumeration failed.
    Locate(LocateError),

    /// Archive construction failed.
    Archive(ArchiveError),
}

impl fmt::Display for CollectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Version(e) => write!(f, "Host version error: {e}"),
            Self::Locate(e) => write!(f, "Log discovery error: {e}"),
            Self::Archive(e) => write!(f, "Archive error: {e}"),
        }
    }
}

impl std::error::Error for CollectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Version(e) => Some(e),
            Self::Locate(e) => Some(e),
            Self::Archive(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Version errors
// ---------------------------------------------------------------------------

/// Errors from normalising the host-version indicator.
#[derive(Debug)]
pub enum VersionError {
    /// The indicator yielded a string that is not a semantic version.
    Unparseable { raw: String, source: semver::Error },
}

impl fmt::Display for VersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparseable { raw, source } => {
                write!(f, "'{raw}' is not a semantic version: {source}")
            }
        }
    }
}

impl std::error::Error for VersionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unparseable { source, .. } => Some(source),
        }
    }
}

impl From<VersionError> for CollectorError {
    fn from(e: VersionError) -> Self {
        Self::Version(e)
    }
}

// ---------------------------------------------------------------------------
// Locate errors
// ---------------------------------------------------------------------------

/// Errors from enumerating a log source directory.
///
/// A missing or unreadable source directory fails the whole run; it is never
/// reported as "zero logs found".
#[derive(Debug)]
pub enum LocateError {
    /// An expected log directory does not exist.
    DirNotFound { path: PathBuf },

    /// An expected log directory path exists but is not a directory.
    NotADirectory { path: PathBuf },

    /// The directory exists but could not be opened or read.
    DirUnreadable { path: PathBuf, source: io::Error },

    /// An entry inside the directory could not be enumerated.
    Traversal {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// File metadata (mtime) could not be read.
    Metadata { path: PathBuf, source: io::Error },
}

impl fmt::Display for LocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirNotFound { path } => {
                write!(f, "Log directory '{}' does not exist", path.display())
            }
            Self::NotADirectory { path } => {
                write!(f, "Log path '{}' is not a directory", path.display())
            }
            Self::DirUnreadable { path, source } => {
                write!(f, "Cannot read log directory '{}': {source}", path.display())
            }
            Self::Traversal { path, source } => {
                write!(f, "Error enumerating '{}': {source}", path.display())
            }
            Self::Metadata { path, source } => {
                write!(
                    f,
                    "Cannot read metadata for '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LocateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DirUnreadable { source, .. } => Some(source),
            Self::Traversal { source, .. } => Some(source),
            Self::Metadata { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<LocateError> for CollectorError {
    fn from(e: LocateError) -> Self {
        Self::Locate(e)
    }
}

// ---------------------------------------------------------------------------
// Archive errors
// ---------------------------------------------------------------------------

/// Errors from building the output ZIP archive.
#[derive(Debug)]
pub enum ArchiveError {
    /// The output directory could not be created.
    CreateDir { path: PathBuf, source: io::Error },

    /// The archive file itself could not be created.
    Create { path: PathBuf, source: io::Error },

    /// A source path has no usable bare filename.
    BadEntryName { path: PathBuf },

    /// A source file vanished or is unreadable during packaging.
    SourceUnreadable { path: PathBuf, source: io::Error },

    /// The ZIP writer rejected an entry or failed to finalise.
    Write {
        path: PathBuf,
        source: zip::result::ZipError,
    },
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir { path, source } => {
                write!(
                    f,
                    "Cannot create output directory '{}': {source}",
                    path.display()
                )
            }
            Self::Create { path, source } => {
                write!(f, "Cannot create archive '{}': {source}", path.display())
            }
            Self::BadEntryName { path } => {
                write!(f, "'{}' has no usable filename", path.display())
            }
            Self::SourceUnreadable { path, source } => {
                write!(f, "Cannot read source file '{}': {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "ZIP write error for '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ArchiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            Self::Create { source, .. } => Some(source),
            Self::SourceUnreadable { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::BadEntryName { .. } => None,
        }
    }
}

impl From<ArchiveError> for CollectorError {
    fn from(e: ArchiveError) -> Self {
        Self::Archive(e)
    }
}

/// Convenience type alias for collector results.
pub type Result<T> = std::result::Result<T, CollectorError>;
