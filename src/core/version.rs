// EDMC Log Collector - core/version.rs
//
// Host-version resolution.
//
// EDMC has presented its version to plugins in two shapes over the years: a
// literal version string, or a zero-argument accessor returning one. Both
// shapes are normalised here, exactly once, at the integration boundary.
// Everything downstream (the locator's layout branch) only ever sees a
// resolved `semver::Version`.

use semver::Version;

use crate::util::constants;
use crate::util::error::VersionError;

/// The two shapes the host-version indicator can take.
pub enum HostVersionIndicator {
    /// A literal version string, e.g. "5.11.3".
    Literal(String),

    /// A zero-argument accessor producing a version string when invoked.
    Accessor(Box<dyn Fn() -> String + Send + Sync>),
}

impl std::fmt::Debug for HostVersionIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Accessor(_) => f.write_str("Accessor(..)"),
        }
    }
}

/// Normalise the host-version indicator into a comparable semantic version.
///
/// An accessor is invoked exactly once and its result parsed the same way a
/// literal is. An unparseable value is a fatal configuration error; the run
/// must not proceed to discovery.
pub fn resolve_host_version(indicator: &HostVersionIndicator) -> Result<Version, VersionError> {
    let raw = match indicator {
        HostVersionIndicator::Literal(s) => s.clone(),
        HostVersionIndicator::Accessor(f) => f(),
    };

    Version::parse(raw.trim()).map_err(|source| VersionError::Unparseable { raw, source })
}

/// True when `host_version` predates the AppData log layout, i.e. the host
/// still writes its logs under the system temp directory.
pub fn uses_legacy_layout(host_version: &Version) -> bool {
    *host_version < modern_threshold()
}

/// The release that introduced the AppData log layout.
fn modern_threshold() -> Version {
    // The constant is a valid semver literal; parsing it cannot fail.
    Version::parse(constants::MODERN_LAYOUT_VERSION)
        .unwrap_or_else(|_| Version::new(5, 12, 0))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_resolves() {
        let v = resolve_host_version(&HostVersionIndicator::Literal("5.11.3".into())).unwrap();
        assert_eq!(v, Version::new(5, 11, 3));
    }

    #[test]
    fn test_accessor_resolves() {
        let indicator = HostVersionIndicator::Accessor(Box::new(|| "6.0.0".to_string()));
        let v = resolve_host_version(&indicator).unwrap();
        assert_eq!(v, Version::new(6, 0, 0));
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let v = resolve_host_version(&HostVersionIndicator::Literal(" 5.12.0 ".into())).unwrap();
        assert_eq!(v, Version::new(5, 12, 0));
    }

    #[test]
    fn test_garbage_is_a_configuration_error() {
        let result = resolve_host_version(&HostVersionIndicator::Literal("wtf".into()));
        assert!(matches!(result, Err(VersionError::Unparseable { .. })));
    }

    #[test]
    fn test_garbage_from_accessor_is_a_configuration_error() {
        let indicator = HostVersionIndicator::Accessor(Box::new(|| "not-a-version".to_string()));
        let result = resolve_host_version(&indicator);
        assert!(matches!(result, Err(VersionError::Unparseable { .. })));
    }

    #[test]
    fn test_layout_branch_threshold() {
        assert!(uses_legacy_layout(&Version::new(5, 11, 99)));
        assert!(!uses_legacy_layout(&Version::new(5, 12, 0)));
        assert!(!uses_legacy_layout(&Version::new(6, 0, 0)));
    }
}
