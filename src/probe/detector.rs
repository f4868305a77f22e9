//! Version detection through a layered fallback chain.
//!
//! Libraries rarely agree on where their version lives: some publish it in
//! unit metadata, some only in the archive filename they shipped in, some in
//! a bundled manifest, and some not at all. [`detect`] tries each source in
//! order of reliability and returns the first usable value, degrading to the
//! [`UNKNOWN_VERSION`] sentinel instead of erroring. The probe is advisory
//! and must never destabilize a caller's startup path, so every internal
//! failure is absorbed as "try the next strategy".

use regex::Regex;

use super::manifest::ManifestAttributes;
use super::unit::LoadedUnit;

/// Sentinel returned when no strategy produced a usable version string.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Archive suffix recognized by the archive-path strategy.
const ARCHIVE_SUFFIX: &str = ".jar";

/// Detect a library version by inspecting the execution environment.
///
/// Tries, in order: unit metadata, archive filename analysis, manifest
/// attributes, and finally the process environment under `fallback_key`.
/// Returns [`UNKNOWN_VERSION`] when every strategy comes up empty.
///
/// A blank `name_fragment` short-circuits to [`UNKNOWN_VERSION`]; the probe
/// treats bad input as "nothing to find", not as an error.
pub fn detect(unit: &dyn LoadedUnit, name_fragment: &str, fallback_key: Option<&str>) -> String {
    detect_with_env(unit, name_fragment, fallback_key, |key| std::env::var(key))
}

/// Detect a library version with a custom environment lookup function.
///
/// This allows testing the environment fallback without modifying actual
/// process state.
pub fn detect_with_env<F>(
    unit: &dyn LoadedUnit,
    name_fragment: &str,
    fallback_key: Option<&str>,
    env_fn: F,
) -> String
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    if name_fragment.trim().is_empty() {
        return UNKNOWN_VERSION.to_string();
    }

    if let Some(version) = version_from_metadata(unit).filter(|v| is_valid_version(v)) {
        tracing::debug!(%version, "version found in unit metadata");
        return version;
    }

    if let Some(version) =
        version_from_archive_path(unit, name_fragment).filter(|v| is_valid_version(v))
    {
        tracing::debug!(%version, "version found in archive path");
        return version;
    }

    if let Some(version) = version_from_manifest(unit).filter(|v| is_valid_version(v)) {
        tracing::debug!(%version, "version found in manifest attributes");
        return version;
    }

    if let Some(key) = fallback_key.filter(|k| !k.trim().is_empty()) {
        if let Ok(version) = env_fn(key) {
            if is_valid_version(&version) {
                tracing::debug!(%version, key, "version found in environment");
                return version;
            }
        }
    }

    UNKNOWN_VERSION.to_string()
}

/// Metadata strategy: implementation version, else specification version.
fn version_from_metadata(unit: &dyn LoadedUnit) -> Option<String> {
    let meta = unit.metadata();
    meta.implementation_version
        .filter(|v| is_valid_version(v))
        .or(meta.specification_version)
}

/// Archive-path strategy: parse the version out of the archive filename.
///
/// Fast-exits when the fragment does not appear anywhere in the origin
/// string, before any segment parsing.
fn version_from_archive_path(unit: &dyn LoadedUnit, name_fragment: &str) -> Option<String> {
    let origin = unit.origin()?;
    if !origin.contains(name_fragment) {
        return None;
    }
    extract_from_archive_name(&origin, name_fragment)
}

/// Scan origin path segments for `<fragment>-<version>.jar`.
///
/// Only tokens with a three-part dotted numeric prefix are accepted; whatever
/// follows the third component is kept verbatim. Segments are scanned in
/// natural left-to-right order and the first match wins.
fn extract_from_archive_name(origin: &str, name_fragment: &str) -> Option<String> {
    let token_pattern = Regex::new(r"^\d+\.\d+\.\d+").ok()?;
    let archive_prefix = format!("{name_fragment}-");

    for segment in origin.split(['/', '\\']) {
        if let Some(rest) = segment.strip_prefix(archive_prefix.as_str()) {
            if let Some(token) = rest.strip_suffix(ARCHIVE_SUFFIX) {
                if token_pattern.is_match(token) {
                    return Some(token.to_string());
                }
            }
        }
    }

    None
}

/// Manifest strategy: `Bundle-Version`, else `Implementation-Version`.
///
/// An unopenable or malformed manifest yields no result; the underlying I/O
/// failure is never surfaced.
fn version_from_manifest(unit: &dyn LoadedUnit) -> Option<String> {
    let reader = unit.open_manifest().ok()?;
    let attributes = ManifestAttributes::read(reader).ok()?;

    attributes
        .get("Bundle-Version")
        .filter(|v| is_valid_version(v))
        .or_else(|| attributes.get("Implementation-Version"))
        .map(str::to_string)
}

/// A version value is usable iff it is non-blank after trimming.
fn is_valid_version(version: &str) -> bool {
    !version.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::unit::UnitMetadata;
    use std::io::{self, Cursor, Read};

    /// Unit with fully scriptable answers for exercising each strategy.
    struct FakeUnit {
        origin: Option<String>,
        metadata: UnitMetadata,
        manifest: Option<String>,
    }

    impl FakeUnit {
        fn empty() -> Self {
            Self {
                origin: None,
                metadata: UnitMetadata::default(),
                manifest: None,
            }
        }

        fn with_origin(origin: &str) -> Self {
            Self {
                origin: Some(origin.to_string()),
                ..Self::empty()
            }
        }

        fn with_manifest(mut self, manifest: &str) -> Self {
            self.manifest = Some(manifest.to_string());
            self
        }

        fn with_implementation_version(mut self, version: &str) -> Self {
            self.metadata.implementation_version = Some(version.to_string());
            self
        }

        fn with_specification_version(mut self, version: &str) -> Self {
            self.metadata.specification_version = Some(version.to_string());
            self
        }
    }

    impl LoadedUnit for FakeUnit {
        fn origin(&self) -> Option<String> {
            self.origin.clone()
        }

        fn metadata(&self) -> UnitMetadata {
            self.metadata.clone()
        }

        fn open_manifest(&self) -> io::Result<Box<dyn Read>> {
            match &self.manifest {
                Some(text) => Ok(Box::new(Cursor::new(text.clone().into_bytes()))),
                None => Err(io::ErrorKind::NotFound.into()),
            }
        }
    }

    fn no_env(_: &str) -> Result<String, std::env::VarError> {
        Err(std::env::VarError::NotPresent)
    }

    #[test]
    fn metadata_wins_over_satisfiable_archive_path() {
        let unit = FakeUnit::with_origin("/repo/eclipse-collections-13.0.0.jar")
            .with_implementation_version("12.0.0");
        let version = detect_with_env(&unit, "eclipse-collections", None, no_env);
        assert_eq!(version, "12.0.0");
    }

    #[test]
    fn specification_version_used_when_implementation_blank() {
        let unit = FakeUnit::empty()
            .with_implementation_version("   ")
            .with_specification_version("4.2");
        let version = detect_with_env(&unit, "mylib", None, no_env);
        assert_eq!(version, "4.2");
    }

    #[test]
    fn archive_path_extracts_three_part_token() {
        let unit = FakeUnit::with_origin(
            "/home/user/.m2/repository/eclipse-collections/13.0.0/eclipse-collections-13.0.0.jar",
        );
        let version = detect_with_env(&unit, "eclipse-collections", None, no_env);
        assert_eq!(version, "13.0.0");
    }

    #[test]
    fn archive_path_keeps_suffix_after_numeric_prefix() {
        let unit = FakeUnit::with_origin("/lib/mylib-1.2.3-SNAPSHOT.jar");
        let version = detect_with_env(&unit, "mylib", None, no_env);
        assert_eq!(version, "1.2.3-SNAPSHOT");
    }

    #[test]
    fn two_part_token_is_rejected() {
        let unit = FakeUnit::with_origin("/lib/eclipse-collections-13.jar");
        let version = detect_with_env(&unit, "eclipse-collections", None, no_env);
        assert_eq!(version, UNKNOWN_VERSION);
    }

    #[test]
    fn fragment_absent_from_origin_yields_no_result() {
        let unit = FakeUnit::with_origin("/lib/other-library-1.0.0.jar");
        let version = detect_with_env(&unit, "eclipse-collections", None, no_env);
        assert_eq!(version, UNKNOWN_VERSION);
    }

    #[test]
    fn first_matching_segment_wins() {
        let unit = FakeUnit::with_origin("/a/mylib-1.0.0.jar/b/mylib-2.0.0.jar");
        let version = detect_with_env(&unit, "mylib", None, no_env);
        assert_eq!(version, "1.0.0");
    }

    #[test]
    fn backslash_separated_origin_is_split_too() {
        let unit = FakeUnit::with_origin(r"C:\libs\mylib-3.0.1.jar");
        let version = detect_with_env(&unit, "mylib", None, no_env);
        assert_eq!(version, "3.0.1");
    }

    #[test]
    fn non_numeric_leading_component_fails_to_match() {
        // Deliberate: the flat naming convention is preserved as-is.
        let unit = FakeUnit::with_origin("/lib/mylib-v1.2.3.jar");
        let version = detect_with_env(&unit, "mylib", None, no_env);
        assert_eq!(version, UNKNOWN_VERSION);
    }

    #[test]
    fn manifest_bundle_version_preferred() {
        let unit = FakeUnit::empty()
            .with_manifest("Bundle-Version: 2.4.1\nImplementation-Version: 9.9.9\n");
        let version = detect_with_env(&unit, "mylib", None, no_env);
        assert_eq!(version, "2.4.1");
    }

    #[test]
    fn manifest_implementation_version_is_fallback() {
        let unit = FakeUnit::empty().with_manifest("Implementation-Version: 5.6.7\n");
        let version = detect_with_env(&unit, "mylib", None, no_env);
        assert_eq!(version, "5.6.7");
    }

    #[test]
    fn unopenable_manifest_falls_through() {
        let unit = FakeUnit::empty();
        let version = detect_with_env(&unit, "mylib", None, no_env);
        assert_eq!(version, UNKNOWN_VERSION);
    }

    #[test]
    fn env_fallback_used_when_structural_strategies_fail() {
        let unit = FakeUnit::empty();
        let version = detect_with_env(&unit, "mylib", Some("MYLIB_VERSION"), |key| {
            if key == "MYLIB_VERSION" {
                Ok("2.1.0-SNAPSHOT".to_string())
            } else {
                Err(std::env::VarError::NotPresent)
            }
        });
        assert_eq!(version, "2.1.0-SNAPSHOT");
    }

    #[test]
    fn env_fallback_skipped_without_key() {
        let unit = FakeUnit::empty();
        let version = detect_with_env(&unit, "mylib", None, |_| Ok("1.0.0".to_string()));
        assert_eq!(version, UNKNOWN_VERSION);
    }

    #[test]
    fn blank_env_key_is_ignored() {
        let unit = FakeUnit::empty();
        let version = detect_with_env(&unit, "mylib", Some("   "), |_| Ok("1.0.0".to_string()));
        assert_eq!(version, UNKNOWN_VERSION);
    }

    #[test]
    fn blank_env_value_is_rejected() {
        let unit = FakeUnit::empty();
        let version = detect_with_env(&unit, "mylib", Some("MYLIB_VERSION"), |_| {
            Ok("   ".to_string())
        });
        assert_eq!(version, UNKNOWN_VERSION);
    }

    #[test]
    fn blank_name_fragment_returns_unknown() {
        let unit = FakeUnit::empty().with_implementation_version("1.0.0");
        assert_eq!(detect_with_env(&unit, "", None, no_env), UNKNOWN_VERSION);
        assert_eq!(detect_with_env(&unit, "   ", None, no_env), UNKNOWN_VERSION);
    }

    #[test]
    fn all_strategies_exhausted_returns_unknown() {
        let unit = FakeUnit::empty();
        let version = detect_with_env(&unit, "mylib", None, no_env);
        assert_eq!(version, UNKNOWN_VERSION);
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let unit = FakeUnit::with_origin("/lib/mylib-1.2.3.jar");
        let first = detect_with_env(&unit, "mylib", None, no_env);
        let second = detect_with_env(&unit, "mylib", None, no_env);
        assert_eq!(first, second);
        assert_eq!(first, "1.2.3");
    }

    #[test]
    fn archive_strategy_wins_over_manifest() {
        let unit = FakeUnit::with_origin("/lib/mylib-1.0.0.jar")
            .with_manifest("Bundle-Version: 9.9.9\n");
        let version = detect_with_env(&unit, "mylib", None, no_env);
        assert_eq!(version, "1.0.0");
    }
}
