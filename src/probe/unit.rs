//! Host capability abstraction for loaded library units.
//!
//! The detector needs two answers from the host runtime: where a unit's code
//! was loaded from, and what the unit says about itself. Hosts answer these
//! differently (single binary, shared object, interpreted module path), so
//! both sit behind the [`LoadedUnit`] trait and the detector stays portable.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::manifest::MANIFEST_RESOURCE;

/// Version-bearing metadata a loaded unit reports about itself.
#[derive(Debug, Clone, Default)]
pub struct UnitMetadata {
    /// Implementation version field, when the unit publishes one.
    pub implementation_version: Option<String>,
    /// Specification version field, consulted when the implementation
    /// version is absent or blank.
    pub specification_version: Option<String>,
}

/// A loaded library unit the probe can inspect.
///
/// Implementations answer best-effort: `None`/`Err` mean "this host cannot
/// say", which the detector treats as a strategy miss, never a failure.
pub trait LoadedUnit {
    /// String form of the location this unit's code was loaded from.
    fn origin(&self) -> Option<String>;

    /// The unit's self-reported metadata fields.
    fn metadata(&self) -> UnitMetadata;

    /// Open the well-known manifest resource relative to this unit's origin.
    fn open_manifest(&self) -> io::Result<Box<dyn Read>>;
}

/// A unit backed by an on-disk distribution archive.
///
/// The manifest resource is resolved against the archive's parent directory.
#[derive(Debug, Clone)]
pub struct ArtifactUnit {
    archive_path: PathBuf,
    metadata: UnitMetadata,
}

impl ArtifactUnit {
    /// Create a unit for an archive with no self-reported metadata.
    pub fn new(archive_path: impl Into<PathBuf>) -> Self {
        Self {
            archive_path: archive_path.into(),
            metadata: UnitMetadata::default(),
        }
    }

    /// Attach self-reported metadata to the unit.
    pub fn with_metadata(mut self, metadata: UnitMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Path of the backing archive.
    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }
}

impl LoadedUnit for ArtifactUnit {
    fn origin(&self) -> Option<String> {
        Some(self.archive_path.to_string_lossy().into_owned())
    }

    fn metadata(&self) -> UnitMetadata {
        self.metadata.clone()
    }

    fn open_manifest(&self) -> io::Result<Box<dyn Read>> {
        let dir = self
            .archive_path
            .parent()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
        let file = File::open(dir.join(MANIFEST_RESOURCE))?;
        Ok(Box::new(file))
    }
}

/// A unit with fixed metadata and no inspectable origin.
///
/// Used for self-describing libraries, e.g. the running crate reporting
/// `env!("CARGO_PKG_VERSION")`.
#[derive(Debug, Clone, Default)]
pub struct StaticUnit {
    metadata: UnitMetadata,
}

impl StaticUnit {
    /// Create a unit reporting the given implementation version.
    pub fn with_implementation_version(version: impl Into<String>) -> Self {
        Self {
            metadata: UnitMetadata {
                implementation_version: Some(version.into()),
                specification_version: None,
            },
        }
    }

    /// Create a unit reporting only a specification version.
    pub fn with_specification_version(version: impl Into<String>) -> Self {
        Self {
            metadata: UnitMetadata {
                implementation_version: None,
                specification_version: Some(version.into()),
            },
        }
    }
}

impl LoadedUnit for StaticUnit {
    fn origin(&self) -> Option<String> {
        None
    }

    fn metadata(&self) -> UnitMetadata {
        self.metadata.clone()
    }

    fn open_manifest(&self) -> io::Result<Box<dyn Read>> {
        Err(io::ErrorKind::NotFound.into())
    }
}
