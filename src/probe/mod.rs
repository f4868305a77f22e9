//! Runtime library version detection.
//!
//! The probe answers one question: "which version of this library is loaded
//! here?" It accepts a reference to the library's loaded unit plus a name
//! fragment expected in its archive filename, and walks an ordered fallback
//! chain until a strategy produces a usable value:
//!
//! 1. unit metadata (implementation version, then specification version)
//! 2. archive filename analysis of the unit's origin path
//! 3. manifest attributes (`Bundle-Version`, then `Implementation-Version`)
//! 4. process environment, under an optional caller-supplied key
//!
//! Every internal failure degrades to "try the next strategy"; when the chain
//! is exhausted the result is the [`UNKNOWN_VERSION`] sentinel. The probe
//! performs read-only inspection and never modifies environment state.
//!
//! # Example
//!
//! ```
//! use verscout::probe::{self, ArtifactUnit};
//!
//! let unit = ArtifactUnit::new("/opt/app/lib/eclipse-collections-13.0.0.jar");
//! let version = probe::detect(&unit, "eclipse-collections", None);
//! assert_eq!(version, "13.0.0");
//! ```

pub mod detector;
pub mod manifest;
pub mod unit;

pub use detector::{detect, detect_with_env, UNKNOWN_VERSION};
pub use manifest::{ManifestAttributes, MANIFEST_RESOURCE};
pub use unit::{ArtifactUnit, LoadedUnit, StaticUnit, UnitMetadata};
