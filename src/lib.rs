//! Verscout - colorized console showcase of runtime library version detection.
//!
//! Verscout is a demonstration CLI. It prints styled console output showing
//! off functional collection operations, derive-macro boilerplate reduction,
//! and the one component with real control flow: a runtime version probe
//! that reports a library's version through a layered fallback strategy.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`models`] - Plain data models used by the showcases
//! - [`probe`] - Runtime library version detection
//! - [`showcase`] - Demonstration drivers
//! - [`ui`] - Terminal theme and output helpers
//!
//! # Example
//!
//! ```
//! use verscout::probe::{self, StaticUnit};
//!
//! let unit = StaticUnit::with_implementation_version("13.0.0");
//! let version = probe::detect(&unit, "eclipse-collections", None);
//! assert_eq!(version, "13.0.0");
//! ```

pub mod cli;
pub mod error;
pub mod models;
pub mod probe;
pub mod showcase;
pub mod ui;

pub use error::{Result, ScoutError};
