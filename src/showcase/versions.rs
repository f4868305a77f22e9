//! Runtime version detection showcase.
//!
//! Stages a mock library layout in a scratch directory so every detection
//! strategy has something real to inspect, probes a handful of libraries,
//! and prints one row per outcome.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;
use crate::probe::{self, ArtifactUnit, StaticUnit};
use crate::ui::ScoutTheme;

/// One detection outcome for display.
struct LibraryInfo {
    name: &'static str,
    version: String,
    method: &'static str,
}

/// Monotonic suffix so concurrent stages never share a directory.
static STAGE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Scratch layout backing the demo probes.
///
/// The directory is removed on drop. The path is keyed by process id and a
/// per-process sequence number so concurrent stages do not tear each other's
/// files down.
struct DemoStage {
    root: PathBuf,
}

impl DemoStage {
    fn create() -> Result<Self> {
        let seq = STAGE_SEQ.fetch_add(1, Ordering::Relaxed);
        let root = std::env::temp_dir().join(format!(
            "verscout-demo-{}-{}",
            std::process::id(),
            seq
        ));
        let lib_dir = root.join("lib");
        fs::create_dir_all(lib_dir.join("META-INF"))?;

        fs::write(lib_dir.join("eclipse-collections-13.0.0.jar"), b"")?;
        fs::write(lib_dir.join("jansi.jar"), b"")?;
        fs::write(
            lib_dir.join("META-INF/MANIFEST.MF"),
            "Manifest-Version: 1.0\nBundle-Version: 2.4.1\n",
        )?;

        tracing::debug!(root = %root.display(), "staged demo library layout");
        Ok(Self { root })
    }

    fn archive(&self, file_name: &str) -> PathBuf {
        self.root.join("lib").join(file_name)
    }
}

impl Drop for DemoStage {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

/// Run the version detection showcase.
pub fn run(theme: &ScoutTheme) -> Result<()> {
    println!("{}", theme.separator());
    println!("{}", theme.format_header("Runtime Version Detection"));
    println!(
        "{}",
        theme
            .dim
            .apply_to("Probing staged libraries through the fallback chain")
    );
    println!("{}", theme.separator());
    println!();

    let stage = DemoStage::create()?;
    for info in probe_stage(&stage) {
        if info.version == probe::UNKNOWN_VERSION {
            println!(
                "{}{}",
                theme.key.apply_to(format!("{}: ", info.name)),
                theme
                    .warning
                    .apply_to(format!("{} ({})", info.version, info.method))
            );
        } else {
            println!(
                "{}",
                theme.library_row(info.name, &info.version, info.method)
            );
        }
    }

    println!();
    println!("{}", theme.format_success("Version detection completed"));
    println!();
    Ok(())
}

/// Probe every staged library plus the running crate itself.
fn probe_stage(stage: &DemoStage) -> Vec<LibraryInfo> {
    let mut results = Vec::new();

    // Filename carries the version; resolved by archive path analysis.
    let collections = ArtifactUnit::new(stage.archive("eclipse-collections-13.0.0.jar"));
    results.push(LibraryInfo {
        name: "Eclipse Collections",
        version: probe::detect(&collections, "eclipse-collections", None),
        method: "archive path analysis",
    });

    // Unversioned filename; resolved by the staged manifest beside it.
    let jansi = ArtifactUnit::new(stage.archive("jansi.jar"));
    results.push(LibraryInfo {
        name: "Jansi",
        version: probe::detect(&jansi, "jansi", None),
        method: "manifest attributes",
    });

    // The running crate reports its own compiled-in version.
    let this_crate = StaticUnit::with_implementation_version(env!("CARGO_PKG_VERSION"));
    results.push(LibraryInfo {
        name: "Verscout",
        version: probe::detect(&this_crate, "verscout", None),
        method: "unit metadata",
    });

    // Nothing on disk matches; an injected environment provider answers.
    let ghost = ArtifactUnit::new(stage.root.join("ghost.jar"));
    results.push(LibraryInfo {
        name: "Ghost Library",
        version: probe::detect_with_env(&ghost, "ghost-lib", Some("GHOST_LIB_VERSION"), |key| {
            if key == "GHOST_LIB_VERSION" {
                Ok("2.1.0-SNAPSHOT".to_string())
            } else {
                Err(std::env::VarError::NotPresent)
            }
        }),
        method: "environment fallback",
    });

    // Every strategy misses; the sentinel comes back.
    let mystery = ArtifactUnit::new(stage.root.join("mystery.jar"));
    results.push(LibraryInfo {
        name: "Mystery Library",
        version: probe::detect(&mystery, "mystery-lib", None),
        method: "all strategies exhausted",
    });

    results
}
