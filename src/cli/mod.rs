//! Command-line interface.
//!
//! Parses arguments via [`args::Cli`] and dispatches to the showcases. With
//! no subcommand all three run in sequence, mirroring a plain demo run.

pub mod args;

pub use args::{Cli, Commands};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::error::Result;
use crate::showcase;
use crate::ui::{should_use_colors, ScoutTheme};

/// Dispatch the parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Completions { shell }) => {
            generate_completions(*shell);
            Ok(())
        }
        Some(Commands::Versions) => showcase::versions::run(&select_theme()),
        Some(Commands::Collections) => showcase::collections::run(&select_theme()),
        Some(Commands::Models) => showcase::models::run(&select_theme()),
        None => {
            let theme = select_theme();
            showcase::collections::run(&theme)?;
            showcase::models::run(&theme)?;
            showcase::versions::run(&theme)
        }
    }
}

/// Pick the colored or plain theme based on the terminal environment.
fn select_theme() -> ScoutTheme {
    if should_use_colors() {
        ScoutTheme::new()
    } else {
        ScoutTheme::plain()
    }
}

/// Write a completion script for `shell` to stdout.
fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
