// Rust guideline compliant 2026-02-12

//! Husky CLI Application
//!
//! Command-line interface for the husky Git hooks manager.

use clap::Parser;

pub mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "husky",
    version,
    about = "Modern native Git hooks made easy",
    long_about = "Husky manages Git hooks by pointing core.hooksPath at a project-local directory and writing small shim scripts into it.",
    after_help = "Examples:\n  husky install\n  husky install .config/hooks\n  husky set .husky/pre-commit \"npm test\"\n  husky add .husky/pre-commit \"npm run lint\"\n  husky uninstall\n"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Set up Git hooks in the project
    Install {
        /// Hook directory (defaults to .husky)
        dir: Option<String>,
    },

    /// Create or overwrite a hook script
    Set {
        /// Path of the hook file
        file: String,

        /// Shell command the hook runs
        cmd: String,
    },

    /// Append a command to a hook script
    Add {
        /// Path of the hook file
        file: String,

        /// Shell command to append
        cmd: String,
    },

    /// Remove the core.hooksPath configuration
    Uninstall,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Install { dir }) => {
            commands::install::execute(dir)?;
        }
        Some(Commands::Set { file, cmd }) => {
            commands::set::execute(file, cmd)?;
        }
        Some(Commands::Add { file, cmd }) => {
            commands::add::execute(file, cmd)?;
        }
        Some(Commands::Uninstall) => {
            commands::uninstall::execute()?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
