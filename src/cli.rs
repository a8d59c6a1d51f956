//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  llm-requesty models               List models from the router catalog
  llm-requesty models --json        Same, as indented JSON
  llm-requesty models --query vlm   Filter by id or description
  llm-requesty refresh              Force a live re-fetch of both catalogs
  llm-requesty config               Show cache paths and key status
  llm-requesty completions bash     Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Model catalog commands for the Requesty router provider",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Refresh the cached model catalogs from the Requesty API
    Refresh,
    /// List Requesty models from the annotated catalog
    Models {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Filter models by id or description
        #[arg(long)]
        query: Option<String>,
    },
    /// Show cache paths, cache age, and API key status
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
