//! CLI entry point: the Requesty provider command group.

use clap::Parser;
use dotenv::dotenv;

use llm_requesty::cli::{Args, Commands};
use llm_requesty::run;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    let result = match &args.command {
        Commands::Refresh => run::run_refresh(),
        Commands::Models { json, query } => run::run_models(*json, query.as_deref()),
        Commands::Config => run::run_config(),
        Commands::Completions { shell } => {
            run::run_completions(*shell);
            Ok(())
        }
    };

    // Print user-friendly message; exit uses Display not Debug
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
