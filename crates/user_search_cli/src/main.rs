use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use user_search_cli::commands::{search_cmd, user_cmd};
use user_search_cli::errors::Error;

/// Search the GitHub user directory from the command line
#[derive(Parser)]
#[command(name = "user-search")]
#[command(about = "Search GitHub users and show their profiles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for users matching a term and optional filters
    Search(search_cmd::SearchArgs),

    /// Show the full profile of a single user
    User(user_cmd::UserArgs),

    /// Show the CLI version
    Version,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("USER_SEARCH_LOG"))
        .init();

    let cli = Cli::parse();
    let result: Result<(), Error> = match &cli.command {
        Commands::Search(args) => search_cmd::execute(args).await,
        Commands::User(args) => user_cmd::execute(args).await,
        Commands::Version => {
            println!("user-search version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("Error: {e}");
        eprintln!("{}", e.user_message().red());
        std::process::exit(e.exit_code());
    }
}
