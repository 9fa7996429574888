//! CLI entry point for inkpress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "inkpress")]
#[command(version)]
#[command(about = "A small static blog generator", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate static files
    #[command(alias = "b")]
    Build,

    /// Clean the public folder
    Clean,

    /// List documents in index order
    List,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "inkpress=debug,info"
    } else {
        "inkpress=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Build => {
            let site = inkpress::Site::new(&base_dir)?;
            tracing::info!("Generating static files...");
            site.build()?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let site = inkpress::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let site = inkpress::Site::new(&base_dir)?;
            inkpress::commands::list::run(&site)?;
        }

        Commands::Version => {
            println!("inkpress version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
