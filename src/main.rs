//! CLI entry point for mdpost

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdpost")]
#[command(version)]
#[command(about = "Fetch a markdown post and split it into title and body", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Config file (defaults to mdpost.yml in the base directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL that post paths are resolved against
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Read posts from a local directory instead of over HTTP
    #[arg(short, long, global = true)]
    source: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a post and print its title and content
    #[command(alias = "p")]
    Parse {
        /// Post path, e.g. /2023/may/19.md
        path: String,

        /// Print the parsed post as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch a post and render it into an HTML page
    #[command(alias = "r")]
    Render {
        /// Post path, e.g. /2023/may/19.md
        path: String,

        /// Write the page to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdpost=debug,info"
    } else {
        "mdpost=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let mut app = match &cli.config {
        Some(path) => mdpost::MdPost::with_config_file(&base_dir, path)?,
        None => mdpost::MdPost::new(&base_dir)?,
    };
    if let Some(base_url) = cli.base_url {
        app.config.base_url = base_url;
        app.config.source_dir = None;
    }
    if let Some(source) = cli.source {
        app.config.source_dir = Some(source.to_string_lossy().into_owned());
    }

    match cli.command {
        Commands::Parse { path, json } => {
            tracing::debug!("Parsing {}", path);
            mdpost::commands::parse::run(&app, &path, json).await?;
        }

        Commands::Render { path, output } => {
            tracing::debug!("Rendering {}", path);
            mdpost::commands::render::run(&app, &path, output.as_deref()).await?;
        }
    }

    Ok(())
}
