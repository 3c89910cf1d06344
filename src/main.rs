//! CLI entry point for caderno

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "caderno")]
#[command(version = "0.1.0")]
#[command(about = "Content engine for a Markdown personal blog", long_about = None)]
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
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Category to record in the front-matter
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List all posts, newest first
    List {
        /// Emit the posts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single post
    Show {
        /// Slug of the post (filename without .md)
        slug: String,

        /// Render the body to HTML
        #[arg(long)]
        html: bool,

        /// Emit the post as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,
    },

    /// Check the posts directory for problems
    Check,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "caderno=debug,info"
    } else {
        "caderno=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            caderno::commands::init::init_site(&target_dir)?;
            println!("Initialized empty caderno site in {:?}", target_dir);
        }

        Commands::New { title, category } => {
            let app = caderno::Caderno::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            caderno::commands::new::create_post(&app, &title, category.as_deref())?;
        }

        Commands::List { json } => {
            let app = caderno::Caderno::new(&base_dir)?;
            caderno::commands::list::run(&app, json)?;
        }

        Commands::Show { slug, html, json } => {
            let app = caderno::Caderno::new(&base_dir)?;
            caderno::commands::show::run(&app, &slug, html, json)?;
        }

        Commands::Check => {
            let app = caderno::Caderno::new(&base_dir)?;
            caderno::commands::check::run(&app)?;
        }

        Commands::Version => {
            println!("caderno version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
