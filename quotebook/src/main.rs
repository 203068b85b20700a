use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quotebook_kg::cache::start_auto_cleanup;
use quotebook_kg::{
    seed_graph, CommandManager, DataManager, DataProvider, MemoryCache, Neo4jClient,
    Neo4jDataProvider, QuotebookConfig, SeedData,
};

#[derive(Parser)]
#[command(name = "quotebook")]
#[command(about = "Quote lookups by author or tag", long_about = None)]
struct Cli {
    /// Serve from authors.json/quotes.json in this directory instead of Neo4j
    #[arg(long, global = true)]
    offline: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt (default)
    Repl,

    /// Run a single command line, e.g. "tags:life,love"
    Query {
        /// The command line to run
        line: String,
    },

    /// Load authors and quotes into Neo4j
    Seed {
        /// Path to authors.json
        #[arg(long, default_value = "authors.json")]
        authors: PathBuf,

        /// Path to quotes.json
        #[arg(long, default_value = "quotes.json")]
        quotes: PathBuf,

        /// Remove existing authors, quotes and tags first
        #[arg(long)]
        reset: bool,
    },

    /// Check that Neo4j is reachable
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so replies on stdout stay clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "quotebook=info,quotebook_kg=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = QuotebookConfig::from_env().context("Invalid configuration")?;

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            let manager = create_command_manager(&config, cli.offline.as_deref()).await?;
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            quotebook::run(&manager, stdin, &mut stdout).await?;
        }

        Commands::Query { line } => {
            let manager = create_command_manager(&config, cli.offline.as_deref()).await?;
            let reply = manager.handle_command(&line).await?;
            println!("{}", reply);
        }

        Commands::Seed {
            authors,
            quotes,
            reset,
        } => {
            quotebook::require_online(cli.offline.as_deref(), "seed")?;
            let seed = SeedData::load(&authors, &quotes)?;
            let client = connect(&config).await?;
            let summary = seed_graph(client.graph(), &seed, reset).await?;
            println!(
                "Seeded {} authors and {} quotes",
                summary.authors, summary.quotes
            );
        }

        Commands::Health => {
            quotebook::require_online(cli.offline.as_deref(), "health")?;
            let client = Neo4jClient::from_config(&config.store).await?;
            let result = client.health_check_with_retry().await;
            println!("Status: {:?}", result.status);
            println!("Response time: {}ms", result.response_time_ms);
            if let Some(error) = result.error {
                println!("Error: {}", error);
            }
            if !result.status.is_operational() {
                bail!("Neo4j at {} is not operational", config.store.uri);
            }
        }
    }

    Ok(())
}

/// Connect to Neo4j and refuse to continue if it does not answer
async fn connect(config: &QuotebookConfig) -> Result<Neo4jClient> {
    let client = Neo4jClient::from_config(&config.store)
        .await
        .with_context(|| format!("Failed to connect to Neo4j at {}", config.store.uri))?;

    let health = client.health_check_with_retry().await;
    if !health.status.is_operational() {
        bail!(
            "Neo4j at {} is not available: {}",
            config.store.uri,
            health.error.unwrap_or_default()
        );
    }

    Ok(client)
}

async fn create_command_manager(
    config: &QuotebookConfig,
    offline: Option<&Path>,
) -> Result<CommandManager> {
    let provider: Arc<dyn DataProvider> = match offline {
        Some(dir) => Arc::new(quotebook::load_provider(dir).await?),
        None => Arc::new(Neo4jDataProvider::new(Arc::new(connect(config).await?))),
    };

    let cache = Arc::new(MemoryCache::new(config.cache.clone()));
    if config.cache.enable_auto_cleanup {
        tokio::spawn(start_auto_cleanup(cache.clone()));
    }

    Ok(CommandManager::new(DataManager::new(cache, provider)))
}
