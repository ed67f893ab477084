mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use msgproc_storage::{StorageBackend, StoreConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "msgproc")]
#[command(about = "Message store for the message-processing service", long_about = None)]
struct Cli {
    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a new pending message and print its id
    Create {
        #[arg(short, long)]
        text: String,
        #[arg(short, long)]
        key: String,
    },
    /// Mark every message with KEY processed
    Process {
        #[arg(short, long)]
        key: String,
    },
    /// Print the total number of messages
    Count,
    /// Print the number of messages not yet processed
    Pending,
    /// Print total, pending and processed counts as JSON
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let storage = StorageBackend::new_postgres(&cli.database_url, &StoreConfig::from_env()).await?;

    let result = match cli.command {
        Commands::Create { text, key } => commands::run_create(&storage, text, key).await,
        Commands::Process { key } => commands::run_process(&storage, key).await,
        Commands::Count => commands::run_count(&storage).await,
        Commands::Pending => commands::run_pending(&storage).await,
        Commands::Stats => commands::run_stats(&storage).await,
    };

    storage.close().await;
    result
}
