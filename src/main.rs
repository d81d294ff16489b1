use clap::Parser;
use std::sync::Arc;
use tracing::info;

use system_graphql::logging;
use system_graphql::note::NoteStore;
use system_graphql::properties::{EnvPropertySource, PropertySource};
use system_graphql::server;

#[derive(Parser)]
#[command(name = "system-graphql")]
#[command(about = "GraphQL API server exposing host system properties")]
#[command(version = "0.1.0")]
struct Cli {
    /// Port to run the server on
    #[arg(short, long, default_value = "9080")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    logging::init_logging();
    info!("Starting system GraphQL API server on port {}", cli.port);

    let properties: Arc<dyn PropertySource> = Arc::new(EnvPropertySource);
    let notes = NoteStore::new();

    server::start_server(properties, notes, cli.port).await?;

    Ok(())
}
