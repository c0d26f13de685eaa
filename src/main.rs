use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bookworms::{
    api::{create_router, AppState},
    config::Config,
    display,
    services::{find_common_books, recommend_books},
    source::{BookwormSource, JsonFileSource},
};

#[derive(Parser)]
#[command(name = "bookworms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Finds books in common and recommends new ones to bookworms")]
struct Cli {
    /// The path to the bookworms JSON file (overrides BOOKWORMS_PATH)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Default)]
enum Command {
    /// List the books on more than one shelf
    #[default]
    Common,
    /// Recommend books to every bookworm
    Recommend,
    /// Serve the analyses over HTTP
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log)),
        )
        .with_writer(io::stderr)
        .init();

    let source = JsonFileSource::new(cli.path.unwrap_or_else(|| config.path.clone()));

    match cli.command.unwrap_or_default() {
        Command::Common => {
            let bookworms = load(&source).await?;
            let books = find_common_books(&bookworms);
            display::write_common_books(&mut io::stdout().lock(), &books)?;
        }
        Command::Recommend => {
            let bookworms = load(&source).await?;
            let recommendations = recommend_books(&bookworms);
            let mut out = io::stdout().lock();
            display::write_recommendations(&mut out, &recommendations)?;
            out.flush()?;
        }
        Command::Serve => {
            let state = AppState::load(&source)
                .await
                .context("failed to load bookworms")?;
            let app = create_router(state);

            let address = config.bind_address();
            let listener = tokio::net::TcpListener::bind(&address)
                .await
                .with_context(|| format!("failed to bind {}", address))?;
            tracing::info!(address = %address, "Server running");
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

async fn load(source: &JsonFileSource) -> anyhow::Result<Vec<bookworms::Bookworm>> {
    source.load().await.context("failed to load bookworms")
}
