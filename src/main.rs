use std::path::PathBuf;

use clap::{Parser, Subcommand};
use futures::StreamExt;
use tracing::Instrument;

use crate::constants::STARTUP_TIME;
use crate::store::QuoteStore;

mod commands;
mod constants;
mod init;
mod models;
mod store;
mod sync;
mod telemetry;

#[derive(Clone)]
struct Data {
    reqwest_client: reqwest::Client,
    store: QuoteStore,
    server_url: String,
    sync_interval: std::time::Duration,
}

#[derive(Parser)]
#[command(name = "quotekeeper", about = "a small quote manager that syncs with a server")]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// show a random quote, optionally filtered by category
    Show {
        /// category to pick from, overriding the saved filter
        #[arg(short, long)]
        category: Option<String>,

        /// ignore the saved filter and pick from every category
        #[arg(long, conflicts_with = "category")]
        all: bool,

        /// replay the last viewed quote instead of picking a new one
        #[arg(long)]
        last: bool,
    },

    /// add a new quote to the store
    Add {
        text: String,
        category: String,
    },

    /// list stored quotes in order
    List {
        /// only list quotes in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// list the distinct categories in the store
    Categories,

    /// show, set or clear the saved category filter
    Filter {
        category: Option<String>,

        /// clear the saved filter
        #[arg(long, conflicts_with = "category")]
        clear: bool,
    },

    /// export the quote list as JSON
    Export {
        /// file to write to; prints to stdout when omitted
        path: Option<PathBuf>,
    },

    /// import quotes from a JSON file
    Import {
        path: PathBuf,
    },

    /// reconcile the local list against the server once
    Sync,

    /// sync with the server on an interval until interrupted
    Watch,

    /// print version and store statistics
    Status,
}

async fn watch(data: &Data) -> anyhow::Result<()> {
    tracing::info!(
        interval_secs = data.sync_interval.as_secs(),
        "initialized quote sync loop!"
    );

    let interval = tokio::time::interval(data.sync_interval);
    let task = futures::stream::unfold(interval, |mut interval| async move {
        interval.tick().await;
        let _ = sync::sync_quotes(data).await;

        Some(((), interval))
    });

    task.for_each(|_| async {}).in_current_span().await;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let _ = &*STARTUP_TIME;

    let args = Args::parse();
    let data = init::init()?;

    match args.command {
        Commands::Show {
            category,
            all,
            last,
        } => commands::show::run(&data, category, all, last),
        Commands::Add { text, category } => commands::add::run(&data, &text, &category),
        Commands::List { category } => commands::list::run(&data, category.as_deref()),
        Commands::Categories => commands::categories::run(&data),
        Commands::Filter { category, clear } => commands::filter::run(&data, category, clear),
        Commands::Export { path } => commands::export::run(&data, path.as_deref()),
        Commands::Import { path } => commands::import::run(&data, &path),
        Commands::Sync => commands::sync::run(&data).await,
        Commands::Watch => watch(&data).await,
        Commands::Status => commands::status::run(&data),
    }
}
