pub mod get;
pub mod list;

use crate::prelude::{println, *};
use showreel_core::content::{bundle, transform_records, ContentBundle, ContentItem};

/// Portfolio content commands
#[derive(Debug, clap::Parser)]
#[command(name = "content")]
#[command(about = "Portfolio content operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List published content items
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Get a single content item by its slug
    #[clap(name = "get")]
    Get(get::GetOptions),
}

/// Run content commands
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running content command...");
    }

    match app.command {
        Commands::List(options) => list::handler(options).await,
        Commands::Get(options) => get::handler(options).await,
    }
}

/// Public data function - used by both CLI and the HTTP API.
///
/// Fetches the current record batch (placeholder data when upstream is
/// unavailable) and assembles the full consumer bundle. Never fails: the
/// worst case is deterministic placeholder content of the same shape.
pub async fn get_all_content_data() -> ContentBundle {
    let records = crate::airtable::fetch_records(&crate::fallback::StaticFallback).await;
    let now_millis = chrono::Utc::now().timestamp_millis();
    bundle(transform_records(&records, now_millis))
}

/// Public data function - look up one content item by its slug.
pub async fn get_content_by_id_data(id: &str) -> Option<ContentItem> {
    let output = get_all_content_data().await;
    output.items.into_iter().find(|item| item.id == id)
}
