use crate::prelude::*;
use clap::Parser;

mod airtable;
mod content;
mod error;
mod fallback;
mod prelude;
mod serve;
mod skills;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Portfolio timeline content pipeline backed by an Airtable base"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "SHOWREEL_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Portfolio content operations
    Content(crate::content::App),

    /// Skills grouped by category
    Skills(crate::skills::App),

    /// Serve the content API over HTTP
    Serve(crate::serve::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Content(sub_app) => crate::content::run(sub_app, app.global).await,
        SubCommands::Skills(sub_app) => crate::skills::run(sub_app, app.global).await,
        SubCommands::Serve(sub_app) => crate::serve::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
