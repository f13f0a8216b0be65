#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod catalog;
mod document;
mod error;
mod prelude;
mod query;
mod shop;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Storefront tooling for a GraphQL-style content backend"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Content API endpoint the assembled queries are meant for.
    #[clap(
        long,
        env = "STOREFRONT_API_URL",
        global = true,
        default_value = "http://localhost:1337/graphql"
    )]
    api_url: String,

    /// Whether to display additional information.
    #[clap(long, env = "STOREFRONT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Assemble query strings for the content API
    Query(crate::query::App),

    /// Render a shop header response document
    Shop(crate::shop::App),

    /// Render a product catalog response document
    Catalog(crate::catalog::App),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Query(sub_app) => crate::query::run(sub_app, app.global),
        SubCommands::Shop(sub_app) => crate::shop::run(sub_app, app.global),
        SubCommands::Catalog(sub_app) => crate::catalog::run(sub_app, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
