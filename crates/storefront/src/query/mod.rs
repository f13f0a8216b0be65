use crate::prelude::{println, *};

pub mod collection;
pub mod entry;

// Re-export public assembly functions
pub use collection::collection_query;
pub use entry::entry_query;

#[derive(Debug, clap::Parser)]
#[command(name = "query")]
#[command(about = "Assemble query strings for the content API")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Build a query for a single entry
    #[clap(name = "entry")]
    Entry(entry::EntryOptions),

    /// Build a query for a filtered, sorted, paginated collection
    #[clap(name = "collection")]
    Collection(collection::CollectionOptions),
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Target API: {}", global.api_url);
        println!();
    }

    match app.command {
        Commands::Entry(options) => entry::run(options, global),
        Commands::Collection(options) => collection::run(options, global),
    }
}
