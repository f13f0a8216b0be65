use crate::prelude::{println, *};
use colored::Colorize;
use storefront_core::shop::{parse_shop_document, ShopHeader};

#[derive(Debug, clap::Parser)]
#[command(name = "shop")]
#[command(about = "Render shop response documents")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Render the shop header from an entry response document
    #[clap(name = "show")]
    Show(ShowOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct ShowOptions {
    /// Response document to render; reads stdin when omitted
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<std::path::PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Show(options) => show(options, global),
    }
}

fn show(options: ShowOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        match &options.input {
            Some(path) => println!("Reading response document from {}", path.display()),
            None => println!("Reading response document from stdin"),
        }
    }

    let raw = crate::document::read_document(options.input.as_deref())?;
    let header = parse_shop_document(&raw).map_err(|e| eyre!(e.to_string()))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&header)?);
    } else {
        print!("{}", format_shop_text(&header));
    }

    Ok(())
}

/// Convert the shop header to formatted text with colors
fn format_shop_text(header: &ShopHeader) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        header.name.to_uppercase().bright_cyan().bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if let Some(description) = &header.description {
        result.push_str(&format!("\n{}\n", description.white()));
    }

    if let Some(logo) = &header.logo {
        result.push_str(&format!(
            "\n{}: {}\n",
            "Logo".green(),
            logo.cyan().underline()
        ));
    }

    result.push_str(&format!(
        "\n{}: {}\n",
        "Entry".green(),
        header.id.bright_white()
    ));

    if let Some(published) = &header.published {
        result.push_str(&format!(
            "{}: {}\n",
            "Published".green(),
            published.bright_black()
        ));
    }

    if let Some(updated) = &header.updated {
        result.push_str(&format!(
            "{}: {}\n",
            "Updated".green(),
            updated.bright_black()
        ));
    }

    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_header() -> ShopHeader {
        ShopHeader {
            id: "1".to_string(),
            name: "Corner Shop".to_string(),
            description: Some("Everything for the corner of your desk.".to_string()),
            logo: Some("https://cdn.example.com/logo.svg".to_string()),
            published: Some("2024-03-01 09:30:00 UTC".to_string()),
            updated: Some("2024-04-15 17:05:10 UTC".to_string()),
        }
    }

    #[test]
    fn test_format_shop_text_basic() {
        let formatted = format_shop_text(&create_test_header());

        assert!(formatted.contains("CORNER SHOP"));
        assert!(formatted.contains("Everything for the corner of your desk."));
        assert!(formatted.contains("https://cdn.example.com/logo.svg"));
        assert!(formatted.contains("2024-03-01 09:30:00 UTC"));
        assert!(formatted.contains("=".repeat(80).as_str()));
    }

    #[test]
    fn test_format_shop_text_missing_optionals() {
        let header = ShopHeader {
            id: "9".to_string(),
            name: "Bare Shop".to_string(),
            description: None,
            logo: None,
            published: None,
            updated: None,
        };

        let formatted = format_shop_text(&header);

        assert!(formatted.contains("BARE SHOP"));
        assert!(!formatted.contains("Logo"));
        assert!(!formatted.contains("Published"));
        assert!(!formatted.contains("Updated"));
    }

    #[test]
    fn test_format_shop_text_json_round_trip() {
        let header = create_test_header();
        let json = serde_json::to_string_pretty(&header).unwrap();

        assert!(json.contains("\"name\": \"Corner Shop\""));
        assert!(json.contains("\"id\": \"1\""));
    }
}
