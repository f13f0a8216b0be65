use crate::prelude::{println, *};
use colored::Colorize;
use storefront_core::catalog::{paginate, parse_catalog_document, CatalogOutput};

#[derive(Debug, clap::Parser)]
#[command(name = "catalog")]
#[command(about = "Render product catalog response documents")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Render a product listing from a collection response document
    #[clap(name = "list")]
    List(ListOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Response document to render; reads stdin when omitted
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<std::path::PathBuf>,

    /// Re-slice the listing client-side to this page (requires --limit)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Items per page for client-side slicing
    #[arg(short, long, env = "STOREFRONT_LIMIT")]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::List(options) => list(options, global),
    }
}

fn list(options: ListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Rendering product catalog...");
    }

    let raw = crate::document::read_document(options.input.as_deref())?;
    let mut output = parse_catalog_document(&raw).map_err(|e| eyre!(e.to_string()))?;

    if options.page.is_some() || options.limit.is_some() {
        let page = options.page.unwrap_or(1);
        let limit = options.limit.unwrap_or(output.items.len().max(1));
        output = paginate(output, page, limit).map_err(|e| eyre!(e))?;
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", format_catalog_text(&output));
    }

    Ok(())
}

/// Convert catalog output to a table plus navigation hints
fn format_catalog_text(output: &CatalogOutput) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "PRODUCT CATALOG (Page {} of {})",
            output.pagination.current_page, output.pagination.total_pages
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if output.items.is_empty() {
        result.push_str(&format!("\n{}\n", "No products on this page.".yellow()));
    } else {
        let mut table = crate::prelude::new_table();
        table.add_row(prettytable::row!["Id", "Name", "Slug", "Price", "Stock", "Published"]);

        for item in &output.items {
            let price = item
                .price
                .map(|price| format!("{price:.2}"))
                .unwrap_or_else(|| "-".to_string());
            let stock = match item.in_stock {
                Some(true) => "in stock",
                Some(false) => "sold out",
                None => "-",
            };
            table.add_row(prettytable::row![
                &item.id,
                &item.name,
                item.slug.as_deref().unwrap_or("-"),
                price,
                stock,
                item.published.as_deref().unwrap_or("-")
            ]);
        }

        result.push('\n');
        result.push_str(&table.to_string());
    }

    result.push_str(&format!(
        "\n{} {} {} {} ({} {})\n",
        "Showing page".bright_white(),
        output
            .pagination
            .current_page
            .to_string()
            .bright_cyan()
            .bold(),
        "of".bright_white(),
        output
            .pagination
            .total_pages
            .to_string()
            .bright_cyan()
            .bold(),
        output
            .pagination
            .total_items
            .to_string()
            .bright_cyan()
            .bold(),
        "total products".bright_white()
    ));

    if let Some(next) = &output.pagination.next_page_command {
        result.push_str(&format!("  {}: {}\n", "Next page".green(), next.cyan()));
    }
    if let Some(prev) = &output.pagination.prev_page_command {
        result.push_str(&format!("  {}: {}\n", "Previous page".green(), prev.cyan()));
    }

    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::catalog::{CatalogItem, CatalogPaginationInfo};

    fn create_test_item(id: &str, name: &str, price: f64) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            slug: Some(name.to_lowercase()),
            price: Some(price),
            in_stock: Some(true),
            published: Some("2024-03-01 09:30:00 UTC".to_string()),
        }
    }

    fn create_test_output(items: Vec<CatalogItem>) -> CatalogOutput {
        let total_items = items.len();
        CatalogOutput {
            items,
            pagination: CatalogPaginationInfo {
                current_page: 1,
                total_pages: 1,
                total_items,
                page_size: 30,
                next_page_command: None,
                prev_page_command: None,
            },
        }
    }

    #[test]
    fn test_format_catalog_text_basic() {
        let output = create_test_output(vec![create_test_item("1", "Mug", 12.5)]);
        let formatted = format_catalog_text(&output);

        assert!(formatted.contains("PRODUCT CATALOG (Page 1 of 1)"));
        assert!(formatted.contains("Mug"));
        assert!(formatted.contains("12.50"));
        assert!(formatted.contains("in stock"));
    }

    #[test]
    fn test_format_catalog_text_empty() {
        let formatted = format_catalog_text(&create_test_output(vec![]));
        assert!(formatted.contains("No products on this page."));
    }

    #[test]
    fn test_format_catalog_text_missing_fields() {
        let item = CatalogItem {
            id: "5".to_string(),
            name: "Mystery".to_string(),
            slug: None,
            price: None,
            in_stock: None,
            published: None,
        };
        let formatted = format_catalog_text(&create_test_output(vec![item]));

        assert!(formatted.contains("Mystery"));
        assert!(formatted.contains('-'));
    }

    #[test]
    fn test_format_catalog_text_navigation() {
        let mut output = create_test_output(vec![create_test_item("1", "Mug", 12.5)]);
        output.pagination.current_page = 2;
        output.pagination.total_pages = 3;
        output.pagination.next_page_command =
            Some("storefront catalog list --page 3".to_string());
        output.pagination.prev_page_command =
            Some("storefront catalog list --page 1".to_string());

        let formatted = format_catalog_text(&output);

        assert!(formatted.contains("Page 2 of 3"));
        assert!(formatted.contains("storefront catalog list --page 3"));
        assert!(formatted.contains("storefront catalog list --page 1"));
    }

    #[test]
    fn test_format_catalog_json() {
        let output = create_test_output(vec![create_test_item("1", "Mug", 12.5)]);
        let json = serde_json::to_string_pretty(&output).unwrap();

        assert!(json.contains("\"name\": \"Mug\""));
        assert!(json.contains("\"pagination\""));
        assert!(json.contains("\"total_items\": 1"));
    }
}
