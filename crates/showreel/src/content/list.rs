use crate::prelude::{println, *};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use showreel_core::content::ContentItem;

/// Options for listing content items
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct ListOptions {
    /// Only show items of this type (e.g. Professional, Education)
    #[arg(short = 't', long = "type")]
    pub item_type: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle the list command
pub async fn handler(options: ListOptions) -> Result<()> {
    let data = super::get_all_content_data().await;

    let items: Vec<ContentItem> = match &options.item_type {
        Some(wanted) => data
            .items
            .into_iter()
            .filter(|item| item.item_type.eq_ignore_ascii_case(wanted))
            .collect(),
        None => data.items,
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!("Found {} content item(s):\n", items.len());

    if items.is_empty() {
        println!("No content items found.");
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Slug", "Title", "Company", "Type", "Era", "Year"
    ]);

    for item in &items {
        table.add_row(prettytable::row![
            &item.id,
            &item.title,
            &item.company,
            &item.item_type,
            &item.era,
            &item.start_year
        ]);
    }

    table.printstd();

    let heroes = items.iter().filter(|item| item.is_hero).count();
    if heroes > 0 {
        println!("\n{}: {}", "Hero items".bold().cyan(), heroes);
    }

    println!(
        "\n{}: {}",
        "To inspect an item".bold().cyan(),
        "showreel content get <slug>".cyan()
    );

    Ok(())
}
