use crate::prelude::{println, *};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use showreel_core::content::ContentItem;
use showreel_core::labels::{organize_skills_by_category, resolve_skill, skills_for_display};

/// Options for fetching a single content item
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct GetOptions {
    /// Content item slug (e.g. founder-at-acme)
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle the get command
pub async fn handler(options: GetOptions) -> Result<()> {
    let Some(item) = super::get_content_by_id_data(&options.id).await else {
        return Err(Error::NotFound(options.id).into());
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&item)?);
        return Ok(());
    }

    display_item(&item).await;

    Ok(())
}

/// Display a content item's details as a formatted CLI view.
async fn display_item(item: &ContentItem) {
    println!(
        "\n{} - {}\n",
        item.id.bold().cyan(),
        item.title.bright_white()
    );

    let mut table = new_table();

    if !item.company.is_empty() {
        table.add_row(prettytable::row![
            "Company".bold().cyan(),
            item.company.bright_white().to_string()
        ]);
    }

    table.add_row(prettytable::row![
        "Type".bold().cyan(),
        item.item_type.bright_blue().to_string()
    ]);
    table.add_row(prettytable::row![
        "Era".bold().cyan(),
        item.era.bright_yellow().to_string()
    ]);

    if !item.start_year.is_empty() {
        table.add_row(prettytable::row![
            "Start Year".bold().cyan(),
            item.start_year.to_string()
        ]);
    }

    table.add_row(prettytable::row![
        "Location".bold().cyan(),
        item.location.bright_magenta().to_string()
    ]);

    if item.is_founder {
        table.add_row(prettytable::row![
            "Founder".bold().cyan(),
            "yes".green().to_string()
        ]);
    }
    if item.is_hero {
        table.add_row(prettytable::row![
            "Hero".bold().cyan(),
            "yes".green().to_string()
        ]);
    }

    table.printstd();

    if !item.description.is_empty() {
        println!("\n{}:", "Description".bold().cyan());
        println!("{}\n", item.description);
    }

    let display_skills: Vec<String> = skills_for_display(item)
        .iter()
        .map(|skill| resolve_skill(skill))
        .collect();
    if !display_skills.is_empty() {
        let skills_data = crate::airtable::fetch_skills().await;
        let grouped = organize_skills_by_category(&display_skills, &skills_data.skills);

        println!("\n{}:", "Skills".bold().cyan());
        for group in grouped {
            println!(
                "  {}: {}",
                group.category.bright_blue(),
                group.skills.join(", ").bright_green()
            );
        }
    }

    if !item.tools.is_empty() {
        let names: Vec<&str> = item.tools.iter().map(|tool| tool.name.as_str()).collect();
        println!(
            "\n{}: {}",
            "Tools".bold().cyan(),
            names.join(", ").bright_blue()
        );
    }

    if !item.project_images.is_empty() {
        println!("\n{}:", "Project Images".bold().cyan());
        for image in &item.project_images {
            if image.caption.is_empty() {
                println!("  {}", image.url.cyan().underline());
            } else {
                println!(
                    "  {} ({})",
                    image.url.cyan().underline(),
                    image.caption.bright_black()
                );
            }
        }
    }

    println!();
}
