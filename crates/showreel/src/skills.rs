use crate::prelude::{println, *};
use colored::Colorize;

/// Skills commands
#[derive(Debug, clap::Parser)]
#[command(name = "skills")]
#[command(about = "Skills grouped by category")]
pub struct App {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the skills command
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching skills table...");
    }

    let data = crate::airtable::fetch_skills().await;

    if app.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!(
        "Found {} skill(s) across {} categories:\n",
        data.skills.len(),
        data.categories.len()
    );

    let mut table = new_table();
    table.add_row(prettytable::row!["Category", "Skills"]);

    for category in &data.categories {
        let names: Vec<&str> = data
            .skills
            .values()
            .filter(|skill| &skill.category == category)
            .map(|skill| skill.name.as_str())
            .collect();
        table.add_row(prettytable::row![category, names.join(", ")]);
    }

    table.printstd();

    if data.skills.is_empty() {
        println!(
            "\n{}",
            "Skills table unavailable; showing built-in categories only.".yellow()
        );
    }

    Ok(())
}
