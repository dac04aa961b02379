use std::path::Path;

use bv_vault::{GameRepository, ModeFilter};
use comfy_table::{ContentArrangement, Table};

pub fn run(vault_path: &Path, mode: &str) -> Result<(), String> {
    let filter = mode.parse::<ModeFilter>().map_err(|e| e.to_string())?;
    let vault = super::open_vault(vault_path)?;
    let records: Vec<_> = vault
        .list()
        .map_err(|e| e.to_string())?
        .into_iter()
        .rev()
        .filter(|r| filter.matches(r.mode))
        .collect();

    if records.is_empty() {
        match filter {
            ModeFilter::All => println!("  No games saved."),
            _ => println!("  No {} games saved.", mode.trim().to_lowercase()),
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Date", "Score", "Mode", "Ball", "Lane", "Place"]);

    for record in &records {
        let score = if record.complete {
            record.score.to_string()
        } else {
            format!("{}*", record.score)
        };
        table.add_row(vec![
            record.short_id(),
            record.date.format("%Y-%m-%d %H:%M").to_string(),
            score,
            record.mode.to_string(),
            record.ball.clone(),
            record.lane.clone(),
            record.place.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} game{}",
        records.len(),
        if records.len() == 1 { "" } else { "s" }
    );
    if records.iter().any(|r| !r.complete) {
        println!("  * saved before the tenth frame was finished");
    }

    Ok(())
}
