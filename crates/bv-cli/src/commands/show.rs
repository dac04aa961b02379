use std::path::Path;

use bv_vault::GameRepository;
use colored::Colorize;

pub fn run(vault_path: &Path, id: &str) -> Result<(), String> {
    let vault = super::open_vault(vault_path)?;
    let record = vault
        .resolve(id)
        .and_then(|id| vault.get(id))
        .map_err(|e| e.to_string())?;

    println!("  {} {}", "Game".bold(), record.id);
    println!("  Date:  {}", record.date.format("%Y-%m-%d %H:%M UTC"));
    println!("  Mode:  {}", record.mode);
    println!("  Ball:  {}", record.ball);
    println!("  Lane:  {} @ {}", record.lane, record.place);
    if !record.complete {
        println!("  Saved before the tenth frame was finished.");
    }
    if !record.players.is_empty() {
        println!("  With:  {}", record.players.join(", "));
    }
    println!();
    println!("{}", super::render_board(&record.frames, &record.score_card()));
    println!();
    println!("  Score: {}", record.score.to_string().bold());

    Ok(())
}
