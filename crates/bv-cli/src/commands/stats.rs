use std::path::Path;

use bv_vault::stats::average_score;
use bv_vault::{FrameStats, GameMode, GameRepository, LeagueSize, QuickStats};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(vault_path: &Path) -> Result<(), String> {
    let vault = super::open_vault(vault_path)?;
    let records = vault.list().map_err(|e| e.to_string())?;

    let quick = QuickStats::from_records(&records);
    println!("  {}", "Quick stats".bold());
    println!("  Games played:  {}", quick.games_played);
    println!("  Total pins:    {}", quick.total_pins);
    println!("  High game:     {}", quick.high_score);
    println!("  Low game:      {}", quick.low_score);
    println!(
        "  Favorite ball: {}",
        quick.favorite_ball.as_deref().unwrap_or("None")
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Mode", "Average"]);
    for mode in [
        GameMode::League(LeagueSize::TwoVsTwo),
        GameMode::League(LeagueSize::ThreeVsThree),
        GameMode::League(LeagueSize::FourVsFour),
        GameMode::Practice,
    ] {
        table.add_row(vec![
            mode.to_string(),
            format!("{:.1}", average_score(&records, mode)),
        ]);
    }
    println!("{table}");
    println!();

    let frames = FrameStats::from_records(&records);
    println!("  {}", "Frames".bold());
    println!("  Strikes: {:>3}%", frames.strike_pct());
    println!("  Spares:  {:>3}%", frames.spare_pct());
    println!("  Opens:   {:>3}%", frames.open_pct());

    Ok(())
}
