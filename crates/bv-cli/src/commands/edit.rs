use std::path::Path;

use bv_vault::{GameEdit, GameRepository, parse_date};

/// Field changes collected from the command line.
pub struct EditOptions {
    pub date: Option<String>,
    pub ball: Option<String>,
    pub lane: Option<String>,
    pub place: Option<String>,
    pub score: Option<u32>,
}

pub fn run(vault_path: &Path, id: &str, options: EditOptions) -> Result<(), String> {
    let edit = GameEdit {
        date: options
            .date
            .as_deref()
            .map(parse_date)
            .transpose()
            .map_err(|e| e.to_string())?,
        ball: options.ball,
        lane: options.lane,
        place: options.place,
        score: options.score,
    };
    if edit.is_empty() {
        return Err("nothing to change (use --date, --ball, --lane, --place, or --score)".to_string());
    }

    let mut vault = super::open_vault(vault_path)?;
    let mut record = vault
        .resolve(id)
        .and_then(|id| vault.get(id))
        .map_err(|e| e.to_string())?;
    record.apply(edit).map_err(|e| e.to_string())?;

    let summary = format!(
        "Updated game {} from {} (score {}, {} on lane {} @ {})",
        record.short_id(),
        record.date.format("%Y-%m-%d"),
        record.score,
        record.ball,
        record.lane,
        record.place
    );
    vault.update(record).map_err(|e| e.to_string())?;
    println!("{summary}");

    Ok(())
}
