use std::path::Path;

use bv_vault::GameRepository;

pub fn run(vault_path: &Path, id: &str) -> Result<(), String> {
    let mut vault = super::open_vault(vault_path)?;
    let id = vault.resolve(id).map_err(|e| e.to_string())?;
    let removed = vault.delete(id).map_err(|e| e.to_string())?;

    println!(
        "Deleted game {} from {} (score {})",
        removed.short_id(),
        removed.date.format("%Y-%m-%d"),
        removed.score
    );

    Ok(())
}
