use std::path::Path;

use bv_vault::GameRepository;

pub fn run(vault_path: &Path, confirmed: bool) -> Result<(), String> {
    let mut vault = super::open_vault(vault_path)?;
    let count = vault.list().map_err(|e| e.to_string())?.len();

    if count == 0 {
        println!("  No games saved.");
        return Ok(());
    }
    if !confirmed {
        return Err(format!(
            "this deletes all {count} saved game{} and cannot be undone; rerun with --yes",
            if count == 1 { "" } else { "s" }
        ));
    }

    let cleared = vault.clear().map_err(|e| e.to_string())?;
    println!(
        "Cleared {cleared} game{}.",
        if cleared == 1 { "" } else { "s" }
    );

    Ok(())
}
