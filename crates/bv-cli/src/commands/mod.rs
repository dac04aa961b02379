pub mod clear;
pub mod delete;
pub mod edit;
pub mod list;
pub mod play;
pub mod score;
pub mod show;
pub mod stats;

use std::path::Path;

use bv_core::{FRAME_COUNT, Frame, Score};
use bv_vault::JsonVault;
use comfy_table::{CellAlignment, ContentArrangement, Table};

/// Open the vault file, mapping errors for display.
fn open_vault(path: &Path) -> Result<JsonVault, String> {
    tracing::debug!(path = %path.display(), "opening vault");
    JsonVault::open(path).map_err(|e| format!("cannot open vault {}: {e}", path.display()))
}

/// Render frames and running totals as a scoresheet.
fn render_board(frames: &[Frame], score: &Score) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header: Vec<String> = (1..=FRAME_COUNT).map(|n| n.to_string()).collect();
    header.push("Total".to_string());
    table.set_header(header);

    let mut marks: Vec<String> = (0..FRAME_COUNT)
        .map(|i| frames.get(i).map(Frame::to_string).unwrap_or_default())
        .collect();
    marks.push(String::new());
    table.add_row(marks);

    let mut running: Vec<String> = score
        .cumulative
        .iter()
        .map(|c| c.map(|v| v.to_string()).unwrap_or_default())
        .collect();
    running.push(score.total.to_string());
    table.add_row(running);

    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Center);
    }

    table.to_string()
}
