//! A repository backed by a single JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::VaultResult;
use crate::record::GameRecord;
use crate::repository::{GameRepository, remove_record, replace_record};
use crate::setup::UNKNOWN;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct VaultFile {
    #[serde(default)]
    games: Vec<GameRecord>,
    #[serde(default)]
    last_lane: Option<String>,
    #[serde(default)]
    last_place: Option<String>,
}

/// Game records stored as pretty-printed JSON on disk.
///
/// The file is read once when opened and rewritten after every change. It
/// is only created by the first write.
#[derive(Debug)]
pub struct JsonVault {
    path: PathBuf,
    data: VaultFile,
}

impl JsonVault {
    /// Open the vault at `path`, starting empty if the file does not exist.
    ///
    /// Fails if any stored game holds frames no real game could produce.
    pub fn open(path: impl Into<PathBuf>) -> VaultResult<Self> {
        let path = path.into();
        let data: VaultFile = if path.exists() {
            let text = fs::read_to_string(&path)?;
            if text.trim().is_empty() {
                VaultFile::default()
            } else {
                serde_json::from_str(&text)?
            }
        } else {
            VaultFile::default()
        };
        for record in &data.games {
            record.validate()?;
        }
        debug!(path = %path.display(), games = data.games.len(), "opened vault");
        Ok(Self { path, data })
    }

    /// Location of the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lane of the most recently saved game, if one was known.
    pub fn last_lane(&self) -> Option<&str> {
        self.data.last_lane.as_deref()
    }

    /// Place of the most recently saved game, if one was known.
    pub fn last_place(&self) -> Option<&str> {
        self.data.last_place.as_deref()
    }

    fn flush(&self) -> VaultResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl GameRepository for JsonVault {
    fn save(&mut self, record: GameRecord) -> VaultResult<()> {
        info!(id = %record.id, score = record.score, "saving game");
        if record.lane != UNKNOWN {
            self.data.last_lane = Some(record.lane.clone());
        }
        if record.place != UNKNOWN {
            self.data.last_place = Some(record.place.clone());
        }
        self.data.games.push(record);
        self.flush()
    }

    fn list(&self) -> VaultResult<Vec<GameRecord>> {
        Ok(self.data.games.clone())
    }

    fn update(&mut self, record: GameRecord) -> VaultResult<()> {
        let id = record.id;
        replace_record(&mut self.data.games, record)?;
        info!(%id, "updated game");
        self.flush()
    }

    fn delete(&mut self, id: Uuid) -> VaultResult<GameRecord> {
        let removed = remove_record(&mut self.data.games, id)?;
        info!(%id, "deleted game");
        self.flush()?;
        Ok(removed)
    }

    fn clear(&mut self) -> VaultResult<usize> {
        let count = self.data.games.len();
        if count == 0 {
            return Ok(0);
        }
        self.data.games.clear();
        info!(count, "cleared all games");
        self.flush()?;
        Ok(count)
    }
}
