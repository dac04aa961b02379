//! The storage interface for finished games.

use uuid::Uuid;

use crate::error::{VaultError, VaultResult};
use crate::record::GameRecord;

/// Append-only storage of finished games.
pub trait GameRepository {
    /// Store a record after the existing ones.
    fn save(&mut self, record: GameRecord) -> VaultResult<()>;

    /// All records, oldest first.
    fn list(&self) -> VaultResult<Vec<GameRecord>>;

    /// Replace the stored record that has the same id, keeping its place.
    fn update(&mut self, record: GameRecord) -> VaultResult<()>;

    /// Remove a record and return it.
    fn delete(&mut self, id: Uuid) -> VaultResult<GameRecord>;

    /// Remove every record, returning how many there were.
    fn clear(&mut self) -> VaultResult<usize>;

    /// Look up one record by id.
    fn get(&self, id: Uuid) -> VaultResult<GameRecord> {
        self.list()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| VaultError::RecordNotFound(id.to_string()))
    }

    /// Resolve a full id or a unique prefix of one.
    fn resolve(&self, prefix: &str) -> VaultResult<Uuid> {
        let needle = prefix.trim().to_lowercase().replace('-', "");
        if needle.is_empty() {
            return Err(VaultError::RecordNotFound(prefix.to_string()));
        }
        let mut matches = self
            .list()?
            .into_iter()
            .filter(|r| r.id.simple().to_string().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(record.id),
            (Some(_), Some(_)) => Err(VaultError::AmbiguousId(prefix.to_string())),
            (None, _) => Err(VaultError::RecordNotFound(prefix.to_string())),
        }
    }
}

/// A repository that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryVault {
    records: Vec<GameRecord>,
}

impl MemoryVault {
    /// Create an empty vault.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameRepository for MemoryVault {
    fn save(&mut self, record: GameRecord) -> VaultResult<()> {
        self.records.push(record);
        Ok(())
    }

    fn list(&self) -> VaultResult<Vec<GameRecord>> {
        Ok(self.records.clone())
    }

    fn update(&mut self, record: GameRecord) -> VaultResult<()> {
        replace_record(&mut self.records, record)
    }

    fn delete(&mut self, id: Uuid) -> VaultResult<GameRecord> {
        remove_record(&mut self.records, id)
    }

    fn clear(&mut self) -> VaultResult<usize> {
        let count = self.records.len();
        self.records.clear();
        Ok(count)
    }
}

pub(crate) fn replace_record(records: &mut [GameRecord], record: GameRecord) -> VaultResult<()> {
    let slot = records
        .iter_mut()
        .find(|r| r.id == record.id)
        .ok_or_else(|| VaultError::RecordNotFound(record.id.to_string()))?;
    *slot = record;
    Ok(())
}

pub(crate) fn remove_record(records: &mut Vec<GameRecord>, id: Uuid) -> VaultResult<GameRecord> {
    let index = records
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| VaultError::RecordNotFound(id.to_string()))?;
    Ok(records.remove(index))
}
