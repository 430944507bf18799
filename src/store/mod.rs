//! Flat-file record store
//!
//! Records live in a single JSON file, read and rewritten wholesale on each
//! change. A missing or unreadable file is treated as an empty store; writes
//! go through a temp file plus atomic rename so a crash mid-write leaves the
//! previous contents intact. The external format is unchanged by the rename
//! scheme.

use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Storage errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// JSON-file backed record store
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records. Fails soft: a missing or malformed file yields an
    /// empty sequence.
    pub fn load(&self) -> Vec<Record> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "record file not readable, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(records) => records,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "record file malformed, treating as empty");
                Vec::new()
            }
        }
    }

    /// Serialize the full sequence, replacing the backing file atomically
    pub fn save(&self, records: &[Record]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), count = records.len(), "saved records");
        Ok(())
    }

    /// Drop every record ("Limpar Rede")
    pub fn clear(&self) -> StoreResult<()> {
        self.save(&[])
    }
}

/// Upsert a record into the sequence.
///
/// Pure function: matches on the case-insensitive (luta, brincadeira) key;
/// on a match, unions each skill group into the existing record, otherwise
/// appends the new one.
pub fn upsert(mut records: Vec<Record>, mut new: Record) -> Vec<Record> {
    new.normalize();
    for existing in records.iter_mut() {
        if existing.same_pair(&new) {
            existing.merge(&new);
            return records;
        }
    }
    records.push(new);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(luta: &str, brincadeira: &str, skills: &[&str]) -> Record {
        let mut r = Record::new(luta, brincadeira);
        r.add_skills("hab_tecnicas_of", skills.iter().copied());
        r
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("dados.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dados.json");
        fs::write(&path, "{ not json").unwrap();
        let store = RecordStore::new(path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_load_round_trip_is_fixed_point() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("dados.json"));

        let mut r = record("Judô", "Queda de braço", &["projetar", "chutar"]);
        r.add_skills("hab_taticas_def", ["marcação"]);
        store.save(&[r.clone()]).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, vec![r]);

        // saving an unmodified loaded store reproduces the bytes
        let before = fs::read_to_string(store.path()).unwrap();
        store.save(&loaded).unwrap();
        let after = fs::read_to_string(store.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_save_writes_sorted_groups() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("dados.json"));
        store
            .save(&[record("Judô", "Queda", &["z-skill", "a-skill"])])
            .unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        let a = text.find("a-skill").unwrap();
        let z = text.find("z-skill").unwrap();
        assert!(a < z);
    }

    #[test]
    fn test_upsert_appends_new_pair() {
        let records = upsert(Vec::new(), record("Judô", "Queda", &["projetar"]));
        let records = upsert(records, record("Capoeira", "Roda", &["esquivar"]));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_upsert_merges_same_pair_case_insensitively() {
        let records = upsert(Vec::new(), record("Judô", "Queda", &["projetar"]));
        let records = upsert(records, record("  judô", "QUEDA", &["chutar"]));

        assert_eq!(records.len(), 1);
        let merged: Vec<&str> = records[0].skills["hab_tecnicas_of"]
            .iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(merged, vec!["chutar", "projetar"]);
        // the original spelling of the first record wins
        assert_eq!(records[0].luta, "Judô");
    }

    #[test]
    fn test_upsert_normalizes_before_append() {
        let records = upsert(Vec::new(), record(" Judô ", " Queda ", &[" projetar "]));
        assert_eq!(records[0].luta, "Judô");
        assert_eq!(records[0].brincadeira, "Queda");
        assert!(records[0].skills["hab_tecnicas_of"].contains("projetar"));
    }
}
