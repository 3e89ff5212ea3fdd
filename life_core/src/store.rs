// store.rs - Pattern stores: where saved grids live

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::codec::{decode_records, encode_records, PatternRecord};
use crate::error::{LifeError, Result};

/// Keyed collection of saved patterns.
pub trait PatternStore {
    /// All records in insertion order.
    fn list(&self) -> Result<Vec<PatternRecord>>;

    fn append(&mut self, record: PatternRecord) -> Result<()>;

    /// Looks a record up by identifier; absent ids yield `PatternNotFound`.
    fn get(&self, id: u32) -> Result<PatternRecord> {
        self.list()?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or(LifeError::PatternNotFound(id))
    }
}

/// In-process store, used by tests and the headless runner.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<PatternRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[PatternRecord] {
        &self.records
    }
}

impl PatternStore for MemoryStore {
    fn list(&self) -> Result<Vec<PatternRecord>> {
        Ok(self.records.clone())
    }

    fn append(&mut self, record: PatternRecord) -> Result<()> {
        self.records.push(record);
        Ok(())
    }
}

/// Whole collection serialized as one JSON array in a single file.
/// A missing file is an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PatternStore for JsonFileStore {
    fn list(&self) -> Result<Vec<PatternRecord>> {
        match fs::read(&self.path) {
            Ok(bytes) => decode_records(&bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn append(&mut self, record: PatternRecord) -> Result<()> {
        let mut records = self.list()?;
        records.push(record);
        fs::write(&self.path, encode_records(&records)?)?;
        debug!("wrote {} patterns to {}", records.len(), self.path.display());
        Ok(())
    }
}
