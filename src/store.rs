//! In-memory store backed by a JSON snapshot of the backend data.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::model::{PathRecord, ReceptionPoint, Totem};
use crate::traits::SpatialPointStore;

/// Snapshot of every campus: `{"totems": [...], "receptions": [...], "paths": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    pub totems: Vec<Totem>,
    #[serde(default)]
    pub receptions: Vec<ReceptionPoint>,
    #[serde(default)]
    pub paths: Vec<PathRecord>,
}

impl MemoryStore {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn with_path(mut self, path: PathRecord) -> Self {
        self.paths.push(path);
        self
    }

    pub fn with_totem(mut self, totem: Totem) -> Self {
        self.totems.push(totem);
        self
    }

    pub fn with_reception(mut self, reception: ReceptionPoint) -> Self {
        self.receptions.push(reception);
        self
    }
}

impl SpatialPointStore for MemoryStore {
    fn list_paths(&self, campus: &str) -> Result<Vec<PathRecord>, StoreError> {
        Ok(self.paths.iter().filter(|p| p.campus == campus).cloned().collect())
    }

    fn list_totems(&self, campus: &str) -> Result<Vec<Totem>, StoreError> {
        Ok(self.totems.iter().filter(|t| t.campus == campus).cloned().collect())
    }

    fn list_receptions(&self, campus: &str) -> Result<Vec<ReceptionPoint>, StoreError> {
        Ok(self.receptions.iter().filter(|r| r.campus == campus).cloned().collect())
    }

    fn get_totem(&self, id: i64) -> Result<Totem, StoreError> {
        self.totems
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::TotemNotFound(id))
    }
}
