use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::channel::default_catalog;
use crate::error::{PlanError, PlanResult};
use crate::models::{Channel, HistoryRecord};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    hiring_data: Vec<HistoryRecord>,
    #[serde(default)]
    platform_data: Vec<Channel>,
}

/// History log kept as a single JSON document. Every mutation reads the
/// file, applies the change and writes it back whole.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Opens the store, creating the document with an empty history and the
    /// default channel catalog when either is missing.
    pub fn open(path: impl Into<PathBuf>) -> PlanResult<Self> {
        let store = Self { path: path.into() };
        store.init()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn init(&self) -> PlanResult<()> {
        let exists = self.path.exists();
        let mut document = if exists {
            self.read()?
        } else {
            StoreDocument::default()
        };

        if exists && !document.platform_data.is_empty() {
            return Ok(());
        }

        document.platform_data = default_catalog();
        info!("initialising history store at {}", self.path.display());
        self.write(&document)
    }

    fn read(&self) -> PlanResult<StoreDocument> {
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(StoreDocument::default());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn write(&self, document: &StoreDocument) -> PlanResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(document)?)?;
        Ok(())
    }

    pub fn list(&self) -> PlanResult<Vec<HistoryRecord>> {
        Ok(self.read()?.hiring_data)
    }

    /// Records ordered for display, most recent week first.
    pub fn list_recent_first(&self) -> PlanResult<Vec<HistoryRecord>> {
        let mut records = self.list()?;
        records.sort_by(|a, b| b.week_start_date.cmp(&a.week_start_date));
        Ok(records)
    }

    pub fn catalog(&self) -> PlanResult<Vec<Channel>> {
        Ok(self.read()?.platform_data)
    }

    /// Inserts the record, or overwrites the one already stored for the same
    /// week while keeping that record's id.
    pub fn upsert_by_week(&self, mut record: HistoryRecord) -> PlanResult<HistoryRecord> {
        let mut document = self.read()?;

        match document
            .hiring_data
            .iter_mut()
            .find(|existing| existing.week_start_date == record.week_start_date)
        {
            Some(existing) => {
                record.id = existing.id;
                *existing = record.clone();
                info!("updated history for week {}", record.week_start_date);
            }
            None => {
                document.hiring_data.push(record.clone());
                info!("added history for week {}", record.week_start_date);
            }
        }

        self.write(&document)?;
        Ok(record)
    }

    pub fn delete_by_id(&self, id: Uuid) -> PlanResult<()> {
        let mut document = self.read()?;
        let before = document.hiring_data.len();
        document.hiring_data.retain(|record| record.id != id);

        if document.hiring_data.len() == before {
            debug!("no history record with id {id}");
            return Err(PlanError::RecordNotFound { id });
        }

        self.write(&document)?;
        info!("deleted history record {id}");
        Ok(())
    }

    /// Drops every record and restores the default catalog.
    pub fn reset(&self) -> PlanResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        info!("cleared history store at {}", self.path.display());
        self.init()
    }
}
