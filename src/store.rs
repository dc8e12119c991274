//! In-memory cascade record store.
//!
//! The coaching core only ever reads a snapshot of the answer set; this
//! store exists so the HTTP surface can offer the same create/get/
//! update/delete surface the wizard expects. Records are scoped to an
//! owner; a record that exists under a different owner is reported as
//! missing, not forbidden.

use crate::cascade::{Cascade, CascadeRecord};
use crate::error::{CoachError, Result};
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

const DEFAULT_NAME: &str = "Untitled Strategy";

#[derive(Default)]
pub struct CascadeStore {
    records: RwLock<HashMap<Uuid, CascadeRecord>>,
}

impl CascadeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, owner: &str, name: Option<String>) -> CascadeRecord {
        let now = Utc::now();
        let record = CascadeRecord {
            id: Uuid::new_v4(),
            owner: owner.to_string(),
            name: name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            cascade: Cascade::default(),
            created_at: now,
            updated_at: now,
        };
        self.records
            .write()
            .await
            .insert(record.id, record.clone());
        record
    }

    pub async fn get(&self, owner: &str, id: Uuid) -> Result<CascadeRecord> {
        self.records
            .read()
            .await
            .get(&id)
            .filter(|r| r.owner == owner)
            .cloned()
            .ok_or_else(|| CoachError::NotFound { id: id.to_string() })
    }

    pub async fn update(
        &self,
        owner: &str,
        id: Uuid,
        name: Option<String>,
        cascade: Option<Cascade>,
    ) -> Result<CascadeRecord> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&id)
            .filter(|r| r.owner == owner)
            .ok_or_else(|| CoachError::NotFound { id: id.to_string() })?;
        if let Some(name) = name {
            record.name = name;
        }
        if let Some(cascade) = cascade {
            record.cascade = cascade;
        }
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    pub async fn delete(&self, owner: &str, id: Uuid) -> Result<()> {
        let mut records = self.records.write().await;
        match records.get(&id) {
            Some(r) if r.owner == owner => {
                records.remove(&id);
                Ok(())
            }
            _ => Err(CoachError::NotFound { id: id.to_string() }),
        }
    }
}
