//! Record repository for JSON storage
//!
//! Manages loading and saving ledger records to records.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TallyError;
use crate::models::{Record, RecordId};
use crate::query::sort_newest_first;

use super::file_io::{read_json, write_json_atomic};

/// Serializable record data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct RecordData {
    records: Vec<Record>,
}

/// Repository for record persistence
pub struct RecordRepository {
    path: PathBuf,
    data: RwLock<HashMap<RecordId, Record>>,
}

impl RecordRepository {
    /// Create a new record repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load records from disk
    pub fn load(&self) -> Result<(), TallyError> {
        let file_data: RecordData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for record in file_data.records {
            data.insert(record.id, record);
        }

        Ok(())
    }

    /// Save records to disk
    ///
    /// Records are written newest-first so the file is pleasant to inspect
    /// by hand.
    pub fn save(&self) -> Result<(), TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut records);

        let file_data = RecordData { records };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a record by ID
    pub fn get(&self, id: RecordId) -> Result<Option<Record>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all records, newest first
    pub fn get_all(&self) -> Result<Vec<Record>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// Insert or update a record
    pub fn upsert(&self, record: Record) -> Result<(), TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(record.id, record);
        Ok(())
    }

    /// Delete a record
    pub fn delete(&self, id: RecordId) -> Result<bool, TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count records
    pub fn count(&self) -> Result<usize, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, RecordRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.json");
        let repo = RecordRepository::new(path);
        (temp_dir, repo)
    }

    fn sample_record(date: NaiveDate, item: &str) -> Record {
        let mut record = Record::new(date, item, vec!["Food".to_string()]);
        record.expense = Amount::from_cents(4000);
        record
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let record = sample_record(date, "Lunch");
        let id = record.id;

        repo.upsert(record).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.item, "Lunch");
        assert_eq!(retrieved.expense.cents(), 4000);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let record = sample_record(date, "Lunch");
        let id = record.id;

        repo.upsert(record).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("records.json");
        let repo2 = RecordRepository::new(path);
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.item, "Lunch");
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let record = sample_record(date, "Lunch");
        let id = record.id;

        repo.upsert(record).unwrap();
        assert_eq!(repo.count().unwrap(), 1);

        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);

        // Deleting again is a no-op
        assert!(!repo.delete(id).unwrap());
    }

    #[test]
    fn test_get_all_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let older = sample_record(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(), "Older");
        let newer = sample_record(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(), "Newer");

        repo.upsert(older).unwrap();
        repo.upsert(newer).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].item, "Newer");
        assert_eq!(all[1].item, "Older");
    }
}
