//! Record service
//!
//! Provides business logic for ledger record management: creation, lookup,
//! filtered listing, updates, and deletion, with audit logging throughout.

use chrono::{Local, NaiveDate, Utc};

use crate::audit::EntityType;
use crate::error::{TallyError, TallyResult};
use crate::models::{Amount, Record, RecordId};
use crate::query::{self, PageRequest, QueryOutput, RecordFilter};
use crate::storage::Storage;

/// Service for record management
pub struct RecordService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new record
#[derive(Debug, Clone)]
pub struct CreateRecordInput {
    /// Entry date; defaults to today when not given
    pub date: Option<NaiveDate>,
    pub item: String,
    pub categories: Vec<String>,
    pub method: String,
    pub income: Option<Amount>,
    pub expense: Option<Amount>,
    pub note: Option<String>,
}

/// Input for updating an existing record
///
/// `None` fields are left unchanged. Setting an income clears the expense
/// and vice versa, mirroring the entry form's either/or rule.
#[derive(Debug, Clone, Default)]
pub struct UpdateRecordInput {
    pub date: Option<NaiveDate>,
    pub item: Option<String>,
    pub categories: Option<Vec<String>>,
    pub method: Option<String>,
    pub income: Option<Amount>,
    pub expense: Option<Amount>,
    pub note: Option<String>,
}

impl<'a> RecordService<'a> {
    /// Create a new record service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new record
    pub fn create(&self, input: CreateRecordInput) -> TallyResult<Record> {
        if input.income.is_some() && input.expense.is_some() {
            return Err(TallyError::Validation(
                "A record carries either an income or an expense, not both".into(),
            ));
        }

        let date = input.date.unwrap_or_else(|| Local::now().date_naive());

        let mut record = Record::new(date, input.item.trim(), input.categories);
        record.method = input.method.trim().to_string();
        record.income = input.income.unwrap_or_else(Amount::zero);
        record.expense = input.expense.unwrap_or_else(Amount::zero);
        if let Some(note) = input.note {
            record.note = note;
        }

        // Stamped exactly once, here; updates never touch it
        record.created_at = Some(Utc::now());

        record
            .validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        self.storage.records.upsert(record.clone())?;
        self.storage.records.save()?;

        self.storage.log_create(
            EntityType::Record,
            record.id.to_string(),
            Some(record.item.clone()),
            &record,
        )?;

        Ok(record)
    }

    /// Get a record by ID
    pub fn get(&self, id: RecordId) -> TallyResult<Option<Record>> {
        self.storage.records.get(id)
    }

    /// Find a record by ID string
    pub fn find(&self, identifier: &str) -> TallyResult<Option<Record>> {
        if let Ok(id) = identifier.parse::<RecordId>() {
            return self.storage.records.get(id);
        }
        Ok(None)
    }

    /// List records matching a filter, newest first, without pagination
    pub fn list(&self, filter: &RecordFilter) -> TallyResult<Vec<Record>> {
        let records = self.storage.records.get_all()?;
        Ok(query::matched_sorted(&records, filter))
    }

    /// Run the full query pipeline: one display page plus filter-wide totals
    pub fn query(&self, filter: &RecordFilter, request: PageRequest) -> TallyResult<QueryOutput> {
        let records = self.storage.records.get_all()?;
        Ok(query::run(&records, filter, request))
    }

    /// Update a record
    pub fn update(&self, id: RecordId, input: UpdateRecordInput) -> TallyResult<Record> {
        let mut record = self
            .storage
            .records
            .get(id)?
            .ok_or_else(|| TallyError::record_not_found(id.to_string()))?;

        if input.income.is_some() && input.expense.is_some() {
            return Err(TallyError::Validation(
                "A record carries either an income or an expense, not both".into(),
            ));
        }

        let before = record.clone();

        if let Some(new_date) = input.date {
            record.date = new_date;
        }
        if let Some(new_item) = input.item {
            record.item = new_item.trim().to_string();
        }
        if let Some(new_categories) = input.categories {
            record.categories = new_categories.into();
        }
        if let Some(new_method) = input.method {
            record.method = new_method.trim().to_string();
        }
        if let Some(new_income) = input.income {
            record.income = new_income;
            record.expense = Amount::zero();
        }
        if let Some(new_expense) = input.expense {
            record.expense = new_expense;
            record.income = Amount::zero();
        }
        if let Some(new_note) = input.note {
            record.note = new_note;
        }

        record
            .validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        self.storage.records.upsert(record.clone())?;
        self.storage.records.save()?;

        // Build diff summary
        let mut changes = Vec::new();
        if before.date != record.date {
            changes.push(format!("date: {} -> {}", before.date, record.date));
        }
        if before.item != record.item {
            changes.push(format!("item: '{}' -> '{}'", before.item, record.item));
        }
        if before.categories != record.categories {
            changes.push(format!(
                "category: [{}] -> [{}]",
                before.categories, record.categories
            ));
        }
        if before.method != record.method {
            changes.push(format!("method: '{}' -> '{}'", before.method, record.method));
        }
        if before.income != record.income {
            changes.push(format!("income: {} -> {}", before.income, record.income));
        }
        if before.expense != record.expense {
            changes.push(format!("expense: {} -> {}", before.expense, record.expense));
        }
        if before.note != record.note {
            changes.push("note changed".to_string());
        }

        let diff = if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        };

        self.storage.log_update(
            EntityType::Record,
            record.id.to_string(),
            Some(record.item.clone()),
            &before,
            &record,
            diff,
        )?;

        Ok(record)
    }

    /// Delete a record
    pub fn delete(&self, id: RecordId) -> TallyResult<Record> {
        let record = self
            .storage
            .records
            .get(id)?
            .ok_or_else(|| TallyError::record_not_found(id.to_string()))?;

        self.storage.records.delete(id)?;
        self.storage.records.save()?;

        self.storage.log_delete(
            EntityType::Record,
            id.to_string(),
            Some(record.item.clone()),
            &record,
        )?;

        Ok(record)
    }

    /// Count records
    pub fn count(&self) -> TallyResult<usize> {
        self.storage.records.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TallyPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn expense_input(item: &str, cents: i64) -> CreateRecordInput {
        CreateRecordInput {
            date: Some(NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()),
            item: item.to_string(),
            categories: vec!["Food".to_string()],
            method: "Cash".to_string(),
            income: None,
            expense: Some(Amount::from_cents(cents)),
            note: None,
        }
    }

    #[test]
    fn test_create_record() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecordService::new(&storage);

        let record = service.create(expense_input("Lunch", 4000)).unwrap();

        assert_eq!(record.item, "Lunch");
        assert_eq!(record.expense.cents(), 4000);
        assert!(record.income.is_zero());
        assert!(record.created_at.is_some());
    }

    #[test]
    fn test_create_rejects_both_amounts() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecordService::new(&storage);

        let mut input = expense_input("Lunch", 4000);
        input.income = Some(Amount::from_cents(10000));

        let err = service.create(input).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_create_requires_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecordService::new(&storage);

        let mut input = expense_input("Lunch", 4000);
        input.categories = vec![];

        let err = service.create(input).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_find_by_id_string() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecordService::new(&storage);

        let record = service.create(expense_input("Lunch", 4000)).unwrap();

        let found = service.find(&record.id.to_string()).unwrap();
        assert!(found.is_some());

        let missing = service.find("not-an-id").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_update_record() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecordService::new(&storage);

        let record = service.create(expense_input("Lunch", 4000)).unwrap();
        let created_at = record.created_at;

        let updated = service
            .update(
                record.id,
                UpdateRecordInput {
                    item: Some("Dinner".to_string()),
                    expense: Some(Amount::from_cents(6500)),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.item, "Dinner");
        assert_eq!(updated.expense.cents(), 6500);
        // created_at is never touched on update
        assert_eq!(updated.created_at, created_at);
    }

    #[test]
    fn test_update_income_clears_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecordService::new(&storage);

        let record = service.create(expense_input("Refund", 4000)).unwrap();

        let updated = service
            .update(
                record.id,
                UpdateRecordInput {
                    income: Some(Amount::from_cents(4000)),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.income.cents(), 4000);
        assert!(updated.expense.is_zero());
    }

    #[test]
    fn test_update_missing_record() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecordService::new(&storage);

        let err = service
            .update(RecordId::new(), UpdateRecordInput::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_record() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecordService::new(&storage);

        let record = service.create(expense_input("Lunch", 4000)).unwrap();
        assert_eq!(service.count().unwrap(), 1);

        service.delete(record.id).unwrap();
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_list_with_filter() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecordService::new(&storage);

        service.create(expense_input("Lunch", 4000)).unwrap();

        let mut salary = expense_input("Salary", 0);
        salary.categories = vec!["Other".to_string()];
        salary.income = Some(Amount::from_cents(100000));
        salary.expense = None;
        service.create(salary).unwrap();

        let all = service.list(&RecordFilter::new()).unwrap();
        assert_eq!(all.len(), 2);

        let food = service
            .list(&RecordFilter::new().category("Food"))
            .unwrap();
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].item, "Lunch");
    }

    #[test]
    fn test_query_paginates_and_totals() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecordService::new(&storage);

        for i in 1..=15 {
            service.create(expense_input(&format!("Item {}", i), 100)).unwrap();
        }

        let output = service
            .query(&RecordFilter::new(), PageRequest::new(2, 10))
            .unwrap();

        assert_eq!(output.page.items.len(), 5);
        assert_eq!(output.page.total_pages, 2);
        assert_eq!(output.totals.expense.cents(), 1500);
    }

    #[test]
    fn test_audit_trail_written() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecordService::new(&storage);

        let record = service.create(expense_input("Lunch", 4000)).unwrap();
        service
            .update(
                record.id,
                UpdateRecordInput {
                    item: Some("Dinner".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        service.delete(record.id).unwrap();

        assert_eq!(storage.audit().entry_count().unwrap(), 3);
    }
}
