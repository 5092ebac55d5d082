//! Master data service
//!
//! Business logic for managing the category and payment method lists that
//! feed the entry form and the filter bar.

use crate::audit::EntityType;
use crate::error::TallyResult;
use crate::storage::Storage;

/// Service for category and payment method management
pub struct MasterService<'a> {
    storage: &'a Storage,
}

impl<'a> MasterService<'a> {
    /// Create a new master data service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List all categories, sorted by name
    pub fn categories(&self) -> TallyResult<Vec<String>> {
        self.storage.master.categories()
    }

    /// Add a category
    pub fn add_category(&self, name: &str) -> TallyResult<()> {
        let name = name.trim();
        self.storage.master.add_category(name)?;
        self.storage.master.save()?;

        self.storage
            .log_create(EntityType::Category, name, None, &name)?;
        Ok(())
    }

    /// Remove a category
    ///
    /// Records already carrying the category keep it; only the list feeding
    /// new entries changes.
    pub fn remove_category(&self, name: &str) -> TallyResult<()> {
        let name = name.trim();
        self.storage.master.remove_category(name)?;
        self.storage.master.save()?;

        self.storage
            .log_delete(EntityType::Category, name, None, &name)?;
        Ok(())
    }

    /// List all payment methods, sorted by name
    pub fn methods(&self) -> TallyResult<Vec<String>> {
        self.storage.master.methods()
    }

    /// Add a payment method
    pub fn add_method(&self, name: &str) -> TallyResult<()> {
        let name = name.trim();
        self.storage.master.add_method(name)?;
        self.storage.master.save()?;

        self.storage
            .log_create(EntityType::Method, name, None, &name)?;
        Ok(())
    }

    /// Remove a payment method
    pub fn remove_method(&self, name: &str) -> TallyResult<()> {
        let name = name.trim();
        self.storage.master.remove_method(name)?;
        self.storage.master.save()?;

        self.storage
            .log_delete(EntityType::Method, name, None, &name)?;
        Ok(())
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

    #[test]
    fn test_default_lists() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MasterService::new(&storage);

        assert_eq!(
            service.categories().unwrap(),
            vec!["Food", "Other", "Shopping", "Travel"]
        );
        assert_eq!(service.methods().unwrap(), vec!["Bank Transfer", "Cash"]);
    }

    #[test]
    fn test_add_and_remove_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MasterService::new(&storage);

        service.add_category("Health").unwrap();
        assert!(service.categories().unwrap().contains(&"Health".to_string()));

        service.remove_category("Health").unwrap();
        assert!(!service.categories().unwrap().contains(&"Health".to_string()));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MasterService::new(&storage);

        service.add_category("Health").unwrap();
        assert!(service.add_category("Health").is_err());
        // Input is trimmed before the duplicate check
        assert!(service.add_category("  Health  ").is_err());
    }

    #[test]
    fn test_remove_missing_method() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MasterService::new(&storage);

        let err = service.remove_method("Cheque").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_changes_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MasterService::new(&storage);

        service.add_category("Health").unwrap();
        service.add_method("Credit Card").unwrap();
        service.remove_category("Health").unwrap();

        assert_eq!(storage.audit().entry_count().unwrap(), 3);
    }
}
