//! Master data repository for JSON storage
//!
//! Manages the user's category and payment method lists in master.json.
//! When a stored list is empty, reads fall back to a built-in default set
//! so a fresh installation is immediately usable.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TallyError;

use super::file_io::{read_json, write_json_atomic};

/// Default categories seeded for a fresh installation
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Food", "Travel", "Shopping", "Other"];

/// Default payment methods seeded for a fresh installation
pub const DEFAULT_METHODS: [&str; 2] = ["Cash", "Bank Transfer"];

/// Serializable master data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct MasterData {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub methods: Vec<String>,
}

impl MasterData {
    /// Master data pre-populated with the default lists
    pub fn with_defaults() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            methods: DEFAULT_METHODS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Repository for category and payment method persistence
pub struct MasterRepository {
    path: PathBuf,
    data: RwLock<MasterData>,
}

impl MasterRepository {
    /// Create a new master data repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(MasterData::default()),
        }
    }

    /// Load master data from disk
    pub fn load(&self) -> Result<(), TallyError> {
        let file_data: MasterData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data;
        Ok(())
    }

    /// Save master data to disk
    pub fn save(&self) -> Result<(), TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get all categories, sorted by name
    ///
    /// Falls back to the default categories when the stored list is empty.
    pub fn categories(&self) -> Result<Vec<String>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut names = if data.categories.is_empty() {
            DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()
        } else {
            data.categories.clone()
        };
        names.sort();
        Ok(names)
    }

    /// Get all payment methods, sorted by name
    ///
    /// Falls back to the default methods when the stored list is empty.
    pub fn methods(&self) -> Result<Vec<String>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut names = if data.methods.is_empty() {
            DEFAULT_METHODS.iter().map(|s| s.to_string()).collect()
        } else {
            data.methods.clone()
        };
        names.sort();
        Ok(names)
    }

    /// Add a category
    ///
    /// Returns an error if a category with the same name already exists.
    pub fn add_category(&self, name: &str) -> Result<(), TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.categories.is_empty() {
            data.categories = DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect();
        }

        if data.categories.iter().any(|c| c == name) {
            return Err(TallyError::duplicate("Category", name));
        }

        data.categories.push(name.to_string());
        Ok(())
    }

    /// Remove a category
    ///
    /// Returns an error if no category with that name exists.
    pub fn remove_category(&self, name: &str) -> Result<(), TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.categories.is_empty() {
            data.categories = DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect();
        }

        let before = data.categories.len();
        data.categories.retain(|c| c != name);

        if data.categories.len() == before {
            return Err(TallyError::category_not_found(name));
        }
        Ok(())
    }

    /// Add a payment method
    ///
    /// Returns an error if a method with the same name already exists.
    pub fn add_method(&self, name: &str) -> Result<(), TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.methods.is_empty() {
            data.methods = DEFAULT_METHODS.iter().map(|s| s.to_string()).collect();
        }

        if data.methods.iter().any(|m| m == name) {
            return Err(TallyError::duplicate("Payment method", name));
        }

        data.methods.push(name.to_string());
        Ok(())
    }

    /// Remove a payment method
    ///
    /// Returns an error if no method with that name exists.
    pub fn remove_method(&self, name: &str) -> Result<(), TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.methods.is_empty() {
            data.methods = DEFAULT_METHODS.iter().map(|s| s.to_string()).collect();
        }

        let before = data.methods.len();
        data.methods.retain(|m| m != name);

        if data.methods.len() == before {
            return Err(TallyError::method_not_found(name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, MasterRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("master.json");
        let repo = MasterRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_defaults_when_empty() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let categories = repo.categories().unwrap();
        assert_eq!(categories, vec!["Food", "Other", "Shopping", "Travel"]);

        let methods = repo.methods().unwrap();
        assert_eq!(methods, vec!["Bank Transfer", "Cash"]);
    }

    #[test]
    fn test_add_category() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.add_category("Health").unwrap();

        let categories = repo.categories().unwrap();
        assert!(categories.contains(&"Health".to_string()));
        // Defaults were materialized before the add
        assert!(categories.contains(&"Food".to_string()));
    }

    #[test]
    fn test_add_duplicate_category_fails() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.add_category("Health").unwrap();
        let err = repo.add_category("Health").unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_remove_category() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.remove_category("Food").unwrap();

        let categories = repo.categories().unwrap();
        assert!(!categories.contains(&"Food".to_string()));
        assert!(categories.contains(&"Travel".to_string()));
    }

    #[test]
    fn test_remove_missing_category_fails() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let err = repo.remove_category("Nonexistent").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_methods_add_remove() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.add_method("Credit Card").unwrap();
        assert!(repo.methods().unwrap().contains(&"Credit Card".to_string()));

        repo.remove_method("Cash").unwrap();
        assert!(!repo.methods().unwrap().contains(&"Cash".to_string()));
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.add_category("Health").unwrap();
        repo.save().unwrap();

        let repo2 = MasterRepository::new(temp_dir.path().join("master.json"));
        repo2.load().unwrap();

        assert!(repo2.categories().unwrap().contains(&"Health".to_string()));
    }

    #[test]
    fn test_sorted_output() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.add_category("Zoo").unwrap();
        repo.add_category("Apples").unwrap();

        let categories = repo.categories().unwrap();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }
}
