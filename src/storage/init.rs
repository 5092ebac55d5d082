//! Storage initialization
//!
//! Handles first-run setup and default data creation

use crate::config::paths::TallyPaths;
use crate::error::TallyError;

use super::file_io::write_json_atomic;
use super::master::MasterData;

/// Initialize storage for a fresh installation
///
/// Creates the directory structure and seeds master.json with the default
/// category and payment method lists.
pub fn initialize_storage(paths: &TallyPaths) -> Result<(), TallyError> {
    paths.ensure_directories()?;

    if !paths.master_file().exists() {
        write_json_atomic(paths.master_file(), &MasterData::with_defaults())?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &TallyPaths) -> bool {
    !paths.master_file().exists()
}
