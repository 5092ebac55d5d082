//! Category CLI commands

use clap::Subcommand;

use crate::error::TallyResult;
use crate::services::MasterService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,
    /// Add a category
    Add {
        /// Category name
        name: String,
    },
    /// Remove a category
    ///
    /// Existing records keep the category; only the list feeding new
    /// entries changes.
    Remove {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> TallyResult<()> {
    let service = MasterService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let categories = service.categories()?;
            println!("Categories ({}):", categories.len());
            for name in categories {
                println!("  {}", name);
            }
        }

        CategoryCommands::Add { name } => {
            service.add_category(&name)?;
            println!("Added category: {}", name.trim());
        }

        CategoryCommands::Remove { name } => {
            service.remove_category(&name)?;
            println!("Removed category: {}", name.trim());
        }
    }

    Ok(())
}
