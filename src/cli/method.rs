//! Payment method CLI commands

use clap::Subcommand;

use crate::error::TallyResult;
use crate::services::MasterService;
use crate::storage::Storage;

/// Payment method subcommands
#[derive(Subcommand)]
pub enum MethodCommands {
    /// List all payment methods
    List,
    /// Add a payment method
    Add {
        /// Method name
        name: String,
    },
    /// Remove a payment method
    Remove {
        /// Method name
        name: String,
    },
}

/// Handle a payment method command
pub fn handle_method_command(storage: &Storage, cmd: MethodCommands) -> TallyResult<()> {
    let service = MasterService::new(storage);

    match cmd {
        MethodCommands::List => {
            let methods = service.methods()?;
            println!("Payment methods ({}):", methods.len());
            for name in methods {
                println!("  {}", name);
            }
        }

        MethodCommands::Add { name } => {
            service.add_method(&name)?;
            println!("Added payment method: {}", name.trim());
        }

        MethodCommands::Remove { name } => {
            service.remove_method(&name)?;
            println!("Removed payment method: {}", name.trim());
        }
    }

    Ok(())
}
