//! Purge command - deletes the stored account table without loading it.

use amity::{StorageConfig, persistence::PersistenceGateway};

use crate::output::OutputFormat;

/// Run the `purge` command
pub fn run(config: StorageConfig, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let gateway = PersistenceGateway::new(config)?;
    gateway.purge()?;

    let dir = gateway.config().data_dir();
    match format {
        OutputFormat::Human => println!("Purged stored data in {}", dir.display()),
        OutputFormat::Json => {
            let value = serde_json::json!({ "purged": dir });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
