//! Storage info command - shows file locations and the stored account count.

use amity::{Instance, StorageConfig, persistence::PersistenceGateway};

use crate::output::OutputFormat;

/// Run the info command
pub fn run(config: StorageConfig, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let gateway = PersistenceGateway::new(config)?;
    let primary = gateway.config().primary_path();
    let backup = gateway.config().backup_path();
    let has_primary = gateway.primary_exists();
    let has_backup = gateway.backup_exists();

    let instance = Instance::open(gateway)?;
    let accounts = instance.account_count();

    match format {
        OutputFormat::Human => {
            println!("Primary:   {} ({})", primary.display(), presence(has_primary));
            println!("Backup:    {} ({})", backup.display(), presence(has_backup));
            println!("Accounts:  {accounts}");
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "primary": primary,
                "primary_exists": has_primary,
                "backup": backup,
                "backup_exists": has_backup,
                "accounts": accounts,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}

fn presence(exists: bool) -> &'static str {
    if exists { "present" } else { "missing" }
}
