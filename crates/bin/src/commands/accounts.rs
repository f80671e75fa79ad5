//! Account listing command.

use amity::{Instance, StorageConfig};

use crate::output::{OutputFormat, print_table};

/// Run the `accounts` command
pub fn run(config: StorageConfig, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let instance = Instance::open_in(config)?;

    let mut accounts = instance.accounts();
    accounts.sort_by(|a, b| a.login().cmp(b.login()));

    match format {
        OutputFormat::Human => {
            if accounts.is_empty() {
                println!("No accounts found.");
                return Ok(());
            }

            let rows: Vec<Vec<String>> = accounts
                .iter()
                .map(|account| {
                    vec![
                        account.login().to_string(),
                        account.display_name().to_string(),
                        account.friendships().friend_count().to_string(),
                        account.friendships().pending_invites().len().to_string(),
                        account.inbox().len().to_string(),
                    ]
                })
                .collect();
            print_table(&["LOGIN", "NAME", "FRIENDS", "INVITES", "UNREAD"], &rows);
        }
        OutputFormat::Json => {
            let entries: Vec<_> = accounts
                .iter()
                .map(|account| {
                    serde_json::json!({
                        "login": account.login(),
                        "name": account.display_name(),
                        "friends": account.ordered_friends(),
                        "invites": account.friendships().pending_invites(),
                        "unread": account.inbox().len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&entries)?);
        }
    }

    Ok(())
}
