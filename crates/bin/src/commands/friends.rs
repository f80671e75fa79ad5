//! Friend list command.

use amity::{Facade, StorageConfig};

use crate::cli::FriendsArgs;
use crate::output::OutputFormat;

/// Run the `friends` command
pub fn run(
    args: &FriendsArgs,
    config: StorageConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let facade = Facade::open(config)?;
    if !facade.instance().account_exists(&args.login) {
        return Err(format!("Account not registered: {}", args.login).into());
    }

    let friends = facade.list_friends(&args.login);
    match format {
        OutputFormat::Human => println!("{friends}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(friends.logins())?),
    }

    Ok(())
}
