//! CLI argument definitions for the Amity binary.

use std::path::PathBuf;

use amity::{
    StorageConfig,
    constants::{DEFAULT_DATA_DIR, DEFAULT_DATA_FILE},
};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Amity social network administration
#[derive(Parser, Debug)]
#[command(name = "amity")]
#[command(about = "Amity: inspect and manage a stored social network")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub storage: StorageArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show storage locations and the number of stored accounts
    Info,
    /// List stored accounts
    Accounts,
    /// Show the confirmed friends of an account, in confirmation order
    Friends(FriendsArgs),
    /// Delete the stored account table and its backup
    Purge,
}

/// Where the account table lives
#[derive(clap::Args, Debug)]
pub struct StorageArgs {
    /// Directory holding the account table
    #[arg(
        short = 'D',
        long,
        default_value = DEFAULT_DATA_DIR,
        env = "AMITY_DATA_DIR",
        global = true
    )]
    pub data_dir: PathBuf,

    /// File name of the account table inside the data directory
    #[arg(long, default_value = DEFAULT_DATA_FILE, env = "AMITY_FILE_NAME", global = true)]
    pub file_name: String,
}

impl StorageArgs {
    pub fn config(&self) -> StorageConfig {
        StorageConfig::in_dir(&self.data_dir).with_file_name(&self.file_name)
    }
}

/// Arguments for the friends command
#[derive(clap::Args, Debug)]
pub struct FriendsArgs {
    /// Login whose friends to show
    pub login: String,
}
