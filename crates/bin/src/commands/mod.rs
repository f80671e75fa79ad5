//! Subcommand implementations.

pub mod accounts;
pub mod friends;
pub mod info;
pub mod purge;
