//! CLI commands

pub mod add;
pub mod categories;
pub mod changes;
pub mod init;
pub mod list;
pub mod open;
pub mod remove;
pub mod search;
pub mod update;
pub mod utils;
