//! Runtime configuration from the command line and environment.

use std::path::PathBuf;

use clap::Parser;

pub const DAYS_ENV: &str = "GILDED_ROSE_DAYS";
pub const INVENTORY_ENV: &str = "GILDED_ROSE_INVENTORY";
pub const DEFAULT_DAYS: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "gildedrose")]
#[command(about = "Print the inventory, then age it one day at a time")]
pub struct Config {
    /// Number of daily updates to run after the opening report
    #[arg(env = DAYS_ENV, default_value_t = DEFAULT_DAYS)]
    pub days: u32,

    /// JSON inventory file; the standard fixture is used when absent
    #[arg(long, env = INVENTORY_ENV)]
    pub inventory: Option<PathBuf>,
}
