pub mod cli;

use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mobile-inventory")]
#[command(about = "An in-memory inventory manager for mobile phone records")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
