pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::StdConsole, CliConfig};
pub use crate::core::{menu::MenuEngine, store::MobileStore};
pub use domain::model::Mobile;
pub use utils::error::{InventoryError, Result};
