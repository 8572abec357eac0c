pub mod config;
pub mod core;
pub mod domain;
pub mod labs;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{Cli, Commands};

pub use config::LabbookConfig;
pub use core::console::{Console, Input, Output, TranscriptBuffer};
pub use core::runner::LabRunner;
pub use domain::model::{LabGroup, LabId, LabInfo, RunReport};
pub use utils::error::{LabError, Result};
