pub mod console;
pub mod format;
pub mod runner;

pub use crate::domain::model::{LabGroup, LabId, LabInfo, RunReport};
pub use crate::domain::ports::{Lab, SettingsProvider};
pub use crate::utils::error::Result;
