pub mod settings;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::SortState;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// The directory picked for the previous search, restored on start.
    pub last_directory: Option<PathBuf>,
    /// Persisted table ordering.
    pub sort: SortState,
    pub window_size: (f64, f64),
    pub window_position: (f64, f64),
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        settings::load_config(None)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            last_directory: None,
            sort: SortState::default(),
            window_size: (1200.0, 600.0),
            window_position: (100.0, 100.0),
        }
    }
}
