// ==============================================================================
// config.rs — DATA DIRECTORY
// ------------------------------------------------------------------------------
// Tire descriptions reference meshes relative to a vehicle data directory
// ("sedan/tire.obj"). DataConfig owns that directory and resolves such paths.
//
// Resolution order for the directory:
// 1) explicit DataConfig::new(dir)
// 2) $TIRE_DATA_DIR
// 3) "data/" relative to the working directory
// ==============================================================================

use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "TIRE_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone)]
pub struct DataConfig {
    data_dir: PathBuf,
}

impl DataConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn from_env() -> Self {
        match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new(DEFAULT_DATA_DIR),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Absolute paths pass through untouched.
    pub fn resolve(&self, file: impl AsRef<Path>) -> PathBuf {
        let file = file.as_ref();
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir.join(file)
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
