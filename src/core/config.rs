use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{NativesError, NativesResult};
use crate::core::maven::Repository;

const APP_DIR_NAME: &str = "natives-redirect";
const CONFIG_FILE: &str = "config.json";

/// Generator settings, read from `config.json`.
///
/// Every field is optional in the file; missing fields fall back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root of the local artifact cache.
    pub cache_dir: PathBuf,
    /// Where `generate` writes the descriptor.
    pub output: PathBuf,
    /// When false every transfer goes to the repository's primary URL.
    pub use_mirrors: bool,
    /// Per-repository mirror overrides.
    pub mirrors: BTreeMap<Repository, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("build").join("cache"),
            output: PathBuf::from("build").join("natives.json"),
            use_mirrors: true,
            mirrors: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// `<config dir>/natives-redirect/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE))
    }

    /// Load settings from an explicit file. The file must exist.
    pub fn load_from(path: &Path) -> NativesResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| NativesError::io(path, e))?;
        let settings: Settings = serde_json::from_str(&json)?;
        debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Load `path` if given, otherwise the default config file when it exists,
    /// otherwise defaults.
    pub fn load(path: Option<&Path>) -> NativesResult<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }
}
