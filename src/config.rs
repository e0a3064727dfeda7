//! Harness configuration.
//!
//! The configuration is built once by the caller (usually from a TOML file
//! discovered under the working directory) and passed by reference to the
//! document loader and the catalog loader.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

/// Name of the user configuration file searched for by [`AladdinConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "aladdin_config.toml";
/// Fallback configuration file used when no user file exists.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "aladdin_config_default.toml";

const DEFAULT_DATA_FOLDER: &str =
    r"C:\ProgramData\Datalogic\Aladdin\datalogic-aladdin\assets\data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AladdinConfig {
    /// Aladdin `assets/data` folder holding `ConfigRepository`, `products.json`
    /// and `productsMenu.json`.
    pub data_folder_path: Utf8PathBuf,
}

impl Default for AladdinConfig {
    fn default() -> Self {
        Self {
            data_folder_path: Utf8PathBuf::from(DEFAULT_DATA_FOLDER),
        }
    }
}

impl AladdinConfig {
    pub fn with_data_folder(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            data_folder_path: path.into(),
        }
    }

    /// Parse a TOML configuration file. Keys may live at the top level or in
    /// an `[aladdin_auto]` table.
    pub fn from_file(path: impl AsRef<Utf8Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml(&text, path)
    }

    fn from_toml(text: &str, path: &Utf8Path) -> Result<Self> {
        #[derive(Deserialize)]
        struct Wrapped {
            aladdin_auto: AladdinConfig,
        }
        let config_err = |source: toml::de::Error| Error::Config {
            path: path.to_owned(),
            source,
        };
        let value: toml::Table = toml::from_str(text).map_err(config_err)?;
        if value.contains_key("aladdin_auto") {
            let wrapped: Wrapped = toml::from_str(text).map_err(config_err)?;
            Ok(wrapped.aladdin_auto)
        } else {
            toml::from_str(text).map_err(config_err)
        }
    }

    /// Search `root` recursively for [`CONFIG_FILE_NAME`], then for
    /// [`DEFAULT_CONFIG_FILE_NAME`]. Returns the defaults when neither exists.
    pub fn discover(root: impl AsRef<Utf8Path>) -> Result<Self> {
        let root = root.as_ref();
        for name in [CONFIG_FILE_NAME, DEFAULT_CONFIG_FILE_NAME] {
            if let Some(path) = find_file(root, name) {
                log::debug!("Using configuration file {}", path);
                return Self::from_file(&path);
            }
        }
        log::debug!("No configuration file under {}, using defaults", root);
        Ok(Self::default())
    }

    /// `<data>/ConfigRepository`
    pub fn config_repository(&self) -> Utf8PathBuf {
        self.data_folder_path.join("ConfigRepository")
    }

    /// `<data>/products.json`
    pub fn products_path(&self) -> Utf8PathBuf {
        self.data_folder_path.join("products.json")
    }

    /// `<data>/productsMenu.json`
    pub fn products_menu_path(&self) -> Utf8PathBuf {
        self.data_folder_path.join("productsMenu.json")
    }
}

fn find_file(root: &Utf8Path, name: &str) -> Option<Utf8PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.file_name() == name)
        .find_map(|e| Utf8PathBuf::from_path_buf(e.into_path()).ok())
}
