//! Conversion configuration
//!
//! [`ConvertConfig`] holds the tunables and can be read from a TOML file:
//!
//! ```toml
//! icon_size = 64
//! data_file = "data.json"
//! sheet_file = "icons.webp"
//! machine_consumption = false
//! ```
//!
//! [`ConvertInputs`] names the documents and directories for one run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default edge length of a sprite sheet tile
pub const DEFAULT_ICON_SIZE: u32 = 64;

/// Sheet file extensions that can hold an RGBA image
pub const SHEET_EXTENSIONS: [&str; 2] = ["png", "webp"];

/// Tunables for a conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Tile edge length in pixels
    pub icon_size: u32,
    /// Name of the catalog document written to the output directory
    pub data_file: String,
    /// Name of the sprite sheet; the image format follows the extension
    pub sheet_file: String,
    /// Emit maintenance/computing/workers upkeep as machine consumption
    pub machine_consumption: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            icon_size: DEFAULT_ICON_SIZE,
            data_file: "data.json".to_string(),
            sheet_file: "icons.webp".to_string(),
            machine_consumption: false,
        }
    }
}

impl ConvertConfig {
    /// Load a config file, filling unset keys with defaults.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or holds invalid values.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text).map_err(|e| Error::ConfigParseFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(?config, "Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] for a zero icon size, empty file names or
    /// a sheet format without alpha support.
    pub fn validate(&self) -> Result<()> {
        if self.icon_size == 0 {
            return Err(Error::InvalidConfig {
                message: "icon_size must be at least 1".to_string(),
            });
        }
        if self.data_file.trim().is_empty() || self.sheet_file.trim().is_empty() {
            return Err(Error::InvalidConfig {
                message: "data_file and sheet_file must not be empty".to_string(),
            });
        }
        let sheet_extension = Path::new(&self.sheet_file).extension();
        if !sheet_extension.is_some_and(|ext| {
            SHEET_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        }) {
            return Err(Error::InvalidConfig {
                message: format!(
                    "sheet_file '{}' must end in .png or .webp",
                    self.sheet_file
                ),
            });
        }
        Ok(())
    }
}

/// Input documents and directories for one conversion
#[derive(Debug, Clone)]
pub struct ConvertInputs {
    pub products: PathBuf,
    pub machines: PathBuf,
    pub transports: Option<PathBuf>,
    /// Folder searched recursively for icon images; `None` skips the sprite sheet
    pub icons: Option<PathBuf>,
    pub output: PathBuf,
}

impl ConvertInputs {
    /// Inputs with the default output folder and no optional documents
    #[must_use]
    pub fn new(products: impl Into<PathBuf>, machines: impl Into<PathBuf>) -> Self {
        Self {
            products: products.into(),
            machines: machines.into(),
            transports: None,
            icons: None,
            output: PathBuf::from("./factoriolab_output"),
        }
    }

    #[must_use]
    pub fn with_transports(mut self, path: impl Into<PathBuf>) -> Self {
        self.transports = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_icons(mut self, path: impl Into<PathBuf>) -> Self {
        self.icons = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coilab.toml");
        std::fs::write(&path, "icon_size = 32\nmachine_consumption = true\n").unwrap();

        let config = ConvertConfig::load(&path).unwrap();
        assert_eq!(config.icon_size, 32);
        assert!(config.machine_consumption);
        assert_eq!(config.sheet_file, "icons.webp");
    }

    #[test]
    fn test_rejects_zero_icon_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coilab.toml");
        std::fs::write(&path, "icon_size = 0\n").unwrap();
        assert!(matches!(
            ConvertConfig::load(&path),
            Err(Error::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coilab.toml");
        std::fs::write(&path, "icon_sise = 32\n").unwrap();
        assert!(matches!(
            ConvertConfig::load(&path),
            Err(Error::ConfigParseFailed { .. })
        ));
    }

    #[test]
    fn test_sheet_format_must_keep_alpha() {
        for name in ["icons.jpg", "icons.jpeg", "icons", "icons.bmp"] {
            let config = ConvertConfig {
                sheet_file: name.to_string(),
                ..ConvertConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(Error::InvalidConfig { .. })),
                "{name} accepted"
            );
        }
        for name in ["icons.png", "Sheet.WEBP"] {
            let config = ConvertConfig {
                sheet_file: name.to_string(),
                ..ConvertConfig::default()
            };
            assert!(config.validate().is_ok(), "{name} rejected");
        }
    }

    #[test]
    fn test_jpeg_sheet_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coilab.toml");
        std::fs::write(&path, "sheet_file = \"icons.jpg\"\n").unwrap();
        assert!(matches!(
            ConvertConfig::load(&path),
            Err(Error::InvalidConfig { .. })
        ));
    }
}
