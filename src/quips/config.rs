use crate::error::{QuipsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_FILE: &str = "quips_backup.json";
const DEFAULT_IMPORT_DELIMITER: char = ',';

/// Configuration for quips, stored as config.json next to the snippet data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuipsConfig {
    /// File name used by `export` when no explicit path is given.
    #[serde(default = "default_export_file")]
    pub export_file: String,

    /// Cell delimiter for `import` files.
    #[serde(default = "default_import_delimiter")]
    pub import_delimiter: char,
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

fn default_import_delimiter() -> char {
    DEFAULT_IMPORT_DELIMITER
}

impl Default for QuipsConfig {
    fn default() -> Self {
        Self {
            export_file: default_export_file(),
            import_delimiter: DEFAULT_IMPORT_DELIMITER,
        }
    }
}

impl QuipsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(QuipsError::Io)?;
        let config: QuipsConfig =
            serde_json::from_str(&content).map_err(QuipsError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(QuipsError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(QuipsError::Serialization)?;
        fs::write(config_path, content).map_err(QuipsError::Io)?;
        Ok(())
    }

    /// The import delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> u8 {
        self.import_delimiter as u8
    }

    pub fn set_import_delimiter(&mut self, value: &str) -> Result<()> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() => {
                self.import_delimiter = c;
                Ok(())
            }
            _ => Err(QuipsError::Api(format!(
                "Delimiter must be a single ASCII character, got {:?}",
                value
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = QuipsConfig::default();
        assert_eq!(config.export_file, "quips_backup.json");
        assert_eq!(config.import_delimiter, ',');
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = QuipsConfig::load(dir.path()).unwrap();
        assert_eq!(config, QuipsConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = QuipsConfig::default();
        config.export_file = "replies.json".to_string();
        config.set_import_delimiter(";").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = QuipsConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_delimiter_must_be_one_ascii_char() {
        let mut config = QuipsConfig::default();
        assert!(config.set_import_delimiter("").is_err());
        assert!(config.set_import_delimiter(";;").is_err());
        assert!(config.set_import_delimiter("→").is_err());
        assert!(config.set_import_delimiter("\t").is_ok());
    }

    #[test]
    fn test_partial_config_gets_defaults() {
        let config: QuipsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, QuipsConfig::default());
    }
}
